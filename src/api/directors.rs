//! Directors service.

use std::sync::Arc;

use super::query::{to_query_pairs, Page};
use super::search::SearchQuery;
use crate::client::paginated::{PaginatedResponse, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ApiRequest, ClientInner};
use crate::models::{DirectorDetail, RecordId};
use crate::Result;

const DIRECTORS_PATH: &str = "/api/v2/directors";

/// Service for company directors.
pub struct DirectorsService {
    inner: Arc<ClientInner>,
}

impl DirectorsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List directors.
    pub async fn list(
        &self,
        query: &SearchQuery,
        page: Page,
    ) -> Result<PaginatedResponse<DirectorDetail>> {
        let pairs = to_query_pairs(&page.wrap(query))?;
        self.inner
            .get_page(ApiRequest::get(DIRECTORS_PATH).query(pairs))
            .await
    }

    /// Stream every director matching `query`.
    pub fn list_stream(&self, query: SearchQuery) -> PaginatedStream<DirectorDetail> {
        PaginatedStreamBuilder::new(self.inner.clone(), DIRECTORS_PATH).build_with_query(query)
    }

    /// Get a director by id.
    pub async fn get(&self, id: impl Into<RecordId>) -> Result<DirectorDetail> {
        self.inner
            .get(&format!("{}/{}", DIRECTORS_PATH, id.into()))
            .await
    }
}
