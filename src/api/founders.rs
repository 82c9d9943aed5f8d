//! Founders service.

use std::sync::Arc;

use super::query::{to_query_pairs, Page};
use super::search::SearchQuery;
use crate::client::paginated::{PaginatedResponse, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ApiRequest, ClientInner};
use crate::models::{FounderDetail, RecordId};
use crate::Result;

const FOUNDERS_PATH: &str = "/api/v2/founders";

/// Service for company founders.
///
/// # Example
///
/// ```no_run
/// use altpe_rs::api::{Page, SearchQuery};
///
/// # async fn example(client: altpe_rs::AltPeClient) -> altpe_rs::Result<()> {
/// let founders = client
///     .founders()
///     .list(&SearchQuery::named("lim"), Page::first(25))
///     .await?;
/// for founder in founders {
///     println!("{} ({:?})", founder.name, founder.designation);
/// }
/// # Ok(())
/// # }
/// ```
pub struct FoundersService {
    inner: Arc<ClientInner>,
}

impl FoundersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List founders.
    pub async fn list(
        &self,
        query: &SearchQuery,
        page: Page,
    ) -> Result<PaginatedResponse<FounderDetail>> {
        let pairs = to_query_pairs(&page.wrap(query))?;
        self.inner
            .get_page(ApiRequest::get(FOUNDERS_PATH).query(pairs))
            .await
    }

    /// Stream every founder matching `query`.
    pub fn list_stream(&self, query: SearchQuery) -> PaginatedStream<FounderDetail> {
        PaginatedStreamBuilder::new(self.inner.clone(), FOUNDERS_PATH).build_with_query(query)
    }

    /// Get a founder by id.
    pub async fn get(&self, id: impl Into<RecordId>) -> Result<FounderDetail> {
        self.inner
            .get(&format!("{}/{}", FOUNDERS_PATH, id.into()))
            .await
    }
}
