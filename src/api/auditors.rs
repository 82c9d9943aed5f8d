//! Auditors service.

use std::sync::Arc;

use super::query::{to_query_pairs, Page};
use super::search::SearchQuery;
use crate::client::paginated::{PaginatedResponse, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ApiRequest, ClientInner};
use crate::models::{AuditorDetail, RecordId};
use crate::Result;

const AUDITORS_PATH: &str = "/api/v2/auditors";

/// Service for audit firms.
pub struct AuditorsService {
    inner: Arc<ClientInner>,
}

impl AuditorsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List auditors.
    pub async fn list(
        &self,
        query: &SearchQuery,
        page: Page,
    ) -> Result<PaginatedResponse<AuditorDetail>> {
        let pairs = to_query_pairs(&page.wrap(query))?;
        self.inner
            .get_page(ApiRequest::get(AUDITORS_PATH).query(pairs))
            .await
    }

    /// Stream every auditor matching `query`.
    pub fn list_stream(&self, query: SearchQuery) -> PaginatedStream<AuditorDetail> {
        PaginatedStreamBuilder::new(self.inner.clone(), AUDITORS_PATH).build_with_query(query)
    }

    /// Get an auditor by id.
    pub async fn get(&self, id: impl Into<RecordId>) -> Result<AuditorDetail> {
        self.inner
            .get(&format!("{}/{}", AUDITORS_PATH, id.into()))
            .await
    }
}
