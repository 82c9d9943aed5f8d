//! Commitment deals service.

use std::sync::Arc;

use serde::Serialize;

use super::query::{is_blank, to_query_pairs, Page};
use crate::client::paginated::{PaginatedResponse, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ApiRequest, ClientInner};
use crate::models::{CommitmentDeal, CommitmentDealOrderBy, OrderDirection, RecordId};
use crate::Result;

const COMMITMENT_DEALS_PATH: &str = "/api/v2/commitment-deals/";

/// Service for limited partner commitments.
pub struct CommitmentDealsService {
    inner: Arc<ClientInner>,
}

/// Filters for [`CommitmentDealsService::list`].
#[derive(Debug, Clone, Serialize)]
pub struct CommitmentDealsQuery {
    pub order_by: CommitmentDealOrderBy,
    pub order_direction: OrderDirection,
    #[serde(skip_serializing_if = "is_blank")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limited_partner_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_id: Option<u64>,
    /// Fund type lookup id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_type: Option<u32>,
}

impl Default for CommitmentDealsQuery {
    fn default() -> Self {
        Self {
            order_by: CommitmentDealOrderBy::FundManagerName,
            order_direction: OrderDirection::Asc,
            query: None,
            limited_partner_id: None,
            fund_id: None,
            fund_type: None,
        }
    }
}

impl CommitmentDealsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List commitment deals.
    pub async fn list(
        &self,
        query: &CommitmentDealsQuery,
        page: Page,
    ) -> Result<PaginatedResponse<CommitmentDeal>> {
        let pairs = to_query_pairs(&page.wrap(query))?;
        self.inner
            .get_page(ApiRequest::get(COMMITMENT_DEALS_PATH).query(pairs))
            .await
    }

    /// Stream every deal matching `query`.
    pub fn list_stream(&self, query: CommitmentDealsQuery) -> PaginatedStream<CommitmentDeal> {
        PaginatedStreamBuilder::new(self.inner.clone(), COMMITMENT_DEALS_PATH)
            .build_with_query(query)
    }

    /// Get a commitment deal by id.
    pub async fn get(&self, id: impl Into<RecordId>) -> Result<CommitmentDeal> {
        self.inner
            .get(&format!("{}{}", COMMITMENT_DEALS_PATH, id.into()))
            .await
    }
}
