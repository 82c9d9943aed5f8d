//! Investors service.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::query::{is_blank, is_empty_filter, to_query_pairs, ListFilter, Page};
use crate::client::paginated::{PaginatedResponse, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ApiRequest, ClientInner};
use crate::models::{
    InvestmentStage, InvestorDetail, InvestorSummary, OrderBy, OrderDirection, RecordId,
    ResponseType,
};
use crate::Result;

const INVESTORS_PATH: &str = "/api/v2/investors";

/// Service for investors and their portfolios.
///
/// # Example
///
/// ```no_run
/// use altpe_rs::api::{InvestorsQuery, Page};
/// use altpe_rs::models::{InvestmentStage, OrderBy, OrderDirection};
///
/// # async fn example(client: altpe_rs::AltPeClient) -> altpe_rs::Result<()> {
/// let query = InvestorsQuery {
///     order_by: Some(OrderBy::NoOfInvestedCompanies),
///     order_direction: Some(OrderDirection::Desc),
///     invested_in_stage: Some(InvestmentStage::Seed),
///     ..Default::default()
/// };
/// let top = client.investors().list(&query, Page::first(10)).await?;
/// if let Some(first) = top.items.first() {
///     let detail = client.investors().get(first.id.clone()).await?;
///     println!("{} holds {} companies", detail.investor_name, detail.companies.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct InvestorsService {
    inner: Arc<ClientInner>,
}

/// Filters for [`InvestorsService::list`].
#[derive(Debug, Clone, Serialize)]
pub struct InvestorsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<OrderDirection>,
    /// Free-text search
    #[serde(skip_serializing_if = "is_blank")]
    pub query: Option<String>,
    /// Sector ids
    #[serde(skip_serializing_if = "is_empty_filter")]
    pub sectors: Option<ListFilter<u32>>,
    /// Theme ids
    #[serde(skip_serializing_if = "is_empty_filter")]
    pub themes: Option<ListFilter<u32>>,
    /// Only investors that backed a round at this stage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invested_in_stage: Option<InvestmentStage>,
    /// Earliest investment date (inclusive), sent as `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invested_on_from: Option<NaiveDate>,
    /// Latest investment date (inclusive), sent as `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invested_on_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
}

impl Default for InvestorsQuery {
    fn default() -> Self {
        Self {
            order_by: None,
            order_direction: Some(OrderDirection::Asc),
            query: None,
            sectors: None,
            themes: None,
            invested_in_stage: None,
            invested_on_from: None,
            invested_on_to: None,
            response_type: Some(ResponseType::Simple),
        }
    }
}

impl InvestorsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List investors matching `query`.
    pub async fn list(
        &self,
        query: &InvestorsQuery,
        page: Page,
    ) -> Result<PaginatedResponse<InvestorSummary>> {
        let pairs = to_query_pairs(&page.wrap(query))?;
        self.inner
            .get_page(ApiRequest::get(INVESTORS_PATH).query(pairs))
            .await
    }

    /// Stream every investor matching `query`.
    pub fn list_stream(&self, query: InvestorsQuery) -> PaginatedStream<InvestorSummary> {
        PaginatedStreamBuilder::new(self.inner.clone(), INVESTORS_PATH).build_with_query(query)
    }

    /// Get an investor with its portfolio.
    pub async fn get(&self, id: impl Into<RecordId>) -> Result<InvestorDetail> {
        self.inner
            .get(&format!("{}/{}", INVESTORS_PATH, id.into()))
            .await
    }
}
