//! Funds service.

use std::sync::Arc;

use serde::Serialize;

use super::query::{finite, is_blank, to_query_pairs, Page};
use crate::client::paginated::{PaginatedResponse, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ApiRequest, ClientInner};
use crate::models::{Fund, FundOrderBy, FundStatus, OrderDirection, RecordId};
use crate::Result;

const FUNDS_PATH: &str = "/api/v2/funds/";

/// Service for funds.
///
/// # Example
///
/// ```no_run
/// use altpe_rs::api::{FundsQuery, Page};
/// use altpe_rs::models::FundStatus;
///
/// # async fn example(client: altpe_rs::AltPeClient) -> altpe_rs::Result<()> {
/// let query = FundsQuery {
///     vintage_year_min: Some(2015),
///     net_irr_min: Some(0.15),
///     status: Some(FundStatus::Closed),
///     ..Default::default()
/// };
/// let funds = client.funds().list(&query, Page::default()).await?;
/// println!("{} funds", funds.pagination.total_records);
/// # Ok(())
/// # }
/// ```
pub struct FundsService {
    inner: Arc<ClientInner>,
}

/// Filters for [`FundsService::list`].
#[derive(Debug, Clone, Serialize)]
pub struct FundsQuery {
    pub order_by: FundOrderBy,
    pub order_direction: OrderDirection,
    /// Free-text search
    #[serde(skip_serializing_if = "is_blank")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vintage_year_min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vintage_year_max: Option<i32>,
    /// Fund type lookup id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_type: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub size_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub size_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub net_irr_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub net_irr_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub net_multiple_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub net_multiple_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub dpi_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub dpi_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub rvpi_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub rvpi_max: Option<f64>,
    /// e.g. `2024-Q2`
    #[serde(skip_serializing_if = "is_blank")]
    pub last_report_quarter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FundStatus>,
}

impl Default for FundsQuery {
    fn default() -> Self {
        Self {
            order_by: FundOrderBy::Name,
            order_direction: OrderDirection::Asc,
            query: None,
            registration_number: None,
            vintage_year_min: None,
            vintage_year_max: None,
            fund_type: None,
            size_min: None,
            size_max: None,
            net_irr_min: None,
            net_irr_max: None,
            net_multiple_min: None,
            net_multiple_max: None,
            dpi_min: None,
            dpi_max: None,
            rvpi_min: None,
            rvpi_max: None,
            last_report_quarter: None,
            status: None,
        }
    }
}

impl FundsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List funds.
    pub async fn list(&self, query: &FundsQuery, page: Page) -> Result<PaginatedResponse<Fund>> {
        let pairs = to_query_pairs(&page.wrap(query))?;
        self.inner
            .get_page(ApiRequest::get(FUNDS_PATH).query(pairs))
            .await
    }

    /// Stream every fund matching `query`.
    pub fn list_stream(&self, query: FundsQuery) -> PaginatedStream<Fund> {
        PaginatedStreamBuilder::new(self.inner.clone(), FUNDS_PATH).build_with_query(query)
    }

    /// Get a fund by id.
    pub async fn get(&self, id: impl Into<RecordId>) -> Result<Fund> {
        self.inner.get(&format!("{}{}", FUNDS_PATH, id.into())).await
    }
}
