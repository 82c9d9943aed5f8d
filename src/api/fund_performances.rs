//! Fund performances service.

use std::sync::Arc;

use serde::Serialize;

use super::query::{finite, is_blank, to_query_pairs, Page};
use crate::client::paginated::{PaginatedResponse, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ApiRequest, ClientInner};
use crate::models::{FundPerformance, FundPerformanceOrderBy, OrderDirection, RecordId};
use crate::Result;

const FUND_PERFORMANCES_PATH: &str = "/api/v2/fund-performances/";

/// Service for reported fund performance snapshots.
pub struct FundPerformancesService {
    inner: Arc<ClientInner>,
}

/// Filters for [`FundPerformancesService::list`].
#[derive(Debug, Clone, Serialize)]
pub struct FundPerformancesQuery {
    pub order_by: FundPerformanceOrderBy,
    pub order_direction: OrderDirection,
    #[serde(skip_serializing_if = "is_blank")]
    pub query: Option<String>,
    /// Only snapshots of this fund
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_id: Option<u64>,
    #[serde(skip_serializing_if = "is_blank")]
    pub reporting_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub irr_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub irr_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub dpi_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub dpi_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub rvpi_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub rvpi_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub net_multiple_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub net_multiple_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub net_assets_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub net_assets_max: Option<f64>,
}

impl Default for FundPerformancesQuery {
    fn default() -> Self {
        Self {
            order_by: FundPerformanceOrderBy::Dpi,
            order_direction: OrderDirection::Asc,
            query: None,
            fund_id: None,
            reporting_period: None,
            irr_min: None,
            irr_max: None,
            dpi_min: None,
            dpi_max: None,
            rvpi_min: None,
            rvpi_max: None,
            net_multiple_min: None,
            net_multiple_max: None,
            net_assets_min: None,
            net_assets_max: None,
        }
    }
}

impl FundPerformancesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List fund performance snapshots.
    pub async fn list(
        &self,
        query: &FundPerformancesQuery,
        page: Page,
    ) -> Result<PaginatedResponse<FundPerformance>> {
        let pairs = to_query_pairs(&page.wrap(query))?;
        self.inner
            .get_page(ApiRequest::get(FUND_PERFORMANCES_PATH).query(pairs))
            .await
    }

    /// Stream every snapshot matching `query`.
    pub fn list_stream(&self, query: FundPerformancesQuery) -> PaginatedStream<FundPerformance> {
        PaginatedStreamBuilder::new(self.inner.clone(), FUND_PERFORMANCES_PATH)
            .build_with_query(query)
    }

    /// Get a performance snapshot by id.
    pub async fn get(&self, id: impl Into<RecordId>) -> Result<FundPerformance> {
        self.inner
            .get(&format!("{}{}", FUND_PERFORMANCES_PATH, id.into()))
            .await
    }
}
