//! Companies service.

use std::sync::Arc;

use serde::Serialize;

use super::query::{
    finite, is_blank, is_empty_filter, one_or_zero, to_query_pairs, ListFilter, Page,
};
use crate::client::paginated::{PaginatedResponse, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ApiRequest, ClientInner};
use crate::models::{
    Company, CompanyFinancials, CompanyStatus, CompanyType, CountryCode, InvestmentStage,
    OrderBy, OrderDirection, RecordId, ResponseType,
};
use crate::Result;

const COMPANIES_PATH: &str = "/api/v2/companies";

/// Service for company profiles and financials.
///
/// # Example
///
/// ```no_run
/// use altpe_rs::api::{CompaniesQuery, Page};
/// use altpe_rs::models::{CountryCode, InvestmentStage};
///
/// # async fn example(client: altpe_rs::AltPeClient) -> altpe_rs::Result<()> {
/// let query = CompaniesQuery {
///     countries: Some(vec![CountryCode::Sgp].into()),
///     investment_stage: Some(InvestmentStage::SeriesA),
///     valuation_min: Some(10_000_000.0),
///     ..Default::default()
/// };
/// let page = client.companies().list(&query, Page::default()).await?;
/// for company in &page.items {
///     println!("{}: {:?}", company.name, company.last_valuation);
/// }
///
/// let financials = client.companies().financials_by_uen("201912345K").await?;
/// println!("{} funding rounds", financials.fundings.len());
/// # Ok(())
/// # }
/// ```
pub struct CompaniesService {
    inner: Arc<ClientInner>,
}

/// Filters for [`CompaniesService::list`].
///
/// Defaults to ascending order with [`ResponseType::Simple`] records.
#[derive(Debug, Clone, Serialize)]
pub struct CompaniesQuery {
    /// Sort key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    /// Sort direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<OrderDirection>,
    /// Free-text search
    #[serde(skip_serializing_if = "is_blank")]
    pub query: Option<String>,
    /// Headquarter countries
    #[serde(skip_serializing_if = "is_empty_filter")]
    pub countries: Option<ListFilter<CountryCode>>,
    /// Sector ids
    #[serde(skip_serializing_if = "is_empty_filter")]
    pub sectors: Option<ListFilter<u32>>,
    /// Theme ids
    #[serde(skip_serializing_if = "is_empty_filter")]
    pub themes: Option<ListFilter<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_stage: Option<InvestmentStage>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub valuation_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub valuation_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub total_funding_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub total_funding_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub revenue_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub revenue_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub revenue_growth_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub revenue_growth_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CompanyStatus>,
    /// Sent as `1`/`0`
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "one_or_zero")]
    pub female_founder: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_type: Option<CompanyType>,
    /// Country of incorporation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<CountryCode>,
}

impl Default for CompaniesQuery {
    fn default() -> Self {
        Self {
            order_by: None,
            order_direction: Some(OrderDirection::Asc),
            query: None,
            countries: None,
            sectors: None,
            themes: None,
            investment_stage: None,
            valuation_min: None,
            valuation_max: None,
            total_funding_min: None,
            total_funding_max: None,
            revenue_min: None,
            revenue_max: None,
            revenue_growth_min: None,
            revenue_growth_max: None,
            status: None,
            female_founder: None,
            response_type: Some(ResponseType::Simple),
            co_type: None,
            iso_code: None,
        }
    }
}

impl CompaniesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List companies matching `query`.
    pub async fn list(
        &self,
        query: &CompaniesQuery,
        page: Page,
    ) -> Result<PaginatedResponse<Company>> {
        let pairs = to_query_pairs(&page.wrap(query))?;
        self.inner
            .get_page(ApiRequest::get(COMPANIES_PATH).query(pairs))
            .await
    }

    /// Stream every company matching `query`, one page at a time.
    pub fn list_stream(&self, query: CompaniesQuery) -> PaginatedStream<Company> {
        PaginatedStreamBuilder::new(self.inner.clone(), COMPANIES_PATH).build_with_query(query)
    }

    /// Get a company by id.
    pub async fn get(&self, id: impl Into<RecordId>) -> Result<Company> {
        self.inner
            .get(&format!("{}/{}", COMPANIES_PATH, id.into()))
            .await
    }

    /// Get a company by its Unique Entity Number.
    pub async fn get_by_uen(&self, uen: &str) -> Result<Company> {
        self.inner
            .get(&format!("{}/{}/uen", COMPANIES_PATH, uen))
            .await
    }

    /// Get the financial history of a company by id.
    pub async fn financials(&self, id: impl Into<RecordId>) -> Result<CompanyFinancials> {
        self.inner
            .get(&format!("{}/{}/financials", COMPANIES_PATH, id.into()))
            .await
    }

    /// Get the financial history of a company by Unique Entity Number.
    pub async fn financials_by_uen(&self, uen: &str) -> Result<CompanyFinancials> {
        self.inner
            .get(&format!("{}/{}/uen/financials", COMPANIES_PATH, uen))
            .await
    }
}
