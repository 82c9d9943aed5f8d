//! Capital providers service.

use std::sync::Arc;

use serde::Serialize;

use super::query::{is_blank, is_empty_filter, to_query_pairs, ListFilter, Page};
use crate::client::paginated::{PaginatedResponse, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ApiRequest, ClientInner};
use crate::models::{
    CapitalProvider, CapitalProviderCategory, CapitalProviderOrderBy, OrderDirection, RecordId,
};
use crate::{Error, Result};

const CAPITAL_PROVIDERS_PATH: &str = "/api/v2/capital-providers";

/// Service for fund managers, limited partners and family offices.
///
/// # Example
///
/// ```no_run
/// use altpe_rs::models::CapitalProviderCategory;
///
/// # async fn example(client: altpe_rs::AltPeClient) -> altpe_rs::Result<()> {
/// let provider = client
///     .capital_providers()
///     .get(1203, CapitalProviderCategory::LimitedPartner)
///     .await?;
/// println!("{} ({:?})", provider.name, provider.category);
/// # Ok(())
/// # }
/// ```
pub struct CapitalProvidersService {
    inner: Arc<ClientInner>,
}

/// Filters for [`CapitalProvidersService::list`].
///
/// Location, fund type, sector and theme filters take lookup ids.
#[derive(Debug, Clone, Serialize)]
pub struct CapitalProvidersQuery {
    pub order_by: CapitalProviderOrderBy,
    pub order_direction: OrderDirection,
    /// Free-text search
    #[serde(skip_serializing_if = "is_blank")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "is_empty_filter")]
    pub category: Option<ListFilter<CapitalProviderCategory>>,
    /// Headquarters location id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hq: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_location: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_fund_type: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_sector: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_theme: Option<u32>,
}

impl Default for CapitalProvidersQuery {
    fn default() -> Self {
        Self {
            order_by: CapitalProviderOrderBy::DisplayName,
            order_direction: OrderDirection::Asc,
            query: None,
            registration_number: None,
            category: None,
            hq: None,
            preferred_location: None,
            preferred_fund_type: None,
            preferred_sector: None,
            preferred_theme: None,
        }
    }
}

impl CapitalProvidersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List capital providers.
    pub async fn list(
        &self,
        query: &CapitalProvidersQuery,
        page: Page,
    ) -> Result<PaginatedResponse<CapitalProvider>> {
        let pairs = to_query_pairs(&page.wrap(query))?;
        self.inner
            .get_page(ApiRequest::get(CAPITAL_PROVIDERS_PATH).query(pairs))
            .await
    }

    /// Stream every capital provider matching `query`.
    pub fn list_stream(&self, query: CapitalProvidersQuery) -> PaginatedStream<CapitalProvider> {
        PaginatedStreamBuilder::new(self.inner.clone(), CAPITAL_PROVIDERS_PATH)
            .build_with_query(query)
    }

    /// Get a capital provider by id within `category`.
    ///
    /// The API rejects a category that does not match the provider with a
    /// 422. In that case the lookup is repeated once as
    /// [`CapitalProviderCategory::FundManager`]; the second outcome is final.
    ///
    /// When `category` is already `FundManager` there is no fallback: a
    /// rejection is returned as-is after the single request.
    pub async fn get(
        &self,
        id: impl Into<RecordId>,
        category: impl AsRef<str>,
    ) -> Result<CapitalProvider> {
        let path = format!("{}/{}/", CAPITAL_PROVIDERS_PATH, id.into());
        let category = category.as_ref();
        let fallback = CapitalProviderCategory::default().as_str();

        match self.fetch(&path, category).await {
            Err(Error::Validation { message, .. }) if category != fallback => {
                tracing::debug!(
                    category,
                    %message,
                    "Capital provider category rejected; retrying as {}",
                    fallback
                );
                self.fetch(&path, fallback).await
            }
            result => result,
        }
    }

    async fn fetch(&self, path: &str, category: &str) -> Result<CapitalProvider> {
        self.inner
            .get_with_query(path, vec![("category".to_string(), category.to_string())])
            .await
    }
}
