//! Search filters shared by the directors, founders and auditors endpoints.

use serde::Serialize;

use super::query::is_blank;
use crate::models::{OrderBy, OrderDirection};

/// Name search with ordering.
///
/// ```
/// use altpe_rs::api::SearchQuery;
///
/// let query = SearchQuery::named("tan");
/// assert_eq!(query.query.as_deref(), Some("tan"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<OrderDirection>,
    /// Free-text search
    #[serde(skip_serializing_if = "is_blank")]
    pub query: Option<String>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            order_by: None,
            order_direction: Some(OrderDirection::Asc),
            query: None,
        }
    }
}

impl SearchQuery {
    /// Search by name, default ordering.
    pub fn named(text: impl Into<String>) -> Self {
        Self {
            query: Some(text.into()),
            ..Default::default()
        }
    }
}
