//! People service.

use std::sync::Arc;

use reqwest::header::{HeaderValue, ACCEPT};
use serde::Serialize;

use super::query::{is_blank, to_query_pairs, Page};
use crate::client::paginated::{PaginatedResponse, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ApiRequest, ClientInner};
use crate::models::{OrderDirection, Person, PersonOrderBy, RecordId};
use crate::Result;

const PEOPLE_PATH: &str = "/api/v2/people/";

/// Service for the people directory.
///
/// # Example
///
/// ```no_run
/// use altpe_rs::api::{Page, PeopleQuery};
///
/// # async fn example(client: altpe_rs::AltPeClient) -> altpe_rs::Result<()> {
/// let query = PeopleQuery {
///     last_name: Some("Tan".into()),
///     ..Default::default()
/// };
/// for person in client.people().list(&query, Page::default()).await? {
///     println!("{} - {} roles", person.full_name(), person.job_titles.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct PeopleService {
    inner: Arc<ClientInner>,
}

/// Filters for [`PeopleService::list`].
#[derive(Debug, Clone, Serialize)]
pub struct PeopleQuery {
    pub order_by: PersonOrderBy,
    pub order_direction: OrderDirection,
    #[serde(skip_serializing_if = "is_blank")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub email: Option<String>,
}

impl Default for PeopleQuery {
    fn default() -> Self {
        Self {
            order_by: PersonOrderBy::Id,
            order_direction: OrderDirection::Asc,
            first_name: None,
            last_name: None,
            email: None,
        }
    }
}

impl PeopleService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List people.
    pub async fn list(&self, query: &PeopleQuery, page: Page) -> Result<PaginatedResponse<Person>> {
        let pairs = to_query_pairs(&page.wrap(query))?;
        let request = ApiRequest::get(PEOPLE_PATH)
            .query(pairs)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        self.inner.get_page(request).await
    }

    /// Stream every person matching `query`.
    pub fn list_stream(&self, query: PeopleQuery) -> PaginatedStream<Person> {
        PaginatedStreamBuilder::new(self.inner.clone(), PEOPLE_PATH)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .build_with_query(query)
    }

    /// Get a person by id.
    pub async fn get(&self, id: impl Into<RecordId>) -> Result<Person> {
        self.inner
            .get(&format!("{}{}", PEOPLE_PATH, id.into()))
            .await
    }
}
