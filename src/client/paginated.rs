//! Offset pagination: the page envelope and a lazy stream over all pages.
//!
//! List endpoints answer in one of two shapes. The company-registry
//! endpoints nest the page under `data`:
//!
//! ```json
//! {"data": {"total_records": 37, "no_of_pages": 4, "limit": 10, "offset": 20, "data": [..]}}
//! ```
//!
//! while the venture-capital endpoints return it flat:
//!
//! ```json
//! {"total_records": 37, "limit": 10, "offset": 20, "data": [..]}
//! ```
//!
//! Both decode into [`PaginatedResponse`].

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::http::{ApiRequest, ClientInner};
use crate::api::query::{to_query_pairs, Page};
use crate::Result;

/// One page of a list endpoint.
#[derive(Debug, Clone)]
pub struct PaginatedResponse<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Pagination metadata, as reported by the server.
    pub pagination: PaginationInfo,
}

/// Pagination metadata from API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Total number of records across all pages.
    pub total_records: u64,
    /// Page size the server applied.
    pub limit: u64,
    /// Offset of the first item in this page.
    pub offset: u64,
    /// Number of pages, when the endpoint reports it.
    pub page_count: Option<u64>,
}

impl PaginationInfo {
    /// Check if there are records after this page.
    pub fn has_more(&self) -> bool {
        self.limit > 0 && self.offset.saturating_add(self.limit) < self.total_records
    }

    /// Offset of the next page, if any.
    pub fn next_offset(&self) -> Option<u64> {
        self.has_more()
            .then(|| self.offset.saturating_add(self.limit))
    }
}

impl<T> PaginatedResponse<T> {
    /// Total number of records across all pages.
    pub fn total_records(&self) -> u64 {
        self.pagination.total_records
    }

    /// Returns `true` if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for PaginatedResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[derive(Deserialize)]
struct PageBody<T> {
    total_records: u64,
    #[serde(default)]
    no_of_pages: Option<u64>,
    limit: u64,
    offset: u64,
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for PaginatedResponse<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Nested pages carry an object under `data`; flat pages an array.
        let mut value = Value::deserialize(deserializer)?;
        if value.get("data").is_some_and(Value::is_object) {
            value = value["data"].take();
        }
        let body: PageBody<T> = serde_json::from_value(value).map_err(D::Error::custom)?;

        Ok(PaginatedResponse {
            items: body.data,
            pagination: PaginationInfo {
                total_records: body.total_records,
                limit: body.limit,
                offset: body.offset,
                page_count: body.no_of_pages,
            },
        })
    }
}

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// A stream that lazily fetches pages from a paginated API endpoint.
///
/// This stream yields individual items from each page, automatically
/// fetching the next offset when the current page is exhausted. It stops
/// after the page that reaches `total_records`, on an empty page, or on
/// the first error.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use altpe_rs::api::FundsQuery;
///
/// # async fn example(client: altpe_rs::AltPeClient) -> altpe_rs::Result<()> {
/// let mut funds = client.funds().list_stream(FundsQuery::default());
///
/// while let Some(result) = funds.next().await {
///     let fund = result?;
///     println!("{}", fund.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch a page by offset.
    fetch_page: Box<dyn Fn(u64) -> BoxFuture<'static, Result<PaginatedResponse<T>>> + Send + Sync>,
    /// Current page of items being yielded.
    current_items: std::vec::IntoIter<T>,
    /// Next offset to fetch, None if exhausted.
    next_offset: Option<u64>,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<PaginatedResponse<T>>>>,
}

impl<T> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Create a new paginated stream starting at `start_offset`.
    pub fn new<F>(start_offset: u64, fetch_page: F) -> Self
    where
        F: Fn(u64) -> BoxFuture<'static, Result<PaginatedResponse<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: Vec::new().into_iter(),
            next_offset: Some(start_offset),
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.next() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(response)) => {
                        this.pending_fetch = None;
                        this.next_offset = response.pagination.next_offset();

                        if response.items.is_empty() {
                            this.next_offset = None;
                            return Poll::Ready(None);
                        }

                        this.current_items = response.items.into_iter();
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_offset = None; // Stop on error
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => {
                        return Poll::Pending;
                    }
                }
            }

            if let Some(offset) = this.next_offset.take() {
                this.pending_fetch = Some((this.fetch_page)(offset));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

/// Builder for creating paginated streams with query parameters.
pub(crate) struct PaginatedStreamBuilder<T> {
    inner: Arc<ClientInner>,
    path: String,
    page: Page,
    headers: HeaderMap,
    _marker: std::marker::PhantomData<T>,
}

impl<T: DeserializeOwned + Send + 'static> PaginatedStreamBuilder<T> {
    /// Create a new builder.
    pub(crate) fn new(inner: Arc<ClientInner>, path: impl Into<String>) -> Self {
        Self {
            inner,
            path: path.into(),
            page: Page::default(),
            headers: HeaderMap::new(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Send an extra header with every page request.
    pub(crate) fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Build the stream with the given filters.
    pub(crate) fn build_with_query<Q>(self, query: Q) -> PaginatedStream<T>
    where
        Q: Serialize + Send + Sync + 'static,
    {
        let inner = self.inner;
        let path = self.path;
        let limit = self.page.limit();
        let headers = self.headers;
        let query = Arc::new(query);

        PaginatedStream::new(self.page.offset, move |offset: u64| {
            let inner = inner.clone();
            let path = path.clone();
            let headers = headers.clone();
            let query = query.clone();

            Box::pin(async move {
                let pairs = to_query_pairs(&Page::new(limit, offset).wrap(&*query))?;
                let mut request = ApiRequest::get(path).query(pairs);
                request.headers = headers;
                inner.get_page::<T>(request).await
            })
        })
    }
}
