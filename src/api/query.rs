//! Query-string shaping shared by all list endpoints.

use std::fmt;

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::{Error, Result};

/// Largest page the API serves.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Offset pagination window.
///
/// `limit` is clamped to [`MAX_PAGE_SIZE`] when sent; `offset` is sent
/// as given.
///
/// ```
/// use altpe_rs::api::Page;
///
/// assert_eq!(Page::new(500, 0).limit(), 100);
/// assert_eq!(Page::first(10).offset, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: u32,
    /// Number of records to skip
    pub offset: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl Page {
    /// A page of `limit` records starting at `offset`.
    pub fn new(limit: u32, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// The first `limit` records.
    pub fn first(limit: u32) -> Self {
        Self::new(limit, 0)
    }

    /// Page size as sent on the wire.
    pub fn limit(&self) -> u32 {
        self.limit.min(MAX_PAGE_SIZE)
    }

    /// The page following this one.
    pub fn next(&self) -> Self {
        Self::new(self.limit, self.offset.saturating_add(u64::from(self.limit())))
    }

    pub(crate) fn wrap<'a, Q: Serialize>(&self, filters: &'a Q) -> PageParams<'a, Q> {
        PageParams {
            limit: self.limit(),
            offset: self.offset,
            filters,
        }
    }
}

/// Filters plus the pagination window, flattened into one query string.
#[derive(Serialize)]
pub(crate) struct PageParams<'a, Q> {
    limit: u32,
    offset: u64,
    #[serde(flatten)]
    filters: &'a Q,
}

/// A multi-valued filter sent as one comma-joined parameter.
///
/// Accepts either a ready-made string or a list of values.
///
/// ```
/// use altpe_rs::api::ListFilter;
/// use altpe_rs::models::CountryCode;
///
/// let countries: ListFilter<CountryCode> = vec![CountryCode::Sgp, CountryCode::Mys].into();
/// assert_eq!(countries.to_string(), "SGP,MYS");
///
/// let sectors: ListFilter<u32> = "4,9".into();
/// assert_eq!(sectors.to_string(), "4,9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter<T> {
    /// A pre-joined value, sent verbatim
    Joined(String),
    /// Individual values, joined with `,`
    Values(Vec<T>),
}

impl<T> ListFilter<T> {
    /// Returns `true` if the filter would send nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            ListFilter::Joined(s) => s.trim().is_empty(),
            ListFilter::Values(v) => v.is_empty(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ListFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListFilter::Joined(s) => f.write_str(s),
            ListFilter::Values(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl<T: fmt::Display> Serialize for ListFilter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<T> From<Vec<T>> for ListFilter<T> {
    fn from(values: Vec<T>) -> Self {
        ListFilter::Values(values)
    }
}

impl<T, const N: usize> From<[T; N]> for ListFilter<T> {
    fn from(values: [T; N]) -> Self {
        ListFilter::Values(values.into())
    }
}

impl<T> From<&str> for ListFilter<T> {
    fn from(joined: &str) -> Self {
        ListFilter::Joined(joined.to_string())
    }
}

impl<T> From<String> for ListFilter<T> {
    fn from(joined: String) -> Self {
        ListFilter::Joined(joined)
    }
}

/// `skip_serializing_if` helper for optional strings: omits `None` and `""`.
pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// `skip_serializing_if` helper for list filters: omits `None` and empty lists.
pub(crate) fn is_empty_filter<T>(value: &Option<ListFilter<T>>) -> bool {
    value.as_ref().map_or(true, ListFilter::is_empty)
}

/// Serialize an optional flag as `"1"`/`"0"`.
pub(crate) fn one_or_zero<S: Serializer>(
    value: &Option<bool>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(true) => serializer.serialize_str("1"),
        Some(false) => serializer.serialize_str("0"),
        None => serializer.serialize_none(),
    }
}

/// Serialize an optional float filter, rejecting NaN and infinities.
///
/// JSON has no spelling for them; they would become `null` and be dropped.
pub(crate) fn finite<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(v) if !v.is_finite() => Err(S::Error::custom(format!(
            "numeric filter must be finite, got {v}"
        ))),
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}

/// Flatten a serializable filter struct into ordered query pairs.
///
/// Null fields are dropped; scalars are rendered as strings.
pub(crate) fn to_query_pairs<Q: Serialize>(query: &Q) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(query).map_err(|e| Error::InvalidInput(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(Error::InvalidInput(
            "query parameters must serialize to an object".to_string(),
        ));
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let rendered = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(Error::InvalidInput(format!(
                    "query parameter `{key}` must be a scalar, got {other}"
                )))
            }
        };
        pairs.push((key, rendered));
    }
    Ok(pairs)
}
