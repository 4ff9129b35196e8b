//! Pagination query decoding and the paginated list envelope.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::Uri;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};

use crate::domain::{PageRequest, PaginationMetadata};

/// A loosely-typed query value: clients may send numbers or strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Whole number.
    Integer(i64),
    /// Floating point number; only integral values are usable.
    Float(f64),
    /// Anything else, parsed on demand.
    Text(String),
}

impl QueryValue {
    /// Interprets the value as an integer, if it is one.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Float(f) => integral_f64(*f),
            Self::Text(s) => parse_integral(s.trim()),
        }
    }
}

/// Integers first, then integral decimals (`"2.0"`, `"1e3"`). Out-of-range
/// values saturate at the `i64` bounds.
fn parse_integral(s: &str) -> Option<i64> {
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().and_then(integral_f64))
}

// `as` saturates at the i64 bounds for finite values.
#[allow(clippy::cast_possible_truncation)]
fn integral_f64(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0).then(|| f as i64)
}

/// Raw `page` / `pageSize` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-based). Defaults to 1.
    #[serde(default)]
    pub page: Option<QueryValue>,
    /// Items per page. Defaults to 10.
    #[serde(default, rename = "pageSize")]
    pub page_size: Option<QueryValue>,
}

impl PaginationQuery {
    /// Parses the raw fields into a validated [`PageRequest`].
    ///
    /// Missing or non-numeric fields take their defaults; values below 1
    /// are clamped to 1.
    #[must_use]
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::from_optional(
            self.page.as_ref().and_then(QueryValue::as_i64),
            self.page_size.as_ref().and_then(QueryValue::as_i64),
        )
    }
}

impl PageRequest {
    /// Reads the pagination parameters from a request URI.
    ///
    /// A query string that cannot be decoded at all yields the defaults.
    #[must_use]
    pub fn from_uri(uri: &Uri) -> Self {
        Query::<PaginationQuery>::try_from_uri(uri)
            .map(|Query(query)| query.to_page_request())
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for PageRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let page = Self::from_uri(&parts.uri);
        tracing::trace!(
            page = page.page(),
            page_size = page.page_size(),
            "pagination extracted"
        );
        Ok(page)
    }
}

/// One page of a list plus its pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: PaginationMetadata,
}

impl<T> Paginated<T> {
    /// Wraps items already limited to `request`'s page.
    #[must_use]
    pub fn new(data: Vec<T>, request: &PageRequest, count: u64) -> Self {
        Self {
            data,
            pagination: PaginationMetadata::new(request, count),
        }
    }

    /// Slices `items` (the whole collection) down to the requested page.
    #[must_use]
    pub fn from_items<I>(items: I, request: &PageRequest) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = items.into_iter();
        let count = iter.len() as u64;
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.limit()).unwrap_or(usize::MAX);
        let data = iter.skip(skip).take(take).collect();
        Self::new(data, request, count)
    }
}
