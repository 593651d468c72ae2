//! Query-string extraction for HTTP-triggered functions.
//!
//! The free functions [`queries`] and [`query`] accept an optional request so
//! callers bridging from nullable host bindings get an explicit
//! [`ServerError::ArgumentNull`]. Code already holding a reference should use
//! [`HttpRequestDataExt`] instead.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{Request, Uri};
use lambda_http::tracing;
use serde::{Serialize, Serializer};

use crate::error::ServerError;

/// A request that exposes the URI it was made against.
pub trait HttpRequestData {
    fn url(&self) -> &Uri;
}

impl<B> HttpRequestData for Request<B> {
    fn url(&self) -> &Uri {
        self.uri()
    }
}

impl HttpRequestData for Parts {
    fn url(&self) -> &Uri {
        &self.uri
    }
}

impl HttpRequestData for Uri {
    fn url(&self) -> &Uri {
        self
    }
}

/// Query parameters parsed from a single URI.
///
/// Lookups are case-sensitive. When a key repeats, [`get`](Self::get)
/// returns the last value and [`get_all`](Self::get_all) returns every value
/// in the order it appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    values: HashMap<String, Vec<String>>,
}

impl QueryParameters {
    /// Parses a raw query component (without the leading `?`).
    ///
    /// Keys and values are percent-decoded with `+` read as a space. Invalid
    /// escapes are kept as-is and invalid UTF-8 is replaced, so parsing never
    /// fails. Pairs whose decoded key is blank are dropped, which makes a
    /// whitespace-only query such as `+` or `%20` parse to an empty mapping.
    pub fn parse(query: &str) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()).into_owned() {
            if key.trim().is_empty() {
                continue;
            }
            values.entry(key).or_default().push(value);
        }

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates over each key with its effective (last) value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter_map(|(key, values)| Some((key.as_str(), values.last()?.as_str())))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<&Uri> for QueryParameters {
    fn from(uri: &Uri) -> Self {
        uri.query().map(Self::parse).unwrap_or_default()
    }
}

impl Serialize for QueryParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Method-call access to query parameters on any [`HttpRequestData`].
///
/// `Uri` has an inherent `query()` that shadows [`query`](Self::query) in
/// method position. Call it as `HttpRequestDataExt::query(&uri, key)` or use
/// the free function [`query`](crate::query::query).
pub trait HttpRequestDataExt: HttpRequestData {
    fn queries(&self) -> QueryParameters {
        QueryParameters::from(self.url())
    }

    fn query(&self, key: &str) -> Option<String> {
        self.queries().get(key).map(str::to_string)
    }
}

impl<T: HttpRequestData + ?Sized> HttpRequestDataExt for T {}

/// Returns every query parameter of `req`.
///
/// Fails only when `req` is absent; a missing or empty query yields an empty
/// mapping.
pub fn queries<R>(req: Option<&R>) -> Result<QueryParameters, ServerError>
where
    R: HttpRequestData + ?Sized,
{
    let req = req.ok_or_else(|| ServerError::argument_null("req"))?;
    Ok(req.queries())
}

/// Returns the value of `key` in the query of `req`, or `None` when the key,
/// or the whole query, is absent.
///
/// An absent `key` is not an error and yields `None`.
pub fn query<R>(req: Option<&R>, key: Option<&str>) -> Result<Option<String>, ServerError>
where
    R: HttpRequestData + ?Sized,
{
    let params = queries(req)?;
    Ok(key.and_then(|key| params.get(key)).map(str::to_string))
}

/// Extractor handing the parsed query of the current request to a handler.
#[derive(Debug, Clone, Default)]
pub struct RequestQuery(pub QueryParameters);

impl<S> FromRequestParts<S> for RequestQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = parts.queries();
        tracing::debug!(
            path = parts.uri.path(),
            count = params.len(),
            "extracted query parameters"
        );
        Ok(RequestQuery(params))
    }
}
