//! HTTP response values.
//!
//! This module provides the [`Response`] type produced by every
//! [`ResponseFactory`](crate::ResponseFactory) operation. A response carries:
//!
//! - **Status line** - status code and reason phrase
//! - **Headers** - case-insensitive, multi-valued, in insertion order
//! - **Body** - written once at construction
//! - **Kind** - which constructor shaped it, see [`ResponseKind`]
//! - **Payload** - for JSON responses, the structured value behind the body
//!
//! Responses are immutable. Accessors borrow, and the only way to get at the
//! body bytes is to consume the response.
//!
//! # Examples
//!
//! ```rust
//! use http_factory::{Response, ResponseKind};
//! use http::{header, StatusCode};
//!
//! # async fn example() -> Result<(), http_factory::BodyError> {
//! let response = Response::html("<h1>Title</h1>");
//! assert_eq!(response.status(), StatusCode::OK);
//! assert_eq!(response.kind(), ResponseKind::Html);
//! assert_eq!(response.header_line(header::CONTENT_TYPE).as_deref(), Some("text/html"));
//! assert_eq!(response.into_string().await?.as_str(), "<h1>Title</h1>");
//! # Ok(())
//! # }
//! ```
mod location;
mod variants;

pub use location::IntoLocation;

use crate::payload::Payload;
use crate::{Body, BodyError};
use bytes::Bytes;
use bytestr::ByteStr;
use http::header::{AsHeaderName, HeaderName, CONTENT_TYPE};
use http::{Extensions, HeaderMap, HeaderValue, StatusCode, Version};

/// Head of a response: status, version, headers and extensions.
pub type ResponseParts = http::response::Parts;

/// The constructor that shaped a [`Response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// Built by a primitive or from raw parts, with no fixed shape.
    Plain,
    /// `text/html` body.
    Html,
    /// `text/plain` body.
    Text,
    /// `application/json` body with its payload attached.
    Json,
    /// `301` or `302` with a `Location` header.
    Redirect,
    /// `204` without a body.
    Empty,
}

/// A custom reason phrase, stored as an extension when a [`Response`] is
/// converted into an [`http::Response`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonPhrase(String);

impl ReasonPhrase {
    /// Returns the phrase.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An immutable HTTP response.
///
/// Shaped responses come from the constructors [`Response::html`],
/// [`Response::text`], [`Response::json`], [`Response::redirect`] and
/// [`Response::no_content`]. Plain responses come from [`Response::new`],
/// [`Response::with_reason`], or a converted [`http::Response`].
#[derive(Debug)]
pub struct Response {
    parts: ResponseParts,
    reason: Option<String>,
    kind: ResponseKind,
    payload: Option<Payload>,
    body: Body,
}

impl From<http::Response<Body>> for Response {
    fn from(response: http::Response<Body>) -> Self {
        let (mut parts, body) = response.into_parts();
        let reason = parts
            .extensions
            .remove::<ReasonPhrase>()
            .map(|phrase| phrase.0);
        Self {
            parts,
            reason,
            kind: ResponseKind::Plain,
            payload: None,
            body,
        }
    }
}

impl From<Response> for http::Response<Body> {
    fn from(response: Response) -> Self {
        let mut parts = response.parts;
        if let Some(reason) = response.reason {
            parts.extensions.insert(ReasonPhrase(reason));
        }
        Self::from_parts(parts, response.body)
    }
}

impl Response {
    /// Creates a plain response with the given status and body.
    ///
    /// The status is not range-checked. [`StatusCode`] admits codes up to 999,
    /// while a response built by [`BasicPrimitive`](crate::BasicPrimitive) is
    /// always within `100..=599`. Callers using this constructor directly keep
    /// to that range themselves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Response;
    /// use http::StatusCode;
    ///
    /// let response = Response::new(StatusCode::ACCEPTED, "queued");
    /// assert_eq!(response.status(), StatusCode::ACCEPTED);
    /// assert_eq!(response.reason_phrase(), "Accepted");
    /// ```
    pub fn new(status: StatusCode, body: impl Into<Body>) -> Self {
        Self::shaped(status, HeaderMap::new(), body.into(), ResponseKind::Plain, None)
    }

    /// Creates a plain response with a custom reason phrase.
    ///
    /// An empty phrase means the canonical phrase of the status. The phrase is
    /// stored as given. Like [`Response::new`], neither the phrase nor the
    /// status range is checked here.
    pub fn with_reason(status: StatusCode, reason: impl Into<String>, body: impl Into<Body>) -> Self {
        let reason = reason.into();
        Self {
            reason: (!reason.is_empty()).then_some(reason),
            ..Self::new(status, body)
        }
    }

    pub(crate) fn shaped(
        status: StatusCode,
        headers: HeaderMap,
        body: Body,
        kind: ResponseKind,
        payload: Option<Payload>,
    ) -> Self {
        let mut response = http::Response::new(body);
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        let (parts, body) = response.into_parts();
        Self {
            parts,
            reason: None,
            kind,
            payload,
            body,
        }
    }

    /// Returns the HTTP status code.
    pub const fn status(&self) -> StatusCode {
        self.parts.status
    }

    /// Returns the reason phrase.
    ///
    /// Falls back to the canonical phrase of the status, or `""` for codes
    /// without one.
    pub fn reason_phrase(&self) -> &str {
        match &self.reason {
            Some(reason) => reason,
            None => self.status().canonical_reason().unwrap_or_default(),
        }
    }

    /// Returns the HTTP version.
    pub const fn version(&self) -> Version {
        self.parts.version
    }

    /// Returns the headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    /// Returns the first value of a header.
    pub fn get_header<K: AsHeaderName>(&self, name: K) -> Option<&HeaderValue> {
        self.headers().get(name)
    }

    /// Returns every value of a header joined with `", "`.
    ///
    /// Returns `None` if the header is absent or a value is not visible ASCII.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Response;
    /// use http::{HeaderMap, HeaderValue};
    ///
    /// let mut headers = HeaderMap::new();
    /// headers.append("x-tag", HeaderValue::from_static("a"));
    /// headers.append("x-tag", HeaderValue::from_static("b"));
    ///
    /// let response = Response::no_content(headers);
    /// assert_eq!(response.header_line("X-Tag").as_deref(), Some("a, b"));
    /// ```
    pub fn header_line<K: AsHeaderName>(&self, name: K) -> Option<String> {
        let mut values = self.headers().get_all(name).iter().peekable();
        values.peek()?;
        let values = values
            .map(HeaderValue::to_str)
            .collect::<Result<Vec<_>, _>>()
            .ok()?;
        Some(values.join(", "))
    }

    /// Returns `true` if the header is present.
    pub fn has_header<K: AsHeaderName>(&self, name: K) -> bool {
        self.headers().contains_key(name)
    }

    /// Returns the header names in insertion order.
    pub fn header_names(&self) -> impl Iterator<Item = &HeaderName> {
        self.headers().keys()
    }

    /// Returns the extensions.
    pub const fn extensions(&self) -> &Extensions {
        &self.parts.extensions
    }

    /// Returns an extension of type `T`, if present.
    pub fn get_extension<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.extensions().get()
    }

    /// Returns the constructor that shaped this response.
    pub const fn kind(&self) -> ResponseKind {
        self.kind
    }

    /// Returns the payload of a JSON response.
    pub const fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Returns the body.
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Parses the `Content-Type` header.
    pub fn mime(&self) -> Option<mime::Mime> {
        self.get_header(CONTENT_TYPE)?.to_str().ok()?.parse().ok()
    }

    /// Consumes the response and returns its body.
    pub fn into_body(self) -> Body {
        self.body
    }

    /// Consumes the response and returns its head and body.
    pub fn into_parts(self) -> (ResponseParts, Body) {
        (self.parts, self.body)
    }

    /// Consumes the response and reads the whole body.
    pub async fn into_bytes(self) -> Result<Bytes, BodyError> {
        self.body.into_bytes().await
    }

    /// Consumes the response and reads the body as UTF-8.
    pub async fn into_string(self) -> Result<ByteStr, BodyError> {
        self.body.into_string().await
    }

    /// Consumes the response and decodes the body as JSON.
    ///
    /// This does not check the `Content-Type` header.
    pub async fn into_json<T>(self) -> Result<T, BodyError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.body.into_json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_response_defaults() {
        let response = Response::new(StatusCode::OK, Body::empty());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.reason_phrase(), "OK");
        assert_eq!(response.version(), Version::HTTP_11);
        assert_eq!(response.kind(), ResponseKind::Plain);
        assert!(response.headers().is_empty());
        assert!(response.payload().is_none());
    }

    #[test]
    fn reason_phrase_override() {
        let response = Response::with_reason(StatusCode::CREATED, "Made It", Body::empty());
        assert_eq!(response.reason_phrase(), "Made It");

        let response = Response::with_reason(StatusCode::CREATED, "", Body::empty());
        assert_eq!(response.reason_phrase(), "Created");

        let unknown = StatusCode::from_u16(599).unwrap();
        assert_eq!(Response::new(unknown, Body::empty()).reason_phrase(), "");
    }

    #[test]
    fn reason_phrase_survives_http_conversion() {
        let response = Response::with_reason(StatusCode::IM_A_TEAPOT, "Short And Stout", "tea");
        let converted: http::Response<Body> = response.into();
        assert_eq!(
            converted.extensions().get::<ReasonPhrase>().map(ReasonPhrase::as_str),
            Some("Short And Stout")
        );

        let back = Response::from(converted);
        assert_eq!(back.reason_phrase(), "Short And Stout");
        assert!(back.get_extension::<ReasonPhrase>().is_none());
    }

    #[test]
    fn header_line_joins_values() {
        let mut headers = HeaderMap::new();
        headers.append("x-list", HeaderValue::from_static("one"));
        headers.append("x-list", HeaderValue::from_static("two"));
        headers.insert("x-single", HeaderValue::from_static("only"));

        let response = Response::no_content(headers);
        assert_eq!(response.header_line("x-list").as_deref(), Some("one, two"));
        assert_eq!(response.header_line("X-SINGLE").as_deref(), Some("only"));
        assert_eq!(response.header_line("x-missing"), None);
        assert!(response.has_header("X-List"));
    }

    #[test]
    fn header_names_keep_insertion_order() {
        let mut headers = HeaderMap::new();
        headers.insert("x-first", HeaderValue::from_static("1"));
        headers.insert("x-second", HeaderValue::from_static("2"));
        headers.insert("x-third", HeaderValue::from_static("3"));

        let response = Response::no_content(headers);
        let names: Vec<_> = response.header_names().map(HeaderName::as_str).collect();
        assert_eq!(names, ["x-first", "x-second", "x-third"]);
    }

    #[test]
    fn mime_is_parsed_from_content_type() {
        assert_eq!(Response::text("hi").mime(), Some(mime::TEXT_PLAIN));
        assert_eq!(Response::new(StatusCode::OK, "raw").mime(), None);
    }
}
