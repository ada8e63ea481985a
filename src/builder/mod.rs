//! Response and stream factories.
//!
//! [`ResponseFactory`] and [`StreamFactory`] are the surfaces applications
//! program against. [`ResponseBuilder`] and [`StreamBuilder`] implement them
//! on top of an injected primitive:
//!
//! - the bare operations (`create_response`, `create_stream`, file and
//!   resource streams) are handed to the primitive unchanged, and its errors
//!   come back as [`Error::Primitive`](crate::Error::Primitive);
//! - the shaped operations (HTML, text, JSON, no-content, redirect) are built
//!   by this crate and do not touch the primitive at all.
//!
//! # Examples
//!
//! ```rust
//! use http_factory::{BasicPrimitive, ResponseBuilder, ResponseFactory};
//! use http::StatusCode;
//! use serde_json::json;
//!
//! let responses = ResponseBuilder::new(BasicPrimitive::new());
//!
//! let response = responses.create_response_from_payload(&json!({"key": "value"}))?;
//! assert_eq!(response.status(), StatusCode::OK);
//!
//! let response = responses.create_response(201, "Created")?;
//! assert_eq!(response.reason_phrase(), "Created");
//! # Ok::<(), http_factory::Error>(())
//! ```
mod response;
mod stream;

pub use response::ResponseBuilder;
pub use stream::StreamBuilder;

use core::future::Future;
use std::path::Path;

use http::HeaderMap;
use serde::Serialize;

use crate::{Body, IntoLocation, JsonStream, Response, Result};

/// Creates HTTP responses.
pub trait ResponseFactory {
    /// Creates a bare response through the primitive.
    ///
    /// Pass `200, ""` for the defaults. An empty reason phrase lets the
    /// primitive pick the canonical phrase of the status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Primitive`](crate::Error::Primitive) if the primitive
    /// rejects the status or phrase.
    fn create_response(&self, status: u16, reason: &str) -> Result<Response>;

    /// Creates a `200 OK` response with `Content-Type: text/html`.
    fn create_response_from_html(&self, html: impl Into<String>) -> Response;

    /// Creates a `200 OK` response with `Content-Type: text/plain`.
    fn create_response_from_text(&self, text: impl Into<String>) -> Response;

    /// Creates a `200 OK` JSON response that keeps its payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`](crate::Error::Encoding) if the payload has
    /// no JSON representation.
    fn create_response_from_payload<T>(&self, payload: &T) -> Result<Response>
    where
        T: Serialize + ?Sized;

    /// Creates a `204 No Content` response with exactly `headers`.
    fn create_response_no_content(&self, headers: HeaderMap) -> Response;

    /// Creates a `302 Found`, or `301 Moved Permanently` when `permanent` is
    /// set, pointing at `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUri`](crate::Error::InvalidUri) if `target` is
    /// not a valid URI reference.
    fn create_response_redirect(
        &self,
        target: impl IntoLocation,
        permanent: bool,
        headers: HeaderMap,
    ) -> Result<Response>;
}

/// Creates readable streams.
pub trait StreamFactory {
    /// The handle type accepted by
    /// [`create_stream_from_resource`](Self::create_stream_from_resource).
    type Resource;

    /// Creates a stream holding `content`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Primitive`](crate::Error::Primitive) if the primitive
    /// fails.
    fn create_stream(&self, content: &str) -> Result<Body>;

    /// Opens `path` with an fopen-style `mode` such as `"r"` and streams it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Primitive`](crate::Error::Primitive) if the file
    /// cannot be opened or the mode is invalid.
    fn create_stream_from_file(
        &self,
        path: &Path,
        mode: &str,
    ) -> impl Future<Output = Result<Body>> + Send;

    /// Wraps an open resource handle as a stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Primitive`](crate::Error::Primitive) if the primitive
    /// fails.
    fn create_stream_from_resource(&self, resource: Self::Resource) -> Result<Body>;

    /// Encodes `payload` as a JSON stream that keeps the payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`](crate::Error::Encoding) if the payload has
    /// no JSON representation.
    fn create_stream_from_payload<T>(&self, payload: &T) -> Result<JsonStream>
    where
        T: Serialize + ?Sized;
}
