#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]
//! Factories for HTTP responses and readable streams.
//!
//! This crate turns common application outputs (HTML, plain text, JSON
//! payloads, redirects, empty replies) into fully formed HTTP responses, and
//! builds readable streams from strings, files, open handles and payloads.
//! Building the underlying bare messages is left to an injected primitive,
//! so applications get shaped responses on top of whatever message
//! implementation they already use.
//!
//! # Features
//!
//! - **Shaped responses** - HTML, text and JSON with the right
//!   `Content-Type`, `204 No Content`, and `301`/`302` redirects
//! - **Payload-aware JSON** - JSON responses and streams keep the payload they
//!   were built from
//! - **Injected primitives** - bare responses and raw streams come from a
//!   [`ResponsePrimitive`] and a [`StreamPrimitive`]
//! - **Immutable messages** - a [`Response`] is complete when it is returned
//!
//! # Optional Features
//!
//! - `fs` - file streams in [`BasicPrimitive`] via `async-fs`, with MIME
//!   detection via `mime_guess` (enabled by default)
//!
//! # Examples
//!
//! ## Shaped responses
//!
//! ```rust
//! use http_factory::{BasicPrimitive, ResponseBuilder, ResponseFactory, StatusCode};
//! use http_factory::header::CONTENT_TYPE;
//!
//! let responses = ResponseBuilder::new(BasicPrimitive::new());
//!
//! let page = responses.create_response_from_html("<h1>Welcome</h1>");
//! assert_eq!(page.status(), StatusCode::OK);
//! assert_eq!(page.header_line(CONTENT_TYPE).as_deref(), Some("text/html"));
//!
//! let moved = responses.create_response_redirect("/login", true, Default::default())?;
//! assert_eq!(moved.status(), StatusCode::MOVED_PERMANENTLY);
//! # Ok::<(), http_factory::Error>(())
//! ```
//!
//! ## JSON payloads
//!
//! ```rust
//! use http_factory::{BasicPrimitive, ResponseBuilder, ResponseFactory};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//!     email: String,
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let responses = ResponseBuilder::new(BasicPrimitive::new());
//! let user = User {
//!     name: "Alice".into(),
//!     email: "alice@example.com".into(),
//! };
//!
//! let response = responses.create_response_from_payload(&user)?;
//! assert_eq!(response.payload().unwrap()["name"], "Alice");
//! assert_eq!(
//!     response.into_string().await?.as_str(),
//!     r#"{"name":"Alice","email":"alice@example.com"}"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Streams
//!
//! ```rust,no_run
//! use http_factory::{HttpFactories, StreamFactory};
//! use std::path::Path;
//!
//! # async fn example() -> http_factory::Result<()> {
//! let factories: HttpFactories = HttpFactories::default();
//! let report = factories
//!     .streams()
//!     .create_stream_from_file(Path::new("report.csv"), "r")
//!     .await?;
//! println!("streaming {:?} bytes", report.len());
//! # Ok(())
//! # }
//! ```
mod body;
pub use body::Error as BodyError;
pub use body::{Body, BoxError, HttpBody};

pub mod error;
pub use error::{EncodingError, Error, InvalidUriError, PrimitiveError, Result};

pub mod payload;
pub use payload::Payload;

mod stream;
pub use stream::JsonStream;

mod response;
pub use response::{IntoLocation, ReasonPhrase, Response, ResponseKind, ResponseParts};

pub mod primitive;
#[doc(inline)]
pub use primitive::{
    BasicError, BasicPrimitive, FileMode, Resource, ResponsePrimitive, StreamPrimitive,
};

mod builder;
pub use builder::{ResponseBuilder, ResponseFactory, StreamBuilder, StreamFactory};

mod provider;
pub use provider::HttpFactories;

pub mod utils;

pub use http::{header, HeaderMap, HeaderValue, StatusCode, Uri, Version};
