//! Re-exports used alongside the factories.
//!
//! These save callers from depending on `bytes`, `bytestr`, `futures-lite`
//! and `serde_json` directly just to read a body or build a payload.
//!
//! # Examples
//!
//! ```rust
//! use http_factory::utils::{json, AsyncReadExt, BufReader, Cursor};
//! use http_factory::{BasicPrimitive, Resource, StreamBuilder, StreamFactory};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let streams = StreamBuilder::new(BasicPrimitive::new());
//!
//! let stream = streams.create_stream_from_payload(&json!({"id": 7}))?;
//! assert_eq!(stream.payload()["id"], 7);
//!
//! let resource = Resource::new(BufReader::new(Cursor::new(b"raw".to_vec())));
//! let mut text = String::new();
//! streams
//!     .create_stream_from_resource(resource)?
//!     .into_reader()
//!     .read_to_string(&mut text)
//!     .await?;
//! assert_eq!(text, "raw");
//! # Ok(())
//! # }
//! ```

/// Reference-counted byte buffer returned by
/// [`Body::into_bytes`](crate::Body::into_bytes).
///
/// ```rust
/// use http_factory::utils::Bytes;
///
/// let data = Bytes::from("HTTP body content");
/// assert_eq!(data.slice(0..4), "HTTP");
/// ```
pub use bytes::Bytes;

/// UTF-8 validated bytes returned by
/// [`Body::into_string`](crate::Body::into_string).
pub use bytestr::ByteStr;

/// Async reader traits and adapters for stream bodies and resources.
pub use futures_lite::io::{AsyncBufRead, AsyncRead, AsyncReadExt, BufReader, Cursor};

/// Builds a [`Payload`](crate::Payload) inline.
pub use serde_json::json;
