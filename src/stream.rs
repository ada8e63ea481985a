//! JSON payload streams.
//!
//! [`JsonStream`] is the stream returned by
//! [`StreamFactory::create_stream_from_payload`](crate::StreamFactory::create_stream_from_payload).
//! It holds the canonical JSON encoding of a payload together with the payload
//! itself, so the structured value can be inspected without decoding the
//! stream again.
//!
//! # Examples
//!
//! ```rust
//! use http_factory::JsonStream;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let stream = JsonStream::new(&json!({"key": "value"}))?;
//! assert_eq!(stream.payload()["key"], "value");
//!
//! let text = stream.to_body().into_string().await?;
//! assert_eq!(text.as_str(), r#"{"key":"value"}"#);
//! # Ok(())
//! # }
//! ```
use bytes::Bytes;
use serde::Serialize;

use crate::payload::{self, Payload};
use crate::{Body, EncodingError};

/// A readable stream of JSON text that keeps its source payload.
///
/// The encoded bytes are fixed at construction. [`to_body`](Self::to_body)
/// hands out a fresh reader positioned at the start every time it is called.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonStream {
    payload: Payload,
    contents: Bytes,
}

impl JsonStream {
    /// Serializes `payload` and wraps it as a stream.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if the payload has no JSON representation.
    pub fn new<T>(payload: &T) -> Result<Self, EncodingError>
    where
        T: Serialize + ?Sized,
    {
        Self::from_payload(payload::to_payload(payload)?)
    }

    /// Wraps an already-built [`Payload`].
    pub fn from_payload(payload: Payload) -> Result<Self, EncodingError> {
        let contents = payload::encode(&payload)?;
        Ok(Self { payload, contents })
    }

    /// Returns the payload this stream was built from.
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns the encoded JSON bytes.
    pub const fn contents(&self) -> &Bytes {
        &self.contents
    }

    /// Returns the number of encoded bytes.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Returns `true` if the encoding is empty. A valid payload never is.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Returns a body that reads the encoded bytes from the start.
    pub fn to_body(&self) -> Body {
        Body::from_bytes(self.contents.clone()).with_mime(mime::APPLICATION_JSON)
    }

    /// Splits the stream into its payload and a body over the encoded bytes.
    pub fn into_parts(self) -> (Payload, Body) {
        let body = Body::from_bytes(self.contents).with_mime(mime::APPLICATION_JSON);
        (self.payload, body)
    }

    /// Consumes the stream and returns its payload.
    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

impl From<JsonStream> for Body {
    fn from(stream: JsonStream) -> Self {
        stream.into_parts().1
    }
}
