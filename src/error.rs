//! Error types for the response and stream factories.
//!
//! Every fallible factory operation returns [`Result`], whose error is one of
//! three kinds:
//!
//! - [`EncodingError`] - the payload has no JSON representation
//! - [`InvalidUriError`] - a redirect target is not a valid URI reference
//! - [`PrimitiveError`] - the injected primitive failed; the original error is
//!   kept intact and can be recovered with [`PrimitiveError::downcast`]
//!
//! Failures are raised while the message is being built, never later when the
//! body is read, and the factories never substitute a fallback response.
//!
//! # Examples
//!
//! ```rust
//! use http_factory::{BasicPrimitive, Error, ResponseBuilder, ResponseFactory};
//! use http::HeaderMap;
//!
//! let responses = ResponseBuilder::new(BasicPrimitive::new());
//!
//! match responses.create_response_redirect("http://[::1", false, HeaderMap::new()) {
//!     Err(Error::InvalidUri(e)) => assert_eq!(e.target(), "http://[::1"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
use core::fmt;
use thiserror::Error;

use crate::BoxError;

/// A specialized Result type for factory operations.
pub type Result<T> = core::result::Result<T, Error>;

/// The error type of every fallible factory operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A payload could not be represented as JSON.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    /// A redirect target was not a valid URI reference.
    #[error(transparent)]
    InvalidUri(#[from] InvalidUriError),
    /// The injected response or stream primitive failed.
    #[error(transparent)]
    Primitive(#[from] PrimitiveError),
}

impl Error {
    /// Wraps an error raised by a primitive.
    pub fn primitive<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::Primitive(PrimitiveError::new(error))
    }
}

/// A payload has no JSON representation.
///
/// Typical causes are maps whose keys are not strings and values whose
/// `Serialize` implementation refuses to serialize, such as open handles.
#[derive(Debug, Error)]
#[error("payload cannot be encoded as JSON: {source}")]
pub struct EncodingError {
    #[from]
    source: serde_json::Error,
}

impl EncodingError {
    /// Returns the underlying serializer error.
    pub fn serde_error(&self) -> &serde_json::Error {
        &self.source
    }
}

/// A redirect target is not a valid URI reference.
#[derive(Debug, Error)]
#[error("invalid redirect target `{target}`: {source}")]
pub struct InvalidUriError {
    target: String,
    #[source]
    source: BoxError,
}

impl InvalidUriError {
    pub(crate) fn new(target: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            target: target.into(),
            source: source.into(),
        }
    }

    /// Returns the rejected target, as given by the caller.
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// An error raised by an injected primitive.
///
/// The factories do not interpret primitive failures. The original error is
/// stored as-is; `Display` and `source` forward to it, and the concrete type
/// can be recovered with [`downcast`](Self::downcast) or
/// [`downcast_ref`](Self::downcast_ref).
///
/// # Examples
///
/// ```rust
/// use http_factory::{BasicError, BasicPrimitive, Error, ResponseBuilder, ResponseFactory};
///
/// let responses = ResponseBuilder::new(BasicPrimitive::new());
/// let Err(Error::Primitive(error)) = responses.create_response(42, "") else {
///     panic!("status 42 must be rejected");
/// };
/// assert!(matches!(
///     error.downcast_ref::<BasicError>(),
///     Some(BasicError::InvalidStatus(42))
/// ));
/// ```
pub struct PrimitiveError {
    error: Box<dyn core::error::Error + Send + Sync + 'static>,
}

impl PrimitiveError {
    /// Wraps an error raised by a primitive.
    pub fn new<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self {
            error: Box::new(error),
        }
    }

    /// Attempts to downcast the inner error to a concrete type.
    ///
    /// Returns `Ok(Box<E>)` if the downcast succeeds, or `Err(Self)` unchanged
    /// if it fails.
    pub fn downcast<E>(self) -> core::result::Result<Box<E>, Self>
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        self.error.downcast::<E>().map_err(|error| Self { error })
    }

    /// Attempts to downcast the inner error to a reference of the concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        self.error.downcast_ref()
    }

    /// Consumes this error and returns the primitive's error.
    pub fn into_inner(self) -> Box<dyn core::error::Error + Send + Sync + 'static> {
        self.error
    }
}

impl fmt::Debug for PrimitiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.error, f)
    }
}

impl fmt::Display for PrimitiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl core::error::Error for PrimitiveError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.error.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn primitive_error_is_transparent() {
        let error = Error::primitive(io::Error::new(io::ErrorKind::NotFound, "missing.txt"));
        assert_eq!(error.to_string(), "missing.txt");

        let Error::Primitive(inner) = error else {
            panic!("expected a primitive error");
        };
        assert_eq!(
            inner.downcast_ref::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );

        let inner = inner.downcast::<fmt::Error>().unwrap_err();
        let io_error = inner.downcast::<io::Error>().unwrap();
        assert_eq!(io_error.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn encoding_error_keeps_serde_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::from(EncodingError::from(source));
        assert!(error.to_string().starts_with("payload cannot be encoded as JSON"));
        let Error::Encoding(encoding) = error else {
            panic!("expected an encoding error");
        };
        assert!(encoding.serde_error().is_eof());
    }

    #[test]
    fn invalid_uri_error_reports_target() {
        let source = "http://[::1".parse::<http::Uri>().unwrap_err();
        let error = InvalidUriError::new("http://[::1", source);
        assert_eq!(error.target(), "http://[::1");
        assert!(error.to_string().contains("`http://[::1`"));
        assert!(core::error::Error::source(&error).is_some());
    }
}
