use core::str::Utf8Error;

/// A type-erased error coming from a body source.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Error type for body operations.
///
/// Reading a body can fail because of the underlying source (I/O), because
/// its bytes are not what the caller asked for (UTF-8, JSON), or because a
/// custom stream produced its own error.
///
/// # Examples
///
/// ```rust
/// use http_factory::{Body, BodyError};
///
/// # async fn example() {
/// match Body::from_bytes("{oops").into_json::<serde_json::Value>().await {
///     Err(BodyError::Json(e)) => println!("JSON error: {}", e),
///     Err(e) => println!("Other error: {}", e),
///     Ok(value) => println!("Parsed: {}", value),
/// }
/// # }
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred while reading from a file or reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The body bytes were not valid UTF-8.
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
    /// The body could not be decoded as JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// An error produced by a custom body or stream source.
    #[error("{0}")]
    Other(BoxError),
}

impl From<BoxError> for Error {
    fn from(error: BoxError) -> Self {
        Self::Other(error)
    }
}

impl From<core::convert::Infallible> for Error {
    fn from(error: core::convert::Infallible) -> Self {
        match error {}
    }
}
