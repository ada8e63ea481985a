use core::fmt;
use core::future::Future;
use core::pin::Pin;
use std::io;
use std::path::{Path, PathBuf};

use futures_lite::AsyncBufRead;
use http::StatusCode;

use super::mode::{FileMode, InvalidMode};
use super::{ResponsePrimitive, StreamPrimitive};
use crate::{Body, Response};

/// Errors raised by [`BasicPrimitive`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BasicError {
    /// The status code is outside `100..=599`.
    #[error("invalid status code {0}")]
    InvalidStatus(u16),
    /// The reason phrase holds characters that cannot appear in a status line.
    #[error("invalid reason phrase {0:?}")]
    InvalidReasonPhrase(String),
    /// The file mode is not an fopen-style mode.
    #[error(transparent)]
    InvalidMode(#[from] InvalidMode),
    /// The file could not be opened.
    #[error("cannot open `{}`: {source}", .path.display())]
    Io {
        /// The path that was being opened.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// File streams need the `fs` feature.
    #[error("file streams are disabled, enable the `fs` feature")]
    FileStreamsDisabled,
}

/// An open handle accepted by
/// [`BasicPrimitive::create_stream_from_resource`](StreamPrimitive::create_stream_from_resource).
pub struct Resource {
    reader: Pin<Box<dyn AsyncBufRead + Send + Sync + 'static>>,
    length: Option<usize>,
}

impl Resource {
    /// Wraps a buffered reader of unknown length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::{BasicPrimitive, Resource, StreamPrimitive};
    /// use futures_lite::io::{BufReader, Cursor};
    ///
    /// let resource = Resource::new(BufReader::new(Cursor::new(b"abc".to_vec()))).with_length(3);
    /// let body = BasicPrimitive::new().create_stream_from_resource(resource)?;
    /// assert_eq!(body.len(), Some(3));
    /// # Ok::<(), http_factory::BasicError>(())
    /// ```
    pub fn new(reader: impl AsyncBufRead + Send + Sync + 'static) -> Self {
        Self {
            reader: Box::pin(reader),
            length: None,
        }
    }

    /// Sets the length hint reported by the resulting body.
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

/// The primitive shipped with this crate.
///
/// Responses start with an empty body. Streams are in-memory for strings,
/// file-backed for paths (with the `fs` feature), and reader-backed for
/// [`Resource`] handles.
///
/// # Examples
///
/// ```rust
/// use http_factory::{BasicPrimitive, ResponsePrimitive};
///
/// let primitive = BasicPrimitive::new();
/// let response = primitive.create_response(201, "Created")?;
/// assert_eq!(response.status(), 201);
/// assert!(primitive.create_response(600, "").is_err());
/// # Ok::<(), http_factory::BasicError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPrimitive {
    _priv: (),
}

impl BasicPrimitive {
    /// Creates a new primitive.
    pub const fn new() -> Self {
        Self { _priv: () }
    }
}

// HTAB, SP, VCHAR and obs-text.
fn is_reason_byte(byte: u8) -> bool {
    matches!(byte, b'\t' | b' ' | 0x21..=0x7e | 0x80..=0xff)
}

impl ResponsePrimitive for BasicPrimitive {
    type Error = BasicError;

    fn create_response(&self, status: u16, reason: &str) -> Result<Response, BasicError> {
        if !(100..=599).contains(&status) {
            return Err(BasicError::InvalidStatus(status));
        }
        let status =
            StatusCode::from_u16(status).map_err(|_| BasicError::InvalidStatus(status))?;

        if !reason.bytes().all(is_reason_byte) {
            return Err(BasicError::InvalidReasonPhrase(reason.to_owned()));
        }

        Ok(Response::with_reason(status, reason, Body::empty()))
    }
}

impl StreamPrimitive for BasicPrimitive {
    type Error = BasicError;
    type Resource = Resource;

    fn create_stream(&self, content: &str) -> Result<Body, BasicError> {
        Ok(Body::from_bytes(content.to_owned()))
    }

    fn create_stream_from_file(
        &self,
        path: &Path,
        mode: &str,
    ) -> impl Future<Output = Result<Body, BasicError>> + Send {
        async move {
            let mode: FileMode = mode.parse()?;
            open_file(path, mode).await
        }
    }

    fn create_stream_from_resource(&self, resource: Resource) -> Result<Body, BasicError> {
        Ok(Body::from_reader(resource.reader, resource.length))
    }
}

#[cfg(feature = "fs")]
async fn open_file(path: &Path, mode: FileMode) -> Result<Body, BasicError> {
    tracing::debug!(path = %path.display(), %mode, "opening file stream");

    let io_error = |source| BasicError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = async_fs::OpenOptions::new()
        .read(mode.read())
        .write(mode.write())
        .append(mode.append())
        .truncate(mode.truncate())
        .create(mode.create())
        .create_new(mode.create_new())
        .open(path)
        .await
        .map_err(io_error)?;
    let length = file.metadata().await.map_err(io_error)?.len();

    let body = Body::from_reader(
        futures_lite::io::BufReader::new(file),
        usize::try_from(length).ok(),
    );
    Ok(match mime_guess::from_path(path).first() {
        Some(mime) => body.with_mime(mime),
        None => body,
    })
}

#[cfg(not(feature = "fs"))]
async fn open_file(path: &Path, mode: FileMode) -> Result<Body, BasicError> {
    tracing::debug!(path = %path.display(), %mode, "file streams are disabled");
    Err(BasicError::FileStreamsDisabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_lite::io::{BufReader, Cursor};

    #[test]
    fn status_range_is_enforced() {
        let primitive = BasicPrimitive::new();
        for status in [0, 42, 99, 600, 1000] {
            assert!(matches!(
                primitive.create_response(status, ""),
                Err(BasicError::InvalidStatus(code)) if code == status
            ));
        }
        for status in [100, 200, 404, 599] {
            let response = primitive.create_response(status, "").unwrap();
            assert_eq!(response.status().as_u16(), status);
        }
    }

    #[tokio::test]
    async fn responses_start_empty() {
        let response = BasicPrimitive::new().create_response(201, "Created").unwrap();
        assert_eq!(response.reason_phrase(), "Created");
        assert!(response.headers().is_empty());
        assert!(response.into_bytes().await.unwrap().is_empty());
    }

    #[test]
    fn reason_phrase_is_checked() {
        let primitive = BasicPrimitive::new();
        let response = primitive.create_response(200, "Fine\tand dandy, caf\u{e9}").unwrap();
        assert_eq!(response.reason_phrase(), "Fine\tand dandy, caf\u{e9}");

        for reason in ["split\r\nheader", "nul\0", "bell\x07"] {
            assert!(matches!(
                primitive.create_response(200, reason),
                Err(BasicError::InvalidReasonPhrase(phrase)) if phrase == reason
            ));
        }
    }

    #[tokio::test]
    async fn string_streams_hold_content() {
        let body = BasicPrimitive::new().create_stream("stream content").unwrap();
        assert_eq!(body.len(), Some(14));
        assert_eq!(body.into_string().await.unwrap().as_str(), "stream content");
    }

    #[tokio::test]
    async fn resources_become_reader_bodies() {
        let reader = BufReader::new(Cursor::new(b"from a handle".to_vec()));
        let body = BasicPrimitive::new()
            .create_stream_from_resource(Resource::new(reader))
            .unwrap();
        assert_eq!(body.len(), None);
        assert_eq!(body.into_string().await.unwrap().as_str(), "from a handle");
    }

    #[tokio::test]
    async fn invalid_mode_is_rejected_before_opening() {
        let error = BasicPrimitive::new()
            .create_stream_from_file(Path::new("never-opened.txt"), "z")
            .await
            .unwrap_err();
        assert!(matches!(error, BasicError::InvalidMode(mode) if mode.mode() == "z"));
    }

    #[cfg(feature = "fs")]
    #[tokio::test]
    async fn file_streams_read_the_file() {
        let path = std::env::temp_dir().join("http_factory_basic_stream.html");
        std::fs::write(&path, "<p>from disk</p>").unwrap();

        let body = BasicPrimitive::new()
            .create_stream_from_file(&path, "rb")
            .await
            .unwrap();
        assert_eq!(body.len(), Some(16));
        assert_eq!(body.mime(), Some(&mime::TEXT_HTML));
        assert_eq!(body.into_string().await.unwrap().as_str(), "<p>from disk</p>");

        std::fs::remove_file(&path).unwrap();
    }

    #[cfg(feature = "fs")]
    #[tokio::test]
    async fn file_errors_carry_the_path() {
        let path = std::env::temp_dir().join("http_factory_missing_file.txt");
        let _ = std::fs::remove_file(&path);

        let error = BasicPrimitive::new()
            .create_stream_from_file(&path, "r")
            .await
            .unwrap_err();
        match error {
            BasicError::Io { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(feature = "fs")]
    #[tokio::test]
    async fn exclusive_mode_refuses_existing_files() {
        let path = std::env::temp_dir().join("http_factory_exclusive.txt");
        std::fs::write(&path, "taken").unwrap();

        let error = BasicPrimitive::new()
            .create_stream_from_file(&path, "x")
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            BasicError::Io { ref source, .. } if source.kind() == io::ErrorKind::AlreadyExists
        ));

        std::fs::remove_file(&path).unwrap();
    }

    #[cfg(not(feature = "fs"))]
    #[tokio::test]
    async fn file_streams_need_the_fs_feature() {
        let error = BasicPrimitive::new()
            .create_stream_from_file(Path::new("any.txt"), "r")
            .await
            .unwrap_err();
        assert!(matches!(error, BasicError::FileStreamsDisabled));
    }
}
