//! HTTP message body handling.
//!
//! This module provides the [`Body`] type used both as the body of every
//! [`Response`](crate::Response) and as the stream value handed out by the
//! stream builders.
//!
//! # Body Representation
//!
//! The body can hold data in different forms:
//!
//! - **Bytes**: For in-memory bodies such as HTML, text, or encoded JSON
//! - **AsyncReader**: For streaming from files or other async sources
//! - **HttpBody**: For any `http_body::Body` implementation
//!
//! A body is write-once: there is no method that replaces or edits its
//! content. Reading consumes it, either through [`Body::into_bytes`] and
//! friends or by polling it as a [`Stream`].
//!
//! # Examples
//!
//! ```rust
//! use http_factory::Body;
//!
//! # async fn example() -> Result<(), http_factory::BodyError> {
//! let body = Body::from_html("<h1>Title</h1>");
//! assert_eq!(body.mime().map(|m| m.as_ref()), Some("text/html"));
//! assert_eq!(body.into_string().await?.as_str(), "<h1>Title</h1>");
//! # Ok(())
//! # }
//! ```
mod convert;
mod error_type;
mod utils;

pub use error_type::{BoxError, Error};

use self::utils::IntoAsyncRead;
use bytes::Bytes;
use bytestr::ByteStr;
use core::fmt::Debug;
use core::mem::take;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures_lite::{ready, AsyncBufRead, AsyncBufReadExt, Stream, StreamExt};
use http_body::Frame;
use http_body_util::{BodyExt, StreamBody};
use mime::Mime;

// A boxed bufreader object.
type BoxBufReader = Pin<Box<dyn AsyncBufRead + Send + Sync + 'static>>;

type BoxHttpBody =
    Pin<Box<dyn http_body::Body<Data = Bytes, Error = Error> + Send + Sync + 'static>>;

pub use http_body::Body as HttpBody;

/// Byte-producing HTTP body.
///
/// `Body` is the content of a [`Response`](crate::Response) and the value
/// returned by the pass-through stream operations of a
/// [`StreamFactory`](crate::StreamFactory). It can be read from the start
/// exactly once, either as a whole or chunk by chunk.
///
/// # Examples
///
/// ```rust
/// use http_factory::Body;
///
/// let body = Body::from_text("Plain Text");
/// assert_eq!(body.len(), Some(10));
///
/// let empty = Body::empty();
/// assert_eq!(empty.is_empty(), Some(true));
/// ```
pub struct Body {
    mime: Option<Mime>,
    inner: BodyInner,
}

impl Debug for Body {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Body")
            .field("mime", &self.mime)
            .field("len", &self.len())
            .finish()
    }
}

enum BodyInner {
    Once(Bytes),
    Reader {
        reader: BoxBufReader,
        length: Option<usize>,
    },
    HttpBody(BoxHttpBody),
}

impl Default for BodyInner {
    fn default() -> Self {
        Self::Once(Bytes::new())
    }
}

impl Body {
    /// Creates a new empty body.
    ///
    /// An empty body carries no MIME type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Body;
    ///
    /// let body = Body::empty();
    /// assert_eq!(body.len(), Some(0));
    /// assert!(body.mime().is_none());
    /// ```
    pub const fn empty() -> Self {
        Self {
            mime: None,
            inner: BodyInner::Once(Bytes::new()),
        }
    }

    /// Creates a new body from any type implementing `http_body::Body`.
    ///
    /// The body data will be converted to `Bytes` and errors into [`Error`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Body;
    /// use http_body_util::Full;
    /// use bytes::Bytes;
    ///
    /// let http_body = Full::new(Bytes::from("Hello, world!"));
    /// let body = Body::new(http_body);
    /// ```
    pub fn new<B>(body: B) -> Self
    where
        B: Send + Sync + http_body::Body + 'static,
        B::Data: Into<Bytes>,
        B::Error: Into<Error>,
    {
        Self {
            mime: None,
            inner: BodyInner::HttpBody(Box::pin(
                body.map_frame(|frame| frame.map_data(|data| data.into()))
                    .map_err(|e| e.into()),
            )),
        }
    }

    /// Creates a body from an async buffered reader.
    ///
    /// The optional length hint is reported by [`Body::len`] and used to
    /// size the buffer when the body is collected.
    ///
    /// You are responsible for setting the MIME type of the body.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Body;
    /// use futures_lite::io::{BufReader, Cursor};
    ///
    /// let reader = BufReader::new(Cursor::new(b"streamed".to_vec()));
    /// let body = Body::from_reader(reader, 8);
    /// assert_eq!(body.len(), Some(8));
    /// ```
    pub fn from_reader(
        reader: impl AsyncBufRead + Send + Sync + 'static,
        length: impl Into<Option<usize>>,
    ) -> Self {
        Self {
            mime: None,
            inner: BodyInner::Reader {
                reader: Box::pin(reader),
                length: length.into(),
            },
        }
    }

    /// Creates a body from an async stream of data chunks.
    ///
    /// You are responsible for setting the MIME type of the body.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Body;
    /// use futures_lite::stream;
    ///
    /// let chunks = stream::iter(vec![
    ///     Ok::<_, std::io::Error>("Hello, ".as_bytes()),
    ///     Ok("world!".as_bytes()),
    /// ]);
    ///
    /// let body = Body::from_stream(chunks);
    /// assert_eq!(body.len(), None);
    /// ```
    pub fn from_stream<T, E, S>(stream: S) -> Self
    where
        T: Into<Bytes> + Send + 'static,
        E: Into<Error>,
        S: Stream<Item = Result<T, E>> + Send + Sync + 'static,
    {
        Self {
            mime: None,
            inner: BodyInner::HttpBody(Box::pin(StreamBody::new(stream.map(|result| {
                result
                    .map(|data| Frame::data(data.into()))
                    .map_err(|error| error.into())
            })))),
        }
    }

    /// Creates a body from bytes or byte-like data.
    ///
    /// The MIME type is set to `application/octet-stream`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Body;
    ///
    /// let body = Body::from_bytes(vec![72, 101, 108, 108, 111]);
    /// assert_eq!(body.mime().unwrap().as_ref(), "application/octet-stream");
    /// ```
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self {
            mime: Some(mime::APPLICATION_OCTET_STREAM),
            inner: BodyInner::Once(data.into()),
        }
    }

    /// Creates a plain text body.
    ///
    /// The bytes are exactly the UTF-8 bytes of `text` and the MIME type is
    /// `text/plain`.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            mime: Some(mime::TEXT_PLAIN),
            inner: BodyInner::Once(Bytes::from(text.into())),
        }
    }

    /// Creates an HTML body.
    ///
    /// The bytes are exactly the UTF-8 bytes of `html` and the MIME type is
    /// `text/html`.
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            mime: Some(mime::TEXT_HTML),
            inner: BodyInner::Once(Bytes::from(html.into())),
        }
    }

    /// Returns the MIME type of the body, if known.
    pub fn mime(&self) -> Option<&Mime> {
        self.mime.as_ref()
    }

    /// Sets the MIME type of the body.
    ///
    /// This consumes the body and is meant to be used while it is being built.
    pub fn with_mime(mut self, mime: Mime) -> Self {
        self.mime = Some(mime);
        self
    }

    /// Returns the length of the body in bytes, if known.
    ///
    /// In-memory bodies always know their length. Reader bodies report their
    /// length hint, other streaming bodies return `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Body;
    ///
    /// let body = Body::from_bytes("Hello, world!");
    /// assert_eq!(body.len(), Some(13));
    /// ```
    pub const fn len(&self) -> Option<usize> {
        match &self.inner {
            BodyInner::Once(bytes) => Some(bytes.len()),
            BodyInner::Reader { length, .. } => *length,
            BodyInner::HttpBody(_) => None,
        }
    }

    /// Returns whether the body is empty, if the length is known.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Body;
    ///
    /// assert_eq!(Body::empty().is_empty(), Some(true));
    /// assert_eq!(Body::from_bytes("data").is_empty(), Some(false));
    /// ```
    pub const fn is_empty(&self) -> Option<bool> {
        match self.len() {
            Some(len) => Some(len == 0),
            None => None,
        }
    }

    /// Consumes the body and returns all its data as `Bytes`.
    ///
    /// For streaming bodies, all data will be read and concatenated.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs while reading streaming data
    /// or the underlying stream produces an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Body;
    ///
    /// # async fn example() -> Result<(), http_factory::BodyError> {
    /// let body = Body::from_bytes("Hello, world!");
    /// let bytes = body.into_bytes().await?;
    /// assert_eq!(bytes, "Hello, world!");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn into_bytes(self) -> Result<Bytes, Error> {
        match self.inner {
            BodyInner::Once(bytes) => Ok(bytes),
            BodyInner::Reader { mut reader, length } => {
                let mut vec = Vec::with_capacity(length.unwrap_or_default());
                loop {
                    let data = reader.fill_buf().await?;
                    if data.is_empty() {
                        break;
                    }
                    let len = data.len();
                    vec.extend_from_slice(data);
                    reader.as_mut().consume(len);
                }
                Ok(vec.into())
            }
            BodyInner::HttpBody(body) => {
                let mut body = body.into_data_stream();

                let first = body.try_next().await?.unwrap_or_default();
                let second = body.try_next().await?;
                if let Some(second) = second {
                    let remain_size_hint = body.size_hint();
                    let mut vec = Vec::with_capacity(
                        first.len()
                            + second.len()
                            + remain_size_hint.1.unwrap_or(remain_size_hint.0),
                    );
                    vec.extend_from_slice(&first);
                    vec.extend_from_slice(&second);
                    while let Some(data) = body.try_next().await? {
                        vec.extend_from_slice(&data);
                    }
                    Ok(vec.into())
                } else {
                    Ok(first)
                }
            }
        }
    }

    /// Consumes the body and returns its data as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the body is not valid UTF-8.
    pub async fn into_string(self) -> Result<ByteStr, Error> {
        Ok(ByteStr::from_utf8(self.into_bytes().await?)?)
    }

    /// Consumes the body and deserializes it as JSON.
    ///
    /// This does not look at the MIME type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Body;
    /// use serde_json::Value;
    ///
    /// # async fn example() -> Result<(), http_factory::BodyError> {
    /// let body = Body::from_bytes(r#"{"key":"value"}"#);
    /// let value: Value = body.into_json().await?;
    /// assert_eq!(value["key"], "value");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn into_json<T>(self) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        Ok(serde_json::from_slice(&self.into_bytes().await?)?)
    }

    /// Converts the body into an async buffered reader.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Body;
    /// use futures_lite::AsyncBufReadExt;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let body = Body::from_bytes("line1\nline2\nline3");
    /// let mut reader = body.into_reader();
    /// let mut line = String::new();
    /// reader.read_line(&mut line).await?;
    /// assert_eq!(line, "line1\n");
    /// # Ok(())
    /// # }
    /// ```
    pub fn into_reader(self) -> impl AsyncBufRead + Send {
        IntoAsyncRead::new(self)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl Stream for Body {
    type Item = Result<Bytes, Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match &mut self.inner {
            BodyInner::Once(bytes) => {
                if bytes.is_empty() {
                    Poll::Ready(None)
                } else {
                    Poll::Ready(Some(Ok(take(bytes))))
                }
            }
            BodyInner::Reader { reader, length } => {
                let data = ready!(reader.as_mut().poll_fill_buf(cx))?;
                if data.is_empty() {
                    return Poll::Ready(None);
                }
                let data = Bytes::copy_from_slice(data);
                reader.as_mut().consume(data.len());
                if let Some(known_length) = length {
                    *known_length = known_length.saturating_sub(data.len());
                }
                Poll::Ready(Some(Ok(data)))
            }
            BodyInner::HttpBody(stream) => stream
                .as_mut()
                .poll_frame(cx)
                .map_ok(|frame| frame.into_data().unwrap_or_default()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            BodyInner::Once(bytes) => (bytes.len(), Some(bytes.len())),
            BodyInner::Reader { length, .. } => (0, *length),
            BodyInner::HttpBody(body) => {
                let hint = body.size_hint();
                (hint.lower() as usize, hint.upper().map(|u| u as usize))
            }
        }
    }
}

impl http_body::Body for Body {
    type Data = Bytes;

    type Error = Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        self.poll_next(cx)
            .map(|opt| opt.map(|result| result.map(Frame::data)))
    }
}
