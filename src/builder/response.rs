use http::HeaderMap;
use serde::Serialize;
use tracing::{debug, trace};

use super::ResponseFactory;
use crate::primitive::ResponsePrimitive;
use crate::{Error, IntoLocation, Response, Result};

/// A [`ResponseFactory`] backed by a [`ResponsePrimitive`].
///
/// The builder owns nothing but its primitive. It is `Send + Sync` whenever
/// the primitive is, and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder<P> {
    primitive: P,
}

impl<P: ResponsePrimitive> ResponseBuilder<P> {
    /// Creates a builder delegating bare responses to `primitive`.
    pub const fn new(primitive: P) -> Self {
        Self { primitive }
    }

    /// Returns the injected primitive.
    pub const fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Consumes the builder and returns the primitive.
    pub fn into_primitive(self) -> P {
        self.primitive
    }
}

impl<P: ResponsePrimitive> ResponseFactory for ResponseBuilder<P> {
    fn create_response(&self, status: u16, reason: &str) -> Result<Response> {
        self.primitive
            .create_response(status, reason)
            .map_err(|error| {
                debug!(status, reason, %error, "response primitive failed");
                Error::primitive(error)
            })
    }

    fn create_response_from_html(&self, html: impl Into<String>) -> Response {
        trace!("creating html response");
        Response::html(html)
    }

    fn create_response_from_text(&self, text: impl Into<String>) -> Response {
        trace!("creating text response");
        Response::text(text)
    }

    fn create_response_from_payload<T>(&self, payload: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        trace!("creating json response");
        Response::json(payload).map_err(|error| {
            debug!(%error, "payload rejected");
            error.into()
        })
    }

    fn create_response_no_content(&self, headers: HeaderMap) -> Response {
        trace!(headers = headers.len(), "creating no-content response");
        Response::no_content(headers)
    }

    fn create_response_redirect(
        &self,
        target: impl IntoLocation,
        permanent: bool,
        headers: HeaderMap,
    ) -> Result<Response> {
        trace!(permanent, "creating redirect response");
        Response::redirect(target, permanent, headers).map_err(|error| {
            debug!(location = error.target(), "redirect target rejected");
            error.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicError, BasicPrimitive, ResponseKind};
    use http::header::{CONTENT_TYPE, LOCATION};
    use http::{HeaderValue, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingPrimitive {
        calls: AtomicUsize,
    }

    impl ResponsePrimitive for CountingPrimitive {
        type Error = BasicError;

        fn create_response(&self, status: u16, reason: &str) -> core::result::Result<Response, BasicError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            BasicPrimitive::new().create_response(status, reason)
        }
    }

    #[test]
    fn shaped_responses_do_not_touch_the_primitive() {
        let builder = ResponseBuilder::new(CountingPrimitive::default());

        builder.create_response_from_html("<p>x</p>");
        builder.create_response_from_text("x");
        builder.create_response_from_payload(&[1, 2, 3]).unwrap();
        builder.create_response_no_content(HeaderMap::new());
        builder
            .create_response_redirect("/next", false, HeaderMap::new())
            .unwrap();

        assert_eq!(builder.primitive().calls.load(Ordering::SeqCst), 0);

        builder.create_response(200, "").unwrap();
        assert_eq!(builder.primitive().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn primitive_errors_are_wrapped() {
        let builder = ResponseBuilder::new(BasicPrimitive::new());
        let Err(Error::Primitive(error)) = builder.create_response(1000, "") else {
            panic!("status 1000 must be rejected");
        };
        assert_eq!(error.to_string(), "invalid status code 1000");
        assert!(matches!(
            error.downcast::<BasicError>().map(|error| *error),
            Ok(BasicError::InvalidStatus(1000))
        ));
    }

    #[test]
    fn redirect_errors_are_invalid_uri() {
        let builder = ResponseBuilder::new(BasicPrimitive::new());
        let error = builder
            .create_response_redirect("/has space", true, HeaderMap::new())
            .unwrap_err();
        assert!(matches!(error, Error::InvalidUri(ref e) if e.target() == "/has space"));
    }

    #[test]
    fn redirect_keeps_other_headers() {
        let builder = ResponseBuilder::new(BasicPrimitive::new());
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        headers.insert(LOCATION, HeaderValue::from_static("/old"));

        let response = builder
            .create_response_redirect("/new", false, headers)
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.kind(), ResponseKind::Redirect);
        assert_eq!(response.header_line(LOCATION).as_deref(), Some("/new"));
        assert_eq!(response.header_line(CONTENT_TYPE).as_deref(), Some("text/plain"));
    }
}
