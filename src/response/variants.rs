//! Shaped response constructors.
//!
//! Each constructor fixes status, headers and body for one kind of response:
//!
//! | Kind       | Status      | Headers set                       | Body               |
//! |------------|-------------|-----------------------------------|--------------------|
//! | `Html`     | 200         | `Content-Type: text/html`         | the HTML, verbatim |
//! | `Text`     | 200         | `Content-Type: text/plain`        | the text, verbatim |
//! | `Json`     | 200         | `Content-Type: application/json`  | compact JSON       |
//! | `Redirect` | 301 / 302   | caller headers, then `Location`   | empty              |
//! | `Empty`    | 204         | caller headers only               | empty              |
use http::header::{CONTENT_TYPE, LOCATION};
use http::{HeaderMap, HeaderValue, StatusCode};
use serde::Serialize;

use super::{IntoLocation, Response, ResponseKind};
use crate::{Body, EncodingError, InvalidUriError, JsonStream};

fn content_type(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(1);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
    headers
}

impl Response {
    /// Creates a `200 OK` response with an HTML body.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Response;
    ///
    /// let response = Response::html("<h1>Title</h1>");
    /// assert_eq!(response.header_line("content-type").as_deref(), Some("text/html"));
    /// ```
    pub fn html(html: impl Into<String>) -> Self {
        Self::shaped(
            StatusCode::OK,
            content_type("text/html"),
            Body::from_html(html),
            ResponseKind::Html,
            None,
        )
    }

    /// Creates a `200 OK` response with a plain text body.
    pub fn text(text: impl Into<String>) -> Self {
        Self::shaped(
            StatusCode::OK,
            content_type("text/plain"),
            Body::from_text(text),
            ResponseKind::Text,
            None,
        )
    }

    /// Creates a `200 OK` response with a JSON body.
    ///
    /// The payload stays available through [`Response::payload`].
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if the payload has no JSON representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Response;
    /// use serde_json::json;
    ///
    /// let response = Response::json(&json!({"key": "value"}))?;
    /// assert_eq!(response.payload(), Some(&json!({"key": "value"})));
    /// # Ok::<(), http_factory::EncodingError>(())
    /// ```
    pub fn json<T>(payload: &T) -> Result<Self, EncodingError>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self::from_json_stream(JsonStream::new(payload)?))
    }

    /// Creates a `200 OK` JSON response from an encoded [`JsonStream`].
    pub fn from_json_stream(stream: JsonStream) -> Self {
        let (payload, body) = stream.into_parts();
        Self::shaped(
            StatusCode::OK,
            content_type("application/json"),
            body,
            ResponseKind::Json,
            Some(payload),
        )
    }

    /// Creates a `204 No Content` response.
    ///
    /// The headers are used exactly as given. Nothing is added or removed,
    /// not even a `Content-Type` that has no meaning on a 204.
    pub fn no_content(headers: HeaderMap) -> Self {
        Self::shaped(
            StatusCode::NO_CONTENT,
            headers,
            Body::empty(),
            ResponseKind::Empty,
            None,
        )
    }

    /// Creates a redirect to `target`.
    ///
    /// The status is `301 Moved Permanently` when `permanent` is set and
    /// `302 Found` otherwise. `headers` are kept, except that `Location` is
    /// always replaced by the target.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUriError`] if `target` is not a valid URI reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use http_factory::Response;
    /// use http::{HeaderMap, StatusCode};
    ///
    /// let response = Response::redirect("https://example.com", false, HeaderMap::new())?;
    /// assert_eq!(response.status(), StatusCode::FOUND);
    /// assert_eq!(response.header_line("location").as_deref(), Some("https://example.com"));
    /// # Ok::<(), http_factory::InvalidUriError>(())
    /// ```
    pub fn redirect(
        target: impl IntoLocation,
        permanent: bool,
        mut headers: HeaderMap,
    ) -> Result<Self, InvalidUriError> {
        headers.insert(LOCATION, target.into_location()?);
        let status = if permanent {
            StatusCode::MOVED_PERMANENTLY
        } else {
            StatusCode::FOUND
        };
        Ok(Self::shaped(
            status,
            headers,
            Body::empty(),
            ResponseKind::Redirect,
            None,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Uri;
    use serde_json::json;

    #[tokio::test]
    async fn html_is_verbatim() {
        let html = "<!doctype html><title>x</title>\n<p>caf\u{e9} & co</p>";
        let response = Response::html(html);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.kind(), ResponseKind::Html);
        assert_eq!(response.header_line(CONTENT_TYPE).as_deref(), Some("text/html"));
        assert_eq!(response.headers().len(), 1);
        assert_eq!(response.into_string().await.unwrap().as_str(), html);
    }

    #[tokio::test]
    async fn empty_strings_are_valid_bodies() {
        let response = Response::html("");
        assert_eq!(response.body().len(), Some(0));
        assert_eq!(response.into_bytes().await.unwrap().len(), 0);

        let response = Response::text(String::new());
        assert_eq!(response.header_line(CONTENT_TYPE).as_deref(), Some("text/plain"));
        assert_eq!(response.into_bytes().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn text_is_verbatim() {
        let text = "Plain Text\twith\r\ncontrol characters";
        let response = Response::text(text);

        assert_eq!(response.kind(), ResponseKind::Text);
        assert_eq!(response.header_line(CONTENT_TYPE).as_deref(), Some("text/plain"));
        assert_eq!(response.into_string().await.unwrap().as_str(), text);
    }

    #[tokio::test]
    async fn json_does_not_force_a_status() {
        let payload = json!({"key": "value"});
        let response = Response::json(&payload).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.kind(), ResponseKind::Json);
        assert_eq!(
            response.header_line(CONTENT_TYPE).as_deref(),
            Some("application/json")
        );
        assert_eq!(response.payload(), Some(&payload));

        let decoded: serde_json::Value = response.into_json().await.unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn no_content_keeps_caller_headers_only() {
        let response = Response::no_content(HeaderMap::new());
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().is_empty());
        assert_eq!(response.body().is_empty(), Some(true));

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/xml"));
        headers.insert("x-test", HeaderValue::from_static("value"));
        let response = Response::no_content(headers.clone());

        assert_eq!(response.kind(), ResponseKind::Empty);
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.body().len(), Some(0));
    }

    #[test]
    fn redirect_status_follows_permanence() {
        let temporary = Response::redirect("/login", false, HeaderMap::new()).unwrap();
        assert_eq!(temporary.status(), StatusCode::FOUND);
        assert_eq!(temporary.kind(), ResponseKind::Redirect);

        let permanent = Response::redirect("/login", true, HeaderMap::new()).unwrap();
        assert_eq!(permanent.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(permanent.body().len(), Some(0));
    }

    #[test]
    fn redirect_location_always_wins() {
        let mut headers = HeaderMap::new();
        headers.append(LOCATION, HeaderValue::from_static("https://attacker.example"));
        headers.append(LOCATION, HeaderValue::from_static("/second"));
        headers.insert("x-test", HeaderValue::from_static("value"));

        let uri = Uri::from_static("/relative/path");
        let response = Response::redirect(uri, true, headers).unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.header_line(LOCATION).as_deref(), Some("/relative/path"));
        assert_eq!(response.header_line("x-test").as_deref(), Some("value"));
    }

    #[test]
    fn invalid_redirect_target_builds_nothing() {
        let error = Response::redirect("http://exa mple.com", false, HeaderMap::new()).unwrap_err();
        assert_eq!(error.target(), "http://exa mple.com");
    }
}
