use http::{HeaderValue, Uri};
use iri_string::types::UriReferenceStr;

use crate::InvalidUriError;

/// Values that can become the `Location` header of a redirect.
///
/// Strings are validated as RFC 3986 URI references and then used verbatim, so
/// `"https://example.com"` stays exactly that and relative references such as
/// `"?page=2"` or `"../up"` are accepted. A [`Uri`] is written in its canonical
/// string form.
///
/// # Examples
///
/// ```rust
/// use http_factory::IntoLocation;
/// use http::Uri;
///
/// let location = "https://example.com".into_location()?;
/// assert_eq!(location, "https://example.com");
///
/// let location = Uri::from_static("/relative/path").into_location()?;
/// assert_eq!(location, "/relative/path");
///
/// assert!("not a uri".into_location().is_err());
/// # Ok::<(), http_factory::InvalidUriError>(())
/// ```
pub trait IntoLocation {
    /// Validates the target and converts it into a header value.
    fn into_location(self) -> Result<HeaderValue, InvalidUriError>;
}

impl IntoLocation for &str {
    fn into_location(self) -> Result<HeaderValue, InvalidUriError> {
        UriReferenceStr::new(self).map_err(|error| InvalidUriError::new(self, error))?;
        HeaderValue::from_str(self).map_err(|error| InvalidUriError::new(self, error))
    }
}

impl IntoLocation for &String {
    fn into_location(self) -> Result<HeaderValue, InvalidUriError> {
        self.as_str().into_location()
    }
}

impl IntoLocation for String {
    fn into_location(self) -> Result<HeaderValue, InvalidUriError> {
        self.as_str().into_location()
    }
}

impl IntoLocation for &Uri {
    fn into_location(self) -> Result<HeaderValue, InvalidUriError> {
        let target = self.to_string();
        HeaderValue::try_from(target.as_str()).map_err(|error| InvalidUriError::new(target, error))
    }
}

impl IntoLocation for Uri {
    fn into_location(self) -> Result<HeaderValue, InvalidUriError> {
        (&self).into_location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_kept_verbatim() {
        for target in [
            "https://example.com",
            "https://example.com/a/b?c=d",
            "/relative/path",
            "relative",
            "*",
            "?page=2",
            "#top",
            "../up",
            "path/to?x=1",
            "",
        ] {
            assert_eq!(target.into_location().unwrap(), target);
        }
    }

    #[test]
    fn uri_uses_its_string_form() {
        let uri: Uri = "https://example.com/search?q=rust".parse().unwrap();
        assert_eq!(uri.into_location().unwrap(), "https://example.com/search?q=rust");
    }

    #[test]
    fn malformed_targets_are_rejected() {
        for target in [
            "has space",
            "http://[::1",
            "http://exa mple.com",
            "/tab\there",
            "100%",
        ] {
            let error = target.into_location().unwrap_err();
            assert_eq!(error.target(), target);
        }
    }
}
