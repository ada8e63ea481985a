//! JSON payloads.
//!
//! A [`Payload`] is a structured value that is guaranteed to have a JSON
//! representation. Payloads are built from any `T: Serialize` at the factory
//! boundary, so values that cannot be encoded are rejected before a message
//! exists instead of failing somewhere inside the body.
//!
//! Object keys keep their insertion order and the encoding is compact UTF-8.
//!
//! # Examples
//!
//! ```rust
//! use http_factory::payload;
//! use std::collections::BTreeMap;
//!
//! let mut map = BTreeMap::new();
//! map.insert("key", "value");
//!
//! let payload = payload::to_payload(&map)?;
//! assert_eq!(payload::encode(&payload)?, r#"{"key":"value"}"#);
//! # Ok::<(), http_factory::EncodingError>(())
//! ```
use bytes::Bytes;
use serde::Serialize;

use crate::EncodingError;

mod finite;

/// A JSON-encodable structured value.
///
/// This is [`serde_json::Value`]: objects, arrays, strings, finite numbers,
/// booleans and null. NaN and infinite floats have no representation and are
/// rejected by [`to_payload`].
pub type Payload = serde_json::Value;

/// Converts any serializable value into a [`Payload`].
///
/// # Errors
///
/// Returns [`EncodingError`] when the value has no JSON representation, for
/// example a NaN or infinite float, a map keyed by non-string values or a type
/// whose `Serialize` implementation reports an error.
pub fn to_payload<T>(value: &T) -> Result<Payload, EncodingError>
where
    T: Serialize + ?Sized,
{
    finite::check(value)?;
    serde_json::to_value(value).map_err(EncodingError::from)
}

/// Encodes a payload as compact UTF-8 JSON.
pub fn encode(payload: &Payload) -> Result<Bytes, EncodingError> {
    Ok(serde_json::to_vec(payload)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Error as _, Serializer};
    use serde_json::json;
    use std::collections::HashMap;

    struct OpenHandle;

    impl Serialize for OpenHandle {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("an open handle cannot be serialized"))
        }
    }

    #[test]
    fn keys_keep_insertion_order() {
        let payload = json!({"zeta": 1, "alpha": 2, "mid": {"b": true, "a": null}});
        assert_eq!(
            encode(&payload).unwrap(),
            r#"{"zeta":1,"alpha":2,"mid":{"b":true,"a":null}}"#
        );
    }

    #[test]
    fn encoding_is_compact_utf8() {
        let payload = json!(["caf\u{e9}", "line\nbreak", 1.5]);
        let bytes = encode(&payload).unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            "[\"caf\u{e9}\",\"line\\nbreak\",1.5]"
        );
    }

    #[test]
    fn scalars_are_payloads() {
        assert_eq!(to_payload(&42).unwrap(), json!(42));
        assert_eq!(to_payload("text").unwrap(), json!("text"));
        assert_eq!(to_payload(&()).unwrap(), json!(null));
    }

    #[test]
    fn handles_are_rejected() {
        let error = to_payload(&vec![OpenHandle]).unwrap_err();
        assert!(error.to_string().contains("open handle"));
    }

    #[test]
    fn non_string_keys_are_rejected() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], "value");
        assert!(to_payload(&map).is_err());
    }

    #[derive(Serialize)]
    struct Reading {
        label: &'static str,
        value: f64,
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        let error = to_payload(&Reading {
            label: "sensor",
            value: f64::NAN,
        })
        .unwrap_err();
        assert!(error.to_string().contains("NaN"));

        assert!(to_payload(&f64::INFINITY).is_err());
        assert!(to_payload(&vec![vec![1.0f32], vec![f32::NEG_INFINITY]]).is_err());

        let mut map = HashMap::new();
        map.insert("ratio", Some(f64::INFINITY));
        assert!(to_payload(&map).is_err());
    }

    #[test]
    fn finite_floats_are_kept() {
        let payload = to_payload(&Reading {
            label: "sensor",
            value: -0.25,
        })
        .unwrap();
        assert_eq!(payload, json!({"label": "sensor", "value": -0.25}));
        assert_eq!(to_payload(&(1u128, f32::MAX)).unwrap()[0], json!(1));
    }
}
