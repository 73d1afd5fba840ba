//! Envelope extraction for Lightspeed response bodies.
//!
//! Every V3 response wraps its payload in an object keyed by the resource
//! name, next to an `@attributes` object carrying paging data:
//!
//! ```text
//! {"@attributes": {"count": "2", "offset": "0", "limit": "100"}, "Item": [ {...}, {...} ]}
//! ```
//!
//! Two upstream quirks are absorbed here:
//!
//! - A list holding exactly one entry arrives as a bare object.
//! - An empty list omits the envelope key and reports `count` `"0"`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::rest::EnvelopeError;

/// Key of the paging metadata object.
pub const ATTRIBUTES_KEY: &str = "@attributes";

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Deserializes a list that may arrive as an array, a single object or null.
///
/// Use with `#[serde(default, deserialize_with = "one_or_many")]` on nested
/// lists such as `Prices.ItemPrice`.
///
/// # Errors
///
/// Returns the deserializer's error if the value is neither a `T` nor a
/// sequence of `T`.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
    })
}

/// Returns `true` if the body reports an empty result set.
#[must_use]
pub fn is_empty_list(body: &Value) -> bool {
    match body.get(ATTRIBUTES_KEY).and_then(|attributes| attributes.get("count")) {
        Some(Value::String(count)) => count.trim() == "0",
        Some(Value::Number(count)) => count.as_u64() == Some(0),
        _ => false,
    }
}

/// Extracts and decodes a single-record envelope.
///
/// # Errors
///
/// Returns [`EnvelopeError`] if the key is missing or does not decode to `T`.
pub fn extract_one<T: DeserializeOwned>(
    body: &Value,
    envelope: &'static str,
) -> Result<T, EnvelopeError> {
    let value = body
        .get(envelope)
        .ok_or_else(|| EnvelopeError::missing(envelope))?;

    serde_json::from_value(value.clone()).map_err(|e| EnvelopeError::invalid(envelope, &e))
}

/// Extracts and decodes a list envelope.
///
/// # Errors
///
/// Returns [`EnvelopeError`] if the key is missing from a non-empty result,
/// or if its value is neither a `T` nor an array of `T`.
pub fn extract_list<T: DeserializeOwned>(
    body: &Value,
    envelope: &'static str,
) -> Result<Vec<T>, EnvelopeError> {
    match body.get(envelope) {
        Some(value) => one_or_many(value.clone()).map_err(|e| EnvelopeError::invalid(envelope, &e)),
        None if is_empty_list(body) => Ok(Vec::new()),
        None => Err(EnvelopeError::missing(envelope)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
    }

    #[test]
    fn test_extract_list_accepts_array() {
        let body = json!({"@attributes": {"count": "2"}, "Row": [{"id": "1"}, {"id": "2"}]});
        let rows: Vec<Row> = extract_list(&body, "Row").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, "2");
    }

    #[test]
    fn test_extract_list_wraps_single_object() {
        let body = json!({"@attributes": {"count": "1"}, "Row": {"id": "7"}});
        let rows: Vec<Row> = extract_list(&body, "Row").unwrap();
        assert_eq!(rows, vec![Row { id: "7".to_string() }]);
    }

    #[test]
    fn test_extract_list_empty_result() {
        let body = json!({"@attributes": {"count": "0", "offset": "0", "limit": "100"}});
        let rows: Vec<Row> = extract_list(&body, "Row").unwrap();
        assert!(rows.is_empty());

        let body = json!({"@attributes": {"count": 0}});
        assert!(is_empty_list(&body));
    }

    #[test]
    fn test_extract_list_missing_key_is_malformed() {
        let body = json!({"@attributes": {"count": "3"}});
        let err = extract_list::<Row>(&body, "Row").unwrap_err();
        assert_eq!(err, EnvelopeError::missing("Row"));

        let err = extract_list::<Row>(&json!({}), "Row").unwrap_err();
        assert_eq!(err.envelope, "Row");
    }

    #[test]
    fn test_extract_one_requires_key() {
        let row: Row = extract_one(&json!({"Row": {"id": "9"}}), "Row").unwrap();
        assert_eq!(row.id, "9");

        let err = extract_one::<Row>(&json!({"Other": {}}), "Row").unwrap_err();
        assert!(err.reason.contains("missing"));
    }

    #[test]
    fn test_extract_one_reports_decode_failure() {
        let err = extract_one::<Row>(&json!({"Row": {"id": 5}}), "Row").unwrap_err();
        assert!(err.reason.contains("failed to deserialize"));
    }

    #[test]
    fn test_one_or_many_treats_null_as_empty() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "one_or_many")]
            rows: Vec<Row>,
        }

        let wrapper: Wrapper = serde_json::from_value(json!({"rows": null})).unwrap();
        assert!(wrapper.rows.is_empty());

        let wrapper: Wrapper = serde_json::from_value(json!({})).unwrap();
        assert!(wrapper.rows.is_empty());
    }
}
