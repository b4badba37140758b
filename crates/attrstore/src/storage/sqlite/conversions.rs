//! Document encoding for the SQLite store.
//!
//! Pure functions, testable without database access.

use attrstore_core::persistence::Attributes;
use attrstore_core::store::StoreError;
use chrono::{DateTime, SecondsFormat, Utc};

/// Encode a document as JSON text for the `data` column.
pub fn encode_document(document: &Attributes) -> Result<String, StoreError> {
    serde_json::to_string(document).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Decode the `data` column back into a document.
///
/// Anything other than a JSON object is rejected.
pub fn decode_document(data: &str) -> Result<Attributes, StoreError> {
    match serde_json::from_str(data) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::InvalidData(format!(
            "stored document is not a JSON object: {other}"
        ))),
        Err(e) => Err(StoreError::Serialization(e.to_string())),
    }
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_encode_then_decode() {
        let document = json!({ "count": 1, "nested": { "list": [1, "two", null] } })
            .as_object()
            .cloned()
            .unwrap();

        let text = encode_document(&document).unwrap();
        assert_eq!(decode_document(&text).unwrap(), document);
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let result = decode_document("[1, 2, 3]");
        assert!(matches!(result, Err(StoreError::InvalidData(_))));
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let result = decode_document("{\"count\":");
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        assert_eq!(format_datetime(&dt), "2024-06-15T10:30:00.000Z");
    }
}
