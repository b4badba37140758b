//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between JSON documents and DynamoDB
//! `AttributeValue` maps. These are testable in isolation without DynamoDB
//! access.

use std::collections::HashMap;

use attrstore_core::persistence::Attributes;
use attrstore_core::store::StoreError;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};

/// Convert a JSON value to a DynamoDB attribute value.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(map_to_attributes(map)),
    }
}

/// Convert a DynamoDB attribute value to JSON.
///
/// String and number sets become arrays. Binary values have no JSON form and
/// are rejected.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, StoreError> {
    match value {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(items) => items
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => attributes_to_map(map).map(Value::Object),
        AttributeValue::Ss(items) => Ok(Value::Array(
            items.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(items) => items
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(StoreError::InvalidData(
            "binary attributes are not supported".to_string(),
        )),
        other => Err(StoreError::InvalidData(format!(
            "unsupported attribute value: {other:?}"
        ))),
    }
}

fn parse_number(n: &str) -> Result<Number, StoreError> {
    serde_json::from_str::<Number>(n)
        .map_err(|e| StoreError::InvalidData(format!("invalid number '{n}': {e}")))
}

fn map_to_attributes(map: &Attributes) -> HashMap<String, AttributeValue> {
    map.iter()
        .map(|(k, v)| (k.clone(), json_to_attribute(v)))
        .collect()
}

fn attributes_to_map(map: &HashMap<String, AttributeValue>) -> Result<Attributes, StoreError> {
    map.iter()
        .map(|(k, v)| attribute_to_json(v).map(|json| (k.clone(), json)))
        .collect()
}

/// Build the item stored for a document.
pub fn document_to_item(
    key_attribute: &str,
    id: &str,
    attributes_attribute: &str,
    document: &Attributes,
) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(key_attribute.to_string(), AttributeValue::S(id.to_string()));
    item.insert(
        attributes_attribute.to_string(),
        AttributeValue::M(map_to_attributes(document)),
    );
    item
}

/// Extract the document from a stored item.
///
/// An item without the attributes attribute holds an empty document.
pub fn item_to_document(
    item: &HashMap<String, AttributeValue>,
    attributes_attribute: &str,
) -> Result<Attributes, StoreError> {
    match item.get(attributes_attribute) {
        Some(AttributeValue::M(map)) => attributes_to_map(map),
        Some(_) => Err(StoreError::InvalidData(format!(
            "attribute '{attributes_attribute}' is not a map"
        ))),
        None => Ok(Attributes::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::primitives::Blob;
    use serde_json::json;

    fn document(value: Value) -> Attributes {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_scalars_to_attributes() {
        assert_eq!(json_to_attribute(&json!(null)), AttributeValue::Null(true));
        assert_eq!(json_to_attribute(&json!(true)), AttributeValue::Bool(true));
        assert_eq!(json_to_attribute(&json!(42)), AttributeValue::N("42".to_string()));
        assert_eq!(json_to_attribute(&json!(-1.5)), AttributeValue::N("-1.5".to_string()));
        assert_eq!(
            json_to_attribute(&json!("hello")),
            AttributeValue::S("hello".to_string())
        );
    }

    #[test]
    fn test_nested_document_survives_conversion() {
        let doc = document(json!({
            "count": 3,
            "ratio": 0.25,
            "name": "trivia",
            "done": false,
            "missing": null,
            "history": [1, "two", { "three": [3] }],
            "profile": { "locale": "en-US", "scores": [] }
        }));

        let item = document_to_item("id", "U1", "attributes", &doc);
        assert_eq!(item.get("id"), Some(&AttributeValue::S("U1".to_string())));

        assert_eq!(item_to_document(&item, "attributes").unwrap(), doc);
    }

    #[test]
    fn test_sets_become_arrays() {
        let value = AttributeValue::Ss(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(attribute_to_json(&value).unwrap(), json!(["a", "b"]));

        let value = AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]);
        assert_eq!(attribute_to_json(&value).unwrap(), json!([1, 2.5]));
    }

    #[test]
    fn test_number_parsing() {
        assert_eq!(
            attribute_to_json(&AttributeValue::N("18446744073709551615".to_string())).unwrap(),
            json!(u64::MAX)
        );
        assert_eq!(
            attribute_to_json(&AttributeValue::N("-7".to_string())).unwrap(),
            json!(-7)
        );
        assert!(matches!(
            attribute_to_json(&AttributeValue::N("abc".to_string())),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_binary_is_rejected() {
        let value = AttributeValue::B(Blob::new(vec![1, 2, 3]));
        assert!(matches!(
            attribute_to_json(&value),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_item_without_attributes_is_empty() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("U1".to_string()));

        assert!(item_to_document(&item, "attributes").unwrap().is_empty());
    }

    #[test]
    fn test_item_with_non_map_attributes_is_invalid() {
        let mut item = HashMap::new();
        item.insert("attributes".to_string(), AttributeValue::S("{}".to_string()));

        assert!(matches!(
            item_to_document(&item, "attributes"),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_custom_attribute_names() {
        let doc = document(json!({ "count": 1 }));
        let item = document_to_item("userId", "U1", "data", &doc);

        assert!(item.contains_key("userId"));
        assert!(item.contains_key("data"));
        assert_eq!(item_to_document(&item, "data").unwrap(), doc);
    }
}
