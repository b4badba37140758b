/// Attributes persisted per partition key.
///
/// An open mapping from string keys to arbitrary JSON values, stored and
/// returned as a single opaque document.
pub type Attributes = serde_json::Map<String, serde_json::Value>;
