/// Record identifiers are store-assigned UUIDs.
pub type DbId = uuid::Uuid;

/// A stored record's loosely-typed field mapping, keyed by field name.
pub type Document = serde_json::Map<String, serde_json::Value>;
