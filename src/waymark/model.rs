use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// An opaque field-keyed entity subject to text search.
///
/// Records carry whatever fields their producer gave them; which fields
/// participate in filtering is the caller's decision, never inferred here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Missing fields read as empty. Filtering is total over records.
    pub fn field_or_empty(&self, name: &str) -> &str {
        self.field(name).unwrap_or("")
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A path paired with the title resolution produced for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTitle {
    pub path: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_reads_as_empty() {
        let record = Record::new().with_field("name", "Ann Lee");
        assert_eq!(record.field("name"), Some("Ann Lee"));
        assert_eq!(record.field("contact"), None);
        assert_eq!(record.field_or_empty("contact"), "");
    }

    #[test]
    fn record_serializes_as_flat_object() {
        let record = Record::new()
            .with_field("name", "Ann Lee")
            .with_field("action", "login");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"action":"login","name":"Ann Lee"}"#);

        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
