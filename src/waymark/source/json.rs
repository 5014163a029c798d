use super::RecordSource;
use crate::error::{Result, WaymarkError};
use crate::model::Record;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed record source: a JSON array of flat objects.
///
/// Scalar values are coerced to their display form so numeric ids and flags
/// in real exports stay searchable; null, arrays and nested objects have no
/// text form and read as absent fields.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load_records(&self) -> Result<Vec<Record>> {
        let content = fs::read_to_string(&self.path)?;
        let parsed: Value = serde_json::from_str(&content)?;

        let Value::Array(items) = parsed else {
            return Err(WaymarkError::Source(format!(
                "{}: expected a JSON array of records",
                self.path.display()
            )));
        };

        let mut records = Vec::with_capacity(items.len());
        for (position, item) in items.into_iter().enumerate() {
            let Value::Object(fields) = item else {
                return Err(WaymarkError::Source(format!(
                    "{}: record {} is not an object",
                    self.path.display(),
                    position
                )));
            };

            let mut record = Record::new();
            for (name, value) in fields {
                match value {
                    Value::String(s) => record.set(name, s),
                    Value::Number(n) => record.set(name, n.to_string()),
                    Value::Bool(b) => record.set(name, b.to_string()),
                    Value::Null | Value::Array(_) | Value::Object(_) => {}
                }
            }
            records.push(record);
        }

        Ok(records)
    }
}
