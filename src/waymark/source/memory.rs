use super::RecordSource;
use crate::error::Result;
use crate::model::Record;

/// In-memory record source for testing and demos.
/// Does NOT touch the filesystem.
#[derive(Debug, Default)]
pub struct InMemorySource {
    records: Vec<Record>,
}

impl InMemorySource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for InMemorySource {
    fn load_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::InMemorySource;
    use crate::model::Record;

    /// The console's mock audit log: actor name, contact and action, the
    /// three fields the admin surface searches simultaneously.
    pub fn audit_log() -> Vec<Record> {
        vec![
            entry("Ann Lee", "a@x.com", "login"),
            entry("Bob Osei", "bob@example.com", "exported survey results"),
            entry("Carla Diaz", "carla@example.com", "deleted a response"),
            entry("Dan Field", "dan@example.com", "login"),
        ]
    }

    pub fn audit_source() -> InMemorySource {
        InMemorySource::new(audit_log())
    }

    fn entry(name: &str, contact: &str, action: &str) -> Record {
        Record::new()
            .with_field("name", name)
            .with_field("contact", contact)
            .with_field("action", action)
    }
}
