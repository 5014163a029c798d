//! # Source Layer
//!
//! Records come from *somewhere else*: a file export, an in-memory mock
//! dataset, eventually a network fetch. This module abstracts that
//! collaborator behind the [`RecordSource`] trait so the filtering logic
//! never cares.
//!
//! ## Implementations
//!
//! - [`json::JsonFileSource`]: production source, a JSON array of flat
//!   objects on disk (the shape admin log exports come in)
//! - [`memory::InMemorySource`]: in-memory records for testing and demos
//!
//! Sources load the FULL collection; filtering happens downstream and the
//! pre-filter count is reported alongside any filtered result, so callers
//! can tell "no data at all" apart from "no matches".

use crate::error::Result;
use crate::model::Record;

pub mod json;
pub mod memory;

/// Abstract interface for obtaining a record collection.
pub trait RecordSource {
    /// Load every record the source holds, in source order.
    fn load_records(&self) -> Result<Vec<Record>>;
}
