//! Free-text record filtering.
//!
//! A single pass over the input: a record passes when ANY of the configured
//! fields contains the trimmed query, case-insensitively. Input order is
//! preserved and the input is never mutated. The function is total:
//! missing fields read as empty strings and simply never match.

use crate::model::Record;

/// Filter `records` down to those whose configured fields contain `query`.
///
/// A trimmed-empty query means "no filtering": every record is returned in
/// its original order.
pub fn filter_records(records: &[Record], query: &str, fields: &[String]) -> Vec<Record> {
    let query = query.trim();
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            fields
                .iter()
                .any(|field| record.field_or_empty(field).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
