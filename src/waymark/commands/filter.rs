use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::filter_records;
use crate::source::RecordSource;

pub fn run<S: RecordSource>(source: &S, query: &str, fields: &[String]) -> Result<CmdResult> {
    let records = source.load_records()?;
    let total = records.len();
    let matched = filter_records(&records, query, fields);

    Ok(CmdResult::default().with_records(matched, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::{fixtures, InMemorySource};

    fn audit_fields() -> Vec<String> {
        vec!["name".into(), "contact".into(), "action".into()]
    }

    #[test]
    fn reports_total_alongside_matches() {
        let source = fixtures::audit_source();
        let result = run(&source, "login", &audit_fields()).unwrap();

        assert_eq!(result.listed_records.len(), 2);
        assert_eq!(result.total_records, 4);
    }

    #[test]
    fn no_match_keeps_total_distinct_from_empty_dataset() {
        let source = fixtures::audit_source();
        let result = run(&source, "zzz-no-match", &audit_fields()).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.total_records, 4);

        let empty = InMemorySource::default();
        let result = run(&empty, "zzz-no-match", &audit_fields()).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.total_records, 0);
    }

    #[test]
    fn empty_query_lists_everything() {
        let source = fixtures::audit_source();
        let result = run(&source, "", &audit_fields()).unwrap();
        assert_eq!(result.listed_records.len(), 4);
        assert_eq!(result.total_records, 4);
    }
}
