//! Path normalization and title resolution.
//!
//! `resolve` is a pure function of (path, table): no side effect, no error.
//! Whoever owns the page chrome applies the result; see [`document_title`]
//! for the conventional combined form.

use crate::routes::RouteTable;

/// Title used when a path has no non-empty segments at all.
pub const HOME_TITLE: &str = "Home";

/// Resolve a title for `path`: first matching rule wins, otherwise a title
/// is derived from the path itself. Always returns a non-empty string.
pub fn resolve(path: &str, table: &RouteTable) -> String {
    for rule in table.rules() {
        if rule.matches(path) {
            return rule.title.clone();
        }
    }
    derive_title(path)
}

/// Derive a title from the last non-empty path segment: `-` and `_` become
/// spaces, and only the first character is uppercased. Multi-word segments
/// are deliberately NOT title-cased ("survey-form" -> "Survey form").
pub fn derive_title(path: &str) -> String {
    match path.split('/').filter(|segment| !segment.is_empty()).last() {
        None => HOME_TITLE.to_string(),
        Some(segment) => capitalize_first(&segment.replace(['-', '_'], " ")),
    }
}

/// The combined page title. Falls back to the prefix alone for an empty
/// title, although `resolve` never produces one.
pub fn document_title(prefix: &str, title: &str) -> String {
    if title.is_empty() {
        prefix.to_string()
    } else {
        format!("{} - {}", prefix, title)
    }
}

/// Normalize a raw location string into Path form: leading `/`, query and
/// fragment stripped, no trailing slash except the root itself.
pub fn normalize(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw.split(['?', '#']).next().unwrap_or("");
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{MatchError, PathPattern, RouteTable, DEFAULT_ROUTES};

    fn always_fails(_path: &str) -> Result<bool, MatchError> {
        Err(MatchError("malformed".into()))
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = RouteTable::new()
            .with_rule(PathPattern::Prefix("/admin".into()), "Admin")
            .with_rule(PathPattern::Exact("/admin/logs".into()), "Audit Logs");
        assert_eq!(resolve("/admin/logs", &table), "Admin");
    }

    #[test]
    fn equivalent_paths_share_a_rule() {
        assert_eq!(resolve("/", &DEFAULT_ROUTES), "Survey Form");
        assert_eq!(resolve("/surveyform", &DEFAULT_ROUTES), "Survey Form");
    }

    #[test]
    fn failing_predicate_does_not_stop_later_rules() {
        let table = RouteTable::new()
            .with_rule(PathPattern::Custom(always_fails), "Never")
            .with_rule(PathPattern::Exact("/broken".into()), "Broken Screen");
        assert_eq!(resolve("/broken", &table), "Broken Screen");
    }

    #[test]
    fn empty_table_root_is_home() {
        assert_eq!(resolve("/", &RouteTable::new()), "Home");
    }

    #[test]
    fn unmatched_path_derives_from_last_segment() {
        let table = RouteTable::new();
        assert_eq!(resolve("/admin/response-details", &table), "Response details");
        assert_eq!(resolve("/user_settings", &table), "User settings");
        assert_eq!(resolve("/reports", &table), "Reports");
    }

    #[test]
    fn derivation_keeps_rest_of_segment_untouched() {
        // Only the first character is uppercased; later words stay as-is.
        assert_eq!(derive_title("/audit-log-entries"), "Audit log entries");
        assert_eq!(derive_title("/API-keys"), "API keys");
    }

    #[test]
    fn derived_titles_are_never_empty() {
        for path in ["/", "//", "/a", "/a/b-c", "/x_y/"] {
            assert!(!derive_title(path).is_empty(), "empty title for {path}");
        }
    }

    #[test]
    fn document_title_combines_prefix() {
        assert_eq!(document_title("Survey Admin", "Audit Logs"), "Survey Admin - Audit Logs");
        assert_eq!(document_title("Survey Admin", ""), "Survey Admin");
    }

    #[test]
    fn normalize_forms() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("///"), "/");
        assert_eq!(normalize("admin/logs"), "/admin/logs");
        assert_eq!(normalize("/admin/logs/"), "/admin/logs");
        assert_eq!(normalize("  /admin "), "/admin");
        assert_eq!(normalize("/admin/logs?page=2"), "/admin/logs");
        assert_eq!(normalize("/admin/logs#top"), "/admin/logs");
    }
}
