//! Route rules and the ordered route table.
//!
//! A table is a flat, immutable list of `(pattern, title)` pairs walked in
//! declaration order; the first matching rule wins. This is tagged dispatch,
//! not a type hierarchy: adding a pattern kind means adding an enum variant.
//!
//! Rule evaluation is defensive: a custom predicate may fail, and a failing
//! predicate reads as "did not match" for that rule only. Resolution never
//! propagates a predicate error; see [`RouteRule::matches`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error raised by a custom path predicate.
///
/// Never escapes the table walk: [`RouteRule::matches`] collapses it to a
/// miss so one malformed predicate cannot break title resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchError(pub String);

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "predicate failed: {}", self.0)
    }
}

impl std::error::Error for MatchError {}

/// A caller-supplied path predicate. May fail; see [`MatchError`].
pub type Predicate = fn(&str) -> Result<bool, MatchError>;

#[derive(Debug, Clone)]
pub enum PathPattern {
    /// Matches the path exactly.
    Exact(String),
    /// Matches the path and everything below it.
    Prefix(String),
    /// Matches any of a fixed set of paths (equivalent screens).
    AnyOf(Vec<String>),
    /// Arbitrary predicate, code-only (not representable in config files).
    Custom(Predicate),
}

impl PathPattern {
    fn try_matches(&self, path: &str) -> Result<bool, MatchError> {
        match self {
            PathPattern::Exact(p) => Ok(path == p),
            PathPattern::Prefix(p) => Ok(path.starts_with(p.as_str())),
            PathPattern::AnyOf(ps) => Ok(ps.iter().any(|p| p == path)),
            PathPattern::Custom(predicate) => predicate(path),
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Exact(p) => write!(f, "{}", p),
            PathPattern::Prefix(p) => write!(f, "{}*", p),
            PathPattern::AnyOf(ps) => write!(f, "{}", ps.join(" | ")),
            PathPattern::Custom(_) => write!(f, "<custom>"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteRule {
    pub pattern: PathPattern,
    pub title: String,
}

impl RouteRule {
    pub fn new(pattern: PathPattern, title: impl Into<String>) -> Self {
        Self {
            pattern,
            title: title.into(),
        }
    }

    /// Defensive evaluation: a predicate error counts as a miss.
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.try_matches(path).unwrap_or(false)
    }
}

/// An ordered, first-match-wins route table. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, pattern: PathPattern, title: impl Into<String>) -> Self {
        self.rules.push(RouteRule::new(pattern, title));
        self
    }

    pub fn from_specs(specs: &[RouteSpec]) -> Self {
        Self {
            rules: specs.iter().map(RouteSpec::to_rule).collect(),
        }
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Static health check of the table: rules that can never fire because
    /// an earlier rule always claims their paths, and rules with no title.
    ///
    /// Custom predicates are opaque and are never reported (neither as
    /// shadowed nor as shadowing).
    pub fn lint(&self) -> TableReport {
        let mut report = TableReport::default();

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.title.trim().is_empty() {
                report.untitled.push(index);
            }

            let earlier = &self.rules[..index];
            let shadowed_by = match &rule.pattern {
                PathPattern::Exact(p) => first_claiming(earlier, p),
                PathPattern::AnyOf(ps) => {
                    if !ps.is_empty() && ps.iter().all(|p| first_claiming(earlier, p).is_some()) {
                        // Report against the rule claiming the first alias.
                        ps.first().and_then(|p| first_claiming(earlier, p))
                    } else {
                        None
                    }
                }
                // An exact rule only takes one path away from a prefix, so
                // only a broader prefix can make a prefix rule unreachable.
                PathPattern::Prefix(p) => earlier.iter().position(|candidate| {
                    matches!(&candidate.pattern, PathPattern::Prefix(q) if p.starts_with(q.as_str()))
                }),
                PathPattern::Custom(_) => None,
            };

            if let Some(by) = shadowed_by {
                report.shadowed.push(ShadowedRule {
                    index,
                    pattern: rule.pattern.to_string(),
                    by,
                });
            }
        }

        report
    }
}

fn first_claiming(rules: &[RouteRule], path: &str) -> Option<usize> {
    rules
        .iter()
        .position(|rule| !matches!(rule.pattern, PathPattern::Custom(_)) && rule.matches(path))
}

/// Outcome of [`RouteTable::lint`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TableReport {
    pub shadowed: Vec<ShadowedRule>,
    pub untitled: Vec<usize>,
}

impl TableReport {
    pub fn is_clean(&self) -> bool {
        self.shadowed.is_empty() && self.untitled.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedRule {
    pub index: usize,
    pub pattern: String,
    pub by: usize,
}

/// Serializable projection of a rule for config files.
///
/// `Custom` predicates have no config form; tables loaded from disk are
/// built from these three kinds only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match", rename_all = "snake_case")]
pub enum RouteSpec {
    Exact { path: String, title: String },
    Prefix { path: String, title: String },
    AnyOf { paths: Vec<String>, title: String },
}

impl RouteSpec {
    pub fn to_rule(&self) -> RouteRule {
        match self {
            RouteSpec::Exact { path, title } => {
                RouteRule::new(PathPattern::Exact(path.clone()), title.clone())
            }
            RouteSpec::Prefix { path, title } => {
                RouteRule::new(PathPattern::Prefix(path.clone()), title.clone())
            }
            RouteSpec::AnyOf { paths, title } => {
                RouteRule::new(PathPattern::AnyOf(paths.clone()), title.clone())
            }
        }
    }
}

/// Built-in table for the survey console surfaces. A non-empty `routes`
/// list in config replaces it wholesale.
pub static DEFAULT_ROUTES: Lazy<RouteTable> = Lazy::new(|| {
    RouteTable::new()
        .with_rule(
            PathPattern::AnyOf(vec!["/".into(), "/surveyform".into()]),
            "Survey Form",
        )
        .with_rule(PathPattern::Exact("/thankyou".into()), "Thank You")
        .with_rule(PathPattern::Exact("/admin".into()), "Admin Dashboard")
        .with_rule(PathPattern::Prefix("/admin/logs".into()), "Audit Logs")
        .with_rule(PathPattern::Prefix("/admin/surveys".into()), "Surveys")
        .with_rule(PathPattern::Prefix("/admin/users".into()), "Users")
});
