//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all waymark operations, regardless of the UI
//! being used.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Holds the active route table and searchable fields**, resolved once
//!   from configuration at construction time
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It explicitly avoids business logic (that belongs in `commands/*.rs`),
//! I/O, and presentation concerns.
//!
//! ## Generic Over RecordSource
//!
//! `WaymarkApi<S: RecordSource>` is generic over where records come from:
//! - Production: `WaymarkApi<JsonFileSource>`
//! - Testing: `WaymarkApi<InMemorySource>`
//!
//! API tests verify dispatch and argument plumbing, not the logic itself;
//! the command modules own that.

use crate::commands;
use crate::config::WaymarkConfig;
use crate::error::Result;
use crate::model::Scope;
use crate::routes::RouteTable;
use crate::source::RecordSource;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, WaymarkPaths};

/// The main API facade for waymark operations.
///
/// Generic over `RecordSource` to allow different record backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct WaymarkApi<S: RecordSource> {
    source: S,
    paths: WaymarkPaths,
    table: RouteTable,
    searchable_fields: Vec<String>,
}

impl<S: RecordSource> WaymarkApi<S> {
    pub fn new(source: S, paths: WaymarkPaths, config: &WaymarkConfig) -> Self {
        Self {
            source,
            paths,
            table: config.route_table(),
            searchable_fields: config.searchable_fields.clone(),
        }
    }

    pub fn resolve_titles<P: AsRef<str>>(&self, raw_paths: &[P]) -> Result<CmdResult> {
        let raw_paths: Vec<String> = raw_paths
            .iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        commands::resolve::run(&self.table, &raw_paths)
    }

    /// Filter the source's records by a free-text query. `fields` overrides
    /// the configured searchable fields for this call only.
    pub fn filter_records(&self, query: &str, fields: Option<Vec<String>>) -> Result<CmdResult> {
        let fields = fields.unwrap_or_else(|| self.searchable_fields.clone());
        commands::filter::run(&self.source, query, &fields)
    }

    pub fn list_routes(&self) -> Result<CmdResult> {
        commands::routes::run(&self.table)
    }

    pub fn doctor(&self) -> Result<CmdResult> {
        commands::doctor::run(&self.table)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<CmdResult> {
        commands::init::run(&self.paths, scope)
    }
}
