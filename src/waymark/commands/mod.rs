use crate::config::WaymarkConfig;
use crate::error::{Result, WaymarkError};
use crate::model::{Record, ResolvedTitle, Scope};
use crate::routes::RouteRule;
use std::path::PathBuf;

pub mod config;
pub mod doctor;
pub mod filter;
pub mod init;
pub mod resolve;
pub mod routes;

#[derive(Debug, Clone)]
pub struct WaymarkPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl WaymarkPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| WaymarkError::Api("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command. The CLI renders it; the library never
/// prints. `total_records` always carries the pre-filter count so callers
/// can distinguish an empty dataset from an empty match set.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub resolved: Vec<ResolvedTitle>,
    pub listed_records: Vec<Record>,
    pub total_records: usize,
    pub routes: Vec<RouteRule>,
    pub config: Option<WaymarkConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_resolved(mut self, resolved: Vec<ResolvedTitle>) -> Self {
        self.resolved = resolved;
        self
    }

    pub fn with_records(mut self, records: Vec<Record>, total: usize) -> Self {
        self.listed_records = records;
        self.total_records = total;
        self
    }

    pub fn with_routes(mut self, routes: Vec<RouteRule>) -> Self {
        self.routes = routes;
        self
    }

    pub fn with_config(mut self, config: WaymarkConfig) -> Self {
        self.config = Some(config);
        self
    }
}
