use crate::error::{Result, WaymarkError};
use crate::routes::{RouteSpec, RouteTable, DEFAULT_ROUTES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TITLE_PREFIX: &str = "Survey Admin";
const DEFAULT_DATA_FILE: &str = "records.json";

/// Configuration for waymark, stored in .waymark/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaymarkConfig {
    /// Prefix combined with resolved titles into the page title
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,

    /// Record fields eligible for substring matching
    #[serde(default = "default_searchable_fields")]
    pub searchable_fields: Vec<String>,

    /// Default records file for the filter command
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Route table override; empty means the built-in table
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

fn default_title_prefix() -> String {
    DEFAULT_TITLE_PREFIX.to_string()
}

fn default_searchable_fields() -> Vec<String> {
    vec![
        "name".to_string(),
        "contact".to_string(),
        "action".to_string(),
    ]
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for WaymarkConfig {
    fn default() -> Self {
        Self {
            title_prefix: default_title_prefix(),
            searchable_fields: default_searchable_fields(),
            data_file: default_data_file(),
            routes: Vec::new(),
        }
    }
}

impl WaymarkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WaymarkError::Io)?;
        let config: WaymarkConfig =
            serde_json::from_str(&content).map_err(WaymarkError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WaymarkError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WaymarkError::Serialization)?;
        fs::write(config_path, content).map_err(WaymarkError::Io)?;
        Ok(())
    }

    /// The active route table: configured routes, or the built-in table
    /// when none are configured.
    pub fn route_table(&self) -> RouteTable {
        if self.routes.is_empty() {
            DEFAULT_ROUTES.clone()
        } else {
            RouteTable::from_specs(&self.routes)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "title-prefix" => Some(self.title_prefix.clone()),
            "fields" => Some(self.searchable_fields.join(",")),
            "data-file" => Some(self.data_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "title-prefix" => {
                if value.trim().is_empty() {
                    return Err("title-prefix cannot be empty".to_string());
                }
                self.title_prefix = value.trim().to_string();
                Ok(())
            }
            "fields" => {
                let fields: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .map(str::to_string)
                    .collect();
                if fields.is_empty() {
                    return Err("fields needs at least one field name".to_string());
                }
                self.searchable_fields = fields;
                Ok(())
            }
            "data-file" => {
                self.data_file = value.to_string();
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
