use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "waymark")]
#[command(about = "Route titles and record filtering for the survey console", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global (user-wide) configuration
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Records file to filter (JSON array of flat objects)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve page titles for one or more paths
    #[command(alias = "t")]
    Title {
        /// Paths to resolve (e.g. / /admin/logs)
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,

        /// Print the combined page title ("<prefix> - <title>")
        #[arg(long)]
        page: bool,
    },

    /// Filter records by a free-text query
    #[command(alias = "f")]
    Filter {
        /// Query matched case-insensitively against the searchable fields
        query: String,

        /// Comma-separated field override (default: configured fields)
        #[arg(short = 'F', long)]
        fields: Option<String>,
    },

    /// List the active route table
    #[command(alias = "r")]
    Routes,

    /// Check the route table for unreachable or untitled rules
    Doctor,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., title-prefix, fields, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create a config file with defaults in the current scope
    Init,
}
