//! # Waymark Architecture
//!
//! Waymark is a **UI-agnostic console logic library**. It computes the two
//! things a navigation-driven admin surface keeps asking for (the page title
//! for the current path, and the subset of records matching a free-text
//! query) without ever touching a screen, a document title, or a network.
//!
//! The CLI binary is just one client. The same core could sit behind a web
//! view, a TUI, or a test harness.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Holds the active route table and searchable fields       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the core modules                │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core + Source Layer (title.rs, filter.rs, source/)         │
//! │  - resolve/derive/filter: pure functions, no side effects   │
//! │  - Abstract RecordSource trait                              │
//! │  - JsonFileSource (production), InMemorySource (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Pure Core, Effects at the Edge
//!
//! Title resolution and record filtering are referentially transparent:
//! the same path and table always produce the same title, the same records
//! and query always produce the same subset. Applying the title anywhere
//! (a terminal, a browser tab) is the caller's job. From `api.rs` inward,
//! code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! A second consequence: resolution never fails. A route rule with a
//! faulting predicate reads as "did not match" and the table keeps being
//! walked; see [`routes`] for the defensive evaluation contract.
//!
//! ## Testing Strategy
//!
//! 1. **Core + commands** (`title.rs`, `filter.rs`, `routes.rs`,
//!    `commands/*.rs`): thorough unit tests. This is where the lion's share
//!    of testing lives.
//! 2. **API** (`api.rs`): dispatch tests against `InMemorySource`, checking
//!    the right command runs with the right arguments, not the logic itself.
//! 3. **CLI** (`tests/`): end-to-end binary runs over temp directories.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`title`]: Path normalization and title resolution/derivation
//! - [`routes`]: Route rules, the ordered table, and the table lint
//! - [`filter`]: Case-insensitive any-field record filtering
//! - [`source`]: Record source abstraction and implementations
//! - [`model`]: Core data types (`Record`, `ResolvedTitle`, `Scope`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod routes;
pub mod source;
pub mod title;
