//! # Movies Architecture
//!
//! Movies is a small personal movie database: a collection of titles with a
//! release year and a rating, plus the usual things one does with it (list,
//! add, delete, update, search, sort, filter, stats, a random pick and a
//! rating histogram).
//!
//! The crate is a library with a menu-driven terminal client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, input validation, colored output     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, applies configuration         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - MovieStore trait                                         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments and returns
//! `Result<CmdResult>`. It never reads stdin, never writes stdout and never
//! exits the process. Files are written only by the store and by
//! [`chart::save_png`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Movie` and the ordered `MovieCollection`
//! - [`fuzzy`]: Approximate title matching for search suggestions
//! - [`chart`]: Rating histogram binning and PNG output
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod chart;
pub mod commands;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod model;
pub mod store;
