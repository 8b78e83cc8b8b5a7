//! Site Directory Service Library
//!
//! A small registry of site records (domain, title, description, author)
//! searchable by approximate text match. The binary (`main.rs`) wires these
//! modules into an HTTP server.
//!
//! ## Modules
//! - **`search`**: The fuzzy search engine. Normalizes text, scores each record by its
//!   best-matching field with a substring-tolerant edit distance, filters by threshold
//!   and ranks what remains. Pure over the snapshot it is given.
//! - **`storage`**: The record store. Loads and appends records in a JSON file behind a
//!   single-writer lock and serves the submission endpoint.
//! - **`server`**: Router assembly, shared state and CORS.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: Typed store and API errors.

pub mod config;
pub mod error;
pub mod search;
pub mod server;
pub mod storage;
