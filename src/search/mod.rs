//! Search Module
//!
//! Typo-tolerant lookup over a snapshot of directory records.
//!
//! ## Overview
//! A query is matched against the `domain`, `apptitle`, `appdescription` and
//! `by` fields of every record. Each field gets a normalized edit distance
//! to the best-aligned window of its text; a record's score is its best
//! field. Records above the threshold are dropped and the rest are returned
//! best first.
//!
//! ## Submodules
//! - **`normalize`**: Case folding and whitespace cleanup applied to queries and fields.
//! - **`distance`**: Approximate substring edit distance and its `[0, 1]` normalization.
//! - **`engine`**: Per-snapshot engine, aggregation, filtering and ordering.
//! - **`handlers`**: The `GET /s` endpoint.
//! - **`types`**: Records, hits and wire DTOs.

pub mod distance;
pub mod engine;
pub mod handlers;
pub mod normalize;
pub mod types;
