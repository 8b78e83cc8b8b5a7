//! Record Storage Module
//!
//! Owns the directory's record collection and the `POST /add` endpoint.
//!
//! ## Core Concepts
//! - **Snapshot reads**: `RecordStore::load_all` returns the whole collection; search never sees a partial view.
//! - **Single writer**: `append` serializes its read-modify-write cycle, so ids stay unique and dense.
//! - **Record assembly**: Submissions are validated into a `NewRecord`, then stamped with an id,
//!   default author, fixed `cortype` and a synthesized icon.

pub mod handlers;
pub mod icon;
pub mod protocol;
pub mod store;
