//! Directory HTTP Protocol
//!
//! Endpoint paths and the request/response bodies exchanged with clients.

use crate::search::types::Record;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Fuzzy search over all records.
pub const ENDPOINT_SEARCH: &str = "/s";
/// Submission of a new record.
pub const ENDPOINT_ADD: &str = "/add";

pub const ADD_SUCCESS_MESSAGE: &str = "Data added successfully";

// --- Data Transfer Objects ---

/// Body of `POST /add`.
///
/// Every field is optional at the wire level so a missing value can be
/// reported as a validation error instead of a deserialization failure.
/// Fields the client may send but never controls (`id`, `cortype`) are not
/// read at all.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AddRequest {
    pub domain: Option<String>,
    pub apptitle: Option<String>,
    pub appdescription: Option<String>,
    pub by: Option<String>,
    pub icon: Option<String>,
}

/// Successful reply to `POST /add`, echoing the stored record.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddResponse {
    pub message: String,
    pub item: Record,
}
