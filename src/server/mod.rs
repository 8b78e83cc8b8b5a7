//! HTTP Server Module
//!
//! Assembles the public router: search and submission endpoints, shared
//! state, and the permissive CORS policy every response carries.

pub mod cors;

use crate::search::engine::DEFAULT_THRESHOLD;
use crate::search::handlers::handle_search;
use crate::storage::handlers::handle_add;
use crate::storage::protocol::{ENDPOINT_ADD, ENDPOINT_SEARCH};
use crate::storage::store::RecordStore;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub threshold: f64,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_threshold(store, DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(store: Arc<dyn RecordStore>, threshold: f64) -> Self {
        Self { store, threshold }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            ENDPOINT_SEARCH,
            get(handle_search).options(cors::handle_preflight),
        )
        .route(
            ENDPOINT_ADD,
            post(handle_add).options(cors::handle_preflight),
        )
        .layer(middleware::from_fn(cors::allow_any_origin))
        .with_state(state)
}

#[cfg(test)]
mod tests;
