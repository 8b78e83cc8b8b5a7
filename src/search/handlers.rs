use super::engine::SearchEngine;
use super::normalize::is_blank;
use super::types::{SearchParams, SearchResultItem};
use crate::error::ApiError;
use crate::server::AppState;
use axum::extract::{Query, State};
use axum::Json;

/// `GET /s?q=<query>`
///
/// Loads the current snapshot, ranks it, and returns every hit under the
/// threshold. A store that cannot be read is treated as empty.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResultItem>>, ApiError> {
    let query = match params.q {
        Some(q) if !is_blank(&q) => q,
        _ => return Err(ApiError::MissingQuery),
    };

    let records = match state.store.load_all().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to load records, searching an empty set: {}", e);
            Vec::new()
        }
    };

    let engine = SearchEngine::with_threshold(records, state.threshold);
    let results = engine
        .search(&query)
        .into_iter()
        .map(SearchResultItem::from)
        .collect();

    Ok(Json(results))
}
