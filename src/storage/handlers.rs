use super::protocol::{AddRequest, AddResponse, ADD_SUCCESS_MESSAGE};
use super::store::NewRecord;
use crate::error::ApiError;
use crate::server::AppState;
use axum::extract::State;
use axum::Json;

/// `POST /add`
///
/// Rejects the submission before touching the store when a required field
/// is missing. A body that is absent or not a JSON object counts as having
/// no fields. A failed write is reported as a server error.
pub async fn handle_add(
    State(state): State<AppState>,
    body: Option<Json<AddRequest>>,
) -> Result<Json<AddResponse>, ApiError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let new_record = NewRecord::try_from(req)?;
    let item = state.store.append(new_record).await?;

    Ok(Json(AddResponse {
        message: ADD_SUCCESS_MESSAGE.to_string(),
        item,
    }))
}
