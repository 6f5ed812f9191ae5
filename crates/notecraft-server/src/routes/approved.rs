use axum::extract::State;
use axum::Json;
use serde::Serialize;

use notecraft_core::error::CoreError;
use notecraft_core::models::note::ApprovedNote;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ApproveResponse {
    pub saved: bool,
}

/// Append an edited note to the approved-notes file.
pub async fn approve(
    State(state): State<AppState>,
    Json(note): Json<ApprovedNote>,
) -> Result<Json<ApproveResponse>, ApiError> {
    if note.text.trim().is_empty() {
        return Err(CoreError::MissingField("text".to_string()).into());
    }
    state.approved.append(note.kind, &note.text).await?;
    Ok(Json(ApproveResponse { saved: true }))
}

pub async fn list_approved(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApprovedNote>>, ApiError> {
    let notes = state.approved.read_all().await?;
    Ok(Json(notes))
}
