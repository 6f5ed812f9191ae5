use axum::extract::State;
use axum::Json;

use notecraft_bedrock::notes;
use notecraft_core::models::note::{
    ConvertNoteRequest, GenerateNoteRequest, NoteDraft, ProgressNoteRequest,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Draft a new note for a case in the style of the example notes.
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateNoteRequest>,
) -> Result<Json<NoteDraft>, ApiError> {
    let model_id = req.model_id.as_deref().unwrap_or(&state.generate_model);
    let draft = notes::generate_note(&state.bedrock, model_id, &req).await?;
    Ok(Json(draft))
}

/// Rewrite an existing note in the style of the example notes.
pub async fn convert(
    State(state): State<AppState>,
    Json(req): Json<ConvertNoteRequest>,
) -> Result<Json<NoteDraft>, ApiError> {
    let model_id = req.model_id.as_deref().unwrap_or(&state.rewrite_model);
    let draft = notes::convert_note(&state.bedrock, model_id, &req).await?;
    Ok(Json(draft))
}

/// Roll a progress note forward to the next day.
pub async fn progress(
    State(state): State<AppState>,
    Json(req): Json<ProgressNoteRequest>,
) -> Result<Json<NoteDraft>, ApiError> {
    let model_id = req.model_id.as_deref().unwrap_or(&state.rewrite_model);
    let draft = notes::advance_progress_note(&state.bedrock, model_id, &req).await?;
    Ok(Json(draft))
}
