use axum::Json;
use serde::{Deserialize, Serialize};

use notecraft_core::detect::{detect_note_format, detect_problem_list_format};
use notecraft_core::models::format::{NoteFormat, ProblemListFormat};
use notecraft_core::models::note::InstructionSettings;

#[derive(Deserialize)]
pub struct DetectRequest {
    pub sample: String,
}

#[derive(Serialize)]
pub struct DetectResponse {
    pub note_format: NoteFormat,
    pub problem_list_format: ProblemListFormat,
    /// Picker label for the problem list, e.g. "Dashes (- Diabetes)".
    pub problem_list_label: &'static str,
}

#[derive(Serialize)]
pub struct InstructionResponse {
    pub instruction: String,
}

/// Detect the note and problem list formats of a sample.
pub async fn detect(Json(req): Json<DetectRequest>) -> Json<DetectResponse> {
    let problem_list_format = detect_problem_list_format(&req.sample);
    Json(DetectResponse {
        note_format: detect_note_format(&req.sample),
        problem_list_format,
        problem_list_label: problem_list_format.example_label(),
    })
}

/// Preview the instruction that a generation request with these settings
/// would send.
pub async fn instruction(Json(settings): Json<InstructionSettings>) -> Json<InstructionResponse> {
    Json(InstructionResponse {
        instruction: settings.compose(),
    })
}
