use aws_sdk_bedrockruntime::Client;
use tracing::info;
use uuid::Uuid;

use notecraft_core::models::note::{
    ConvertNoteRequest, GenerateNoteRequest, NoteDraft, NoteKind, ProgressNoteRequest,
};
use notecraft_core::prompt;

use crate::chat::{self, InferenceSettings};
use crate::error::BedrockError;

/// Default model for drafting new notes.
pub const DEFAULT_GENERATE_MODEL: &str = "us.anthropic.claude-3-5-haiku-20241022-v1:0";

/// Default model for rewriting and progressing existing notes.
pub const DEFAULT_REWRITE_MODEL: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Draft a new note for the case in the style of the example notes.
pub async fn generate_note(
    client: &Client,
    model_id: &str,
    request: &GenerateNoteRequest,
) -> Result<NoteDraft, BedrockError> {
    let (conversation, instruction) = prompt::generate_note_conversation(request)?;

    let run_id = Uuid::new_v4();
    info!(run_id = %run_id, model = model_id, "starting note generation");

    let reply = chat::converse(client, model_id, &conversation, InferenceSettings::default()).await?;

    info!(run_id = %run_id, "note generation complete");

    Ok(NoteDraft {
        kind: NoteKind::Generated,
        model_id: model_id.to_string(),
        text: reply.text,
        instruction: Some(instruction),
        usage: reply.usage,
    })
}

/// Rewrite an existing note in the style of the example notes.
pub async fn convert_note(
    client: &Client,
    model_id: &str,
    request: &ConvertNoteRequest,
) -> Result<NoteDraft, BedrockError> {
    let conversation = prompt::convert_note_conversation(request)?;

    let run_id = Uuid::new_v4();
    info!(run_id = %run_id, model = model_id, "starting note conversion");

    let reply = chat::converse(client, model_id, &conversation, InferenceSettings::default()).await?;

    info!(run_id = %run_id, "note conversion complete");

    Ok(NoteDraft {
        kind: NoteKind::Reformatted,
        model_id: model_id.to_string(),
        text: reply.text,
        instruction: None,
        usage: reply.usage,
    })
}

/// Produce the next day's version of a progress note.
pub async fn advance_progress_note(
    client: &Client,
    model_id: &str,
    request: &ProgressNoteRequest,
) -> Result<NoteDraft, BedrockError> {
    let conversation = prompt::progress_note_conversation(request)?;

    let run_id = Uuid::new_v4();
    info!(run_id = %run_id, model = model_id, "starting progress note update");

    let reply = chat::converse(client, model_id, &conversation, InferenceSettings::default()).await?;

    info!(run_id = %run_id, "progress note update complete");

    Ok(NoteDraft {
        kind: NoteKind::NextDayProgress,
        model_id: model_id.to_string(),
        text: reply.text,
        instruction: None,
        usage: reply.usage,
    })
}
