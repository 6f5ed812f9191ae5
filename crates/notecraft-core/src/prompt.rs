//! Few-shot conversations for the three note workflows.
//!
//! Every conversation follows the same shape: a persona system prompt, the
//! user's example notes, a canned assistant acknowledgement, a workflow
//! directive as a second system block, and finally the input to transform.

use crate::error::CoreError;
use crate::models::conversation::{ChatMessage, Conversation};
use crate::models::note::{
    ConvertNoteRequest, GenerateNoteRequest, InstructionSettings, ProgressNoteRequest,
};

const GENERATE_PERSONA: &str = "\
You are an AI medical reasoning agent that structures notes in the exact format a physician prefers. \
Analyze the user's example notes to determine that style.";

const CONVERT_PERSONA: &str = "You are an AI that rewrites medical notes to match a physician's style.";

const CONVERT_DIRECTIVE: &str = "\
Rewrite the following clinical note so it matches the example style. \
Incorporate bullet points, bold headers, or color emphasis ONLY if it appears in the example notes or is requested.";

const PROGRESS_PERSONA: &str =
    "You are an AI that updates daily progress notes while maintaining the same style.";

const PROGRESS_DIRECTIVE: &str = "\
Update this progress note as if one day has passed. \
Adjust vitals, labs, and treatments logically. \
Maintain the same style as the example notes.";

/// Build the conversation for drafting a new note from case details.
///
/// Returns the conversation together with the composed instruction so the
/// caller can echo it back.
pub fn generate_note_conversation(
    request: &GenerateNoteRequest,
) -> Result<(Conversation, String), CoreError> {
    request.validate()?;
    let settings = request.settings();
    let instruction = settings.compose();

    let conversation = Conversation {
        system: vec![GENERATE_PERSONA.to_string(), instruction.clone()],
        messages: vec![
            ChatMessage::user(labelled_examples(&settings, &request.example_notes)),
            ChatMessage::assistant("Understood. I have analyzed the example style."),
            ChatMessage::user(format!(
                "Now format this new case using the same style:\n{}",
                request.case_details
            )),
        ],
    };

    Ok((conversation, instruction))
}

/// Build the conversation for rewriting an existing note.
pub fn convert_note_conversation(request: &ConvertNoteRequest) -> Result<Conversation, CoreError> {
    request.validate()?;

    Ok(Conversation {
        system: vec![CONVERT_PERSONA.to_string(), CONVERT_DIRECTIVE.to_string()],
        messages: vec![
            ChatMessage::user(format!("Here is the example style:\n{}", request.example_notes)),
            ChatMessage::assistant("Style analysis complete. Ready to transform notes."),
            ChatMessage::user(format!(
                "Please convert this note to the style:\n{}",
                request.note
            )),
        ],
    })
}

/// Build the conversation for rolling a progress note forward one day.
pub fn progress_note_conversation(request: &ProgressNoteRequest) -> Result<Conversation, CoreError> {
    request.validate()?;

    Ok(Conversation {
        system: vec![PROGRESS_PERSONA.to_string(), PROGRESS_DIRECTIVE.to_string()],
        messages: vec![
            ChatMessage::user(format!("Here is the example style:\n{}", request.example_notes)),
            ChatMessage::assistant("Style analysis complete. Ready to update the note."),
            ChatMessage::user(format!(
                "Previous Progress Note:\n{}\n\nGenerate an updated version for the next day's progress note.",
                request.previous_note
            )),
        ],
    })
}

fn labelled_examples(settings: &InstructionSettings, examples: &str) -> String {
    format!(
        "Here is an example note style ({}, problem list: {}):\n{examples}",
        settings.note_format.label(),
        settings.problem_list_format.label(),
    )
}
