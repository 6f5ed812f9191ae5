use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::format::{NoteFormat, ProblemListFormat};
use super::token_count::TokenCount;
use crate::detect::{detect_note_format, detect_problem_list_format};
use crate::error::CoreError;
use crate::instruction::compose_instruction;

/// Which workflow produced a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NoteKind {
    Generated,
    Reformatted,
    NextDayProgress,
}

impl NoteKind {
    /// Section tag written in front of an approved note.
    pub fn tag(self) -> &'static str {
        match self {
            NoteKind::Generated => "MAIN AI-GENERATED NOTE",
            NoteKind::Reformatted => "REFORMATTED NOTE",
            NoteKind::NextDayProgress => "NEXT-DAY PROGRESS NOTE",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        [
            NoteKind::Generated,
            NoteKind::Reformatted,
            NoteKind::NextDayProgress,
        ]
        .into_iter()
        .find(|kind| kind.tag() == tag)
    }
}

/// User choices that feed the instruction composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstructionSettings {
    pub note_format: NoteFormat,
    pub problem_list_format: ProblemListFormat,
    #[serde(default)]
    pub use_icd10: bool,
    #[serde(default)]
    pub include_qol: bool,
    #[serde(default)]
    pub custom_instruction: String,
}

impl InstructionSettings {
    pub fn compose(&self) -> String {
        compose_instruction(
            self.note_format,
            self.problem_list_format,
            self.use_icd10,
            self.include_qol,
            &self.custom_instruction,
        )
    }
}

/// Request to draft a new note for a case in the style of the examples.
///
/// `note_format` and `problem_list_format` override detection when set.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenerateNoteRequest {
    pub example_notes: String,
    pub case_details: String,
    #[serde(default)]
    pub note_format: Option<NoteFormat>,
    #[serde(default)]
    pub problem_list_format: Option<ProblemListFormat>,
    #[serde(default)]
    pub use_icd10: bool,
    #[serde(default)]
    pub include_qol: bool,
    #[serde(default)]
    pub custom_instruction: String,
    #[serde(default)]
    pub model_id: Option<String>,
}

impl GenerateNoteRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("example_notes", &self.example_notes)?;
        require("case_details", &self.case_details)
    }

    /// Resolve overrides against the formats detected in the examples.
    pub fn settings(&self) -> InstructionSettings {
        InstructionSettings {
            note_format: self
                .note_format
                .unwrap_or_else(|| detect_note_format(&self.example_notes)),
            problem_list_format: self
                .problem_list_format
                .unwrap_or_else(|| detect_problem_list_format(&self.example_notes)),
            use_icd10: self.use_icd10,
            include_qol: self.include_qol,
            custom_instruction: self.custom_instruction.clone(),
        }
    }
}

/// Request to rewrite an existing note in the style of the examples.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertNoteRequest {
    pub example_notes: String,
    pub note: String,
    #[serde(default)]
    pub model_id: Option<String>,
}

impl ConvertNoteRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("example_notes", &self.example_notes)?;
        require("note", &self.note)
    }
}

/// Request to roll a progress note forward by one day.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressNoteRequest {
    pub example_notes: String,
    pub previous_note: String,
    #[serde(default)]
    pub model_id: Option<String>,
}

impl ProgressNoteRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("example_notes", &self.example_notes)?;
        require("previous_note", &self.previous_note)
    }
}

/// Text returned by the model for one workflow, before the user edits or
/// approves it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NoteDraft {
    pub kind: NoteKind,
    pub model_id: String,
    pub text: String,
    /// The composed formatting instruction; only set for generated notes.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub instruction: Option<String>,
    pub usage: TokenCount,
}

/// A note the user approved, as stored in the approved-notes file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApprovedNote {
    pub kind: NoteKind,
    pub text: String,
}

fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingField(field.to_string()));
    }
    Ok(())
}
