use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The list/paragraph convention of a clinical note.
///
/// Deserializes from either the snake_case wire name or the label shown in
/// the form (`"Bullet Points"`). `"Paragraph"` is accepted for plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NoteFormat {
    #[serde(alias = "Numbered List")]
    NumberedList,
    #[serde(alias = "Bullet Points")]
    BulletPoints,
    #[serde(alias = "Hashtags")]
    Hashtags,
    #[serde(alias = "Plain Text", alias = "Paragraph", alias = "paragraph")]
    PlainText,
}

impl NoteFormat {
    pub const ALL: [NoteFormat; 4] = [
        NoteFormat::NumberedList,
        NoteFormat::BulletPoints,
        NoteFormat::Hashtags,
        NoteFormat::PlainText,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NoteFormat::NumberedList => "Numbered List",
            NoteFormat::BulletPoints => "Bullet Points",
            NoteFormat::Hashtags => "Hashtags",
            NoteFormat::PlainText => "Plain Text",
        }
    }

    /// Lowercase phrase used inside instruction sentences.
    pub fn phrase(self) -> &'static str {
        match self {
            NoteFormat::NumberedList => "numbered list",
            NoteFormat::BulletPoints => "bullet points",
            NoteFormat::Hashtags => "hashtags",
            NoteFormat::PlainText => "plain text",
        }
    }
}

impl fmt::Display for NoteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The convention used for the problem list section of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProblemListFormat {
    #[serde(alias = "Hashtags", alias = "Hashtags (#Diabetes)")]
    Hashtags,
    #[serde(alias = "Numbered List", alias = "Numbered List (1. Diabetes, 2. HTN)")]
    NumberedList,
    #[serde(alias = "Dashes", alias = "Dashes (- Diabetes)")]
    Dashes,
    #[serde(alias = "Plain Text")]
    PlainText,
}

impl ProblemListFormat {
    pub const ALL: [ProblemListFormat; 4] = [
        ProblemListFormat::Hashtags,
        ProblemListFormat::NumberedList,
        ProblemListFormat::Dashes,
        ProblemListFormat::PlainText,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProblemListFormat::Hashtags => "Hashtags",
            ProblemListFormat::NumberedList => "Numbered List",
            ProblemListFormat::Dashes => "Dashes",
            ProblemListFormat::PlainText => "Plain Text",
        }
    }

    /// Label with a short example, as offered in the format picker.
    pub fn example_label(self) -> &'static str {
        match self {
            ProblemListFormat::Hashtags => "Hashtags (#Diabetes)",
            ProblemListFormat::NumberedList => "Numbered List (1. Diabetes, 2. HTN)",
            ProblemListFormat::Dashes => "Dashes (- Diabetes)",
            ProblemListFormat::PlainText => "Plain Text",
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            ProblemListFormat::Hashtags => "hashtags",
            ProblemListFormat::NumberedList => "numbered list",
            ProblemListFormat::Dashes => "dashes",
            ProblemListFormat::PlainText => "plain text",
        }
    }
}

impl fmt::Display for ProblemListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
