//! Heuristic detection of how a sample note is laid out.
//!
//! Both detectors scan line starts in a fixed priority order — hashtag,
//! numbered, dash — and the first pattern found anywhere in the sample
//! labels the whole document. There is no scoring across lines.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::format::{NoteFormat, ProblemListFormat};

static HASHTAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#").expect("hashtag pattern is valid"));

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\.").expect("numbered pattern is valid"));

static DASH_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- ").expect("dash pattern is valid"));

/// Line-start convention shared by both vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineMarker {
    Hashtag,
    Numbered,
    Dash,
    None,
}

fn first_marker(sample: &str) -> LineMarker {
    if HASHTAG_LINE.is_match(sample) {
        LineMarker::Hashtag
    } else if NUMBERED_LINE.is_match(sample) {
        LineMarker::Numbered
    } else if DASH_LINE.is_match(sample) {
        LineMarker::Dash
    } else {
        LineMarker::None
    }
}

/// Classify the overall note layout of `sample`.
pub fn detect_note_format(sample: &str) -> NoteFormat {
    match first_marker(sample) {
        LineMarker::Hashtag => NoteFormat::Hashtags,
        LineMarker::Numbered => NoteFormat::NumberedList,
        LineMarker::Dash => NoteFormat::BulletPoints,
        LineMarker::None => NoteFormat::PlainText,
    }
}

/// Classify the problem list convention of `sample`.
pub fn detect_problem_list_format(sample: &str) -> ProblemListFormat {
    match first_marker(sample) {
        LineMarker::Hashtag => ProblemListFormat::Hashtags,
        LineMarker::Numbered => ProblemListFormat::NumberedList,
        LineMarker::Dash => ProblemListFormat::Dashes,
        LineMarker::None => ProblemListFormat::PlainText,
    }
}
