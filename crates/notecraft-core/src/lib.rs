//! notecraft-core
//!
//! Pure domain types, note-format detection, instruction composition and
//! conversation assembly. No AWS SDK dependency — this is the shared
//! vocabulary of the notecraft system.

pub mod detect;
pub mod error;
pub mod instruction;
pub mod models;
pub mod prompt;
