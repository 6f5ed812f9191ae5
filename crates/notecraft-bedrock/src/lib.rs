//! notecraft-bedrock
//!
//! Bedrock Converse invocation for the note workflows.

pub mod chat;
pub mod client;
pub mod error;
pub mod notes;
pub mod tokens;
