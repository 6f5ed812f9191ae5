//! notecraft-storage
//!
//! Local flat-file persistence for approved notes.

pub mod approved;
pub mod error;
