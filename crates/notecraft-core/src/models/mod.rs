pub mod conversation;
pub mod format;
pub mod note;
pub mod token_count;
