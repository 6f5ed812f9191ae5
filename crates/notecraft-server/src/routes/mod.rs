pub mod approved;
pub mod format;
pub mod health;
pub mod notes;
