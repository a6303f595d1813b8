//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod storage;

pub use config::Config;
pub use editor::EditorSession;
pub use storage::{sanitize_filename, NoteStorage, NOTE_EXTENSION};
