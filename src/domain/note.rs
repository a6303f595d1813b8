//! Note entity and recency ordering

use chrono::{DateTime, Utc};

/// A single note: one plain-text file on disk.
///
/// The title doubles as the unique key of the in-memory collection and as
/// the basis of the persisted filename. `created_at` comes from the file's
/// creation timestamp and never changes on edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub content: String,
}

impl Note {
    pub fn new(title: String, created_at: DateTime<Utc>, content: String) -> Self {
        Note {
            title,
            created_at,
            content,
        }
    }
}

/// Sort notes most recent first. The sort is stable: notes with equal
/// creation timestamps keep their current relative order.
pub fn sort_by_recency(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
