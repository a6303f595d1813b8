//! Note repository - in-memory collection synchronized with disk

use crate::domain::{sort_by_recency, Note};
use crate::error::{AnotisError, Result};
use crate::infrastructure::NoteStorage;
use log::warn;

/// The authoritative in-memory set of notes, kept consistent with the
/// notes directory through the storage layer.
///
/// A repository starts uninitialized; `load()` must run before any other
/// operation. After every successful save the whole collection is reloaded
/// from disk so creation timestamps and ordering always reflect the actual
/// filesystem state.
pub struct NoteRepository {
    storage: NoteStorage,
    notes: Vec<Note>,
    loaded: bool,
}

impl NoteRepository {
    /// Create a repository over the given storage. Call `load()` before use.
    pub fn new(storage: NoteStorage) -> Self {
        NoteRepository {
            storage,
            notes: Vec::new(),
            loaded: false,
        }
    }

    /// The storage this repository persists through
    pub fn storage(&self) -> &NoteStorage {
        &self.storage
    }

    /// Load (or reload) every note from disk.
    ///
    /// Clears the in-memory collection, creates the notes directory if
    /// missing, and reads every note file. A file that fails to read is
    /// logged and skipped; the load itself still succeeds.
    pub fn load(&mut self) -> Result<()> {
        self.notes.clear();
        self.loaded = false;

        self.storage.ensure_dir()?;

        for path in self.storage.list_files()? {
            match self.storage.read_note(&path) {
                Ok(note) => self.notes.push(note),
                Err(e) => warn!("Skipping unreadable note {}: {}", path.display(), e),
            }
        }

        self.loaded = true;
        Ok(())
    }

    /// All notes, most recent first. Ties on creation time keep load
    /// order. Returns a snapshot; mutating it does not affect the
    /// repository.
    pub fn list_notes(&self) -> Result<Vec<Note>> {
        self.require_loaded()?;

        let mut notes = self.notes.clone();
        sort_by_recency(&mut notes);
        Ok(notes)
    }

    /// Save a note, creating or overwriting its file.
    ///
    /// `previous_title` marks edit mode: when it differs from the new
    /// (trimmed) title the old file is deleted first, so a rename never
    /// leaves the note behind under both names. A write failure leaves the
    /// in-memory collection unchanged. On success the collection is
    /// reloaded from disk and the saved title is returned.
    pub fn save(
        &mut self,
        title: &str,
        content: &str,
        previous_title: Option<&str>,
    ) -> Result<String> {
        self.require_loaded()?;

        let title = title.trim();
        if title.is_empty() {
            return Err(AnotisError::EmptyTitle);
        }

        if let Some(previous) = previous_title {
            if previous != title {
                // Best effort: a missing old file is fine, and a failed
                // cleanup must not block saving under the new title.
                if let Err(e) = self.storage.delete_file(previous) {
                    warn!("Could not remove old note file for '{}': {}", previous, e);
                }
            }
        }

        self.storage.write_note(title, content)?;

        self.load()?;

        Ok(title.to_string())
    }

    /// Delete a note by exact title, from disk and from memory
    pub fn delete(&mut self, title: &str) -> Result<()> {
        self.require_loaded()?;

        let position = self
            .notes
            .iter()
            .position(|n| n.title == title)
            .ok_or_else(|| AnotisError::NotFound(title.to_string()))?;

        self.storage.delete_file(title)?;
        self.notes.remove(position);

        Ok(())
    }

    /// Look up a note by exact title
    pub fn get_by_title(&self, title: &str) -> Result<&Note> {
        self.require_loaded()?;

        self.notes
            .iter()
            .find(|n| n.title == title)
            .ok_or_else(|| AnotisError::NotFound(title.to_string()))
    }

    fn require_loaded(&self) -> Result<()> {
        if self.loaded {
            Ok(())
        } else {
            Err(AnotisError::NotInitialized)
        }
    }
}
