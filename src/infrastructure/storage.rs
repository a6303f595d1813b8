//! File system storage for notes

use crate::domain::Note;
use crate::error::{AnotisError, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension used for note files
pub const NOTE_EXTENSION: &str = "txt";

/// Characters that are illegal in filenames on at least one supported
/// platform (Windows reserved punctuation plus path separators).
const ILLEGAL_FILENAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Derive the filename for a note title: every illegal character becomes
/// an underscore, then the note extension is appended.
///
/// This is deterministic and pure. Distinct titles that differ only in
/// illegal characters map to the same filename; callers inherit that
/// collision (last write wins).
pub fn sanitize_filename(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| {
            if ILLEGAL_FILENAME_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    format!("{}.{}", cleaned, NOTE_EXTENSION)
}

/// File-level operations on the notes directory.
///
/// Translates between note identity/content and a flat directory of
/// plain-text files. Holds no note state; the repository owns that.
#[derive(Debug, Clone)]
pub struct NoteStorage {
    dir: PathBuf,
}

impl NoteStorage {
    /// Create storage rooted at the given notes directory
    pub fn new(dir: PathBuf) -> Self {
        NoteStorage { dir }
    }

    /// The notes directory this storage operates on
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path a note with this title is stored at
    pub fn note_path(&self, title: &str) -> PathBuf {
        self.dir.join(sanitize_filename(title))
    }

    /// Create the notes directory if it does not exist. Idempotent.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| AnotisError::Storage {
            path: self.dir.clone(),
            source,
        })
    }

    /// List all note files in the directory. Order is unspecified;
    /// callers sort. Files without the note extension are ignored.
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) == Some(NOTE_EXTENSION) {
                files.push(path);
            }
        }

        Ok(files)
    }

    /// Read one note file: title from the file stem, creation timestamp
    /// from file metadata, content verbatim.
    pub fn read_note(&self, path: &Path) -> Result<Note> {
        let load_err = |source: std::io::Error| AnotisError::Load {
            path: path.to_path_buf(),
            source,
        };

        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| {
                load_err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "file has no stem",
                ))
            })?;

        let metadata = fs::metadata(path).map_err(load_err)?;
        // Creation time is unsupported on some filesystems; fall back to
        // the modification time there.
        let created = metadata
            .created()
            .or_else(|_| metadata.modified())
            .map_err(load_err)?;
        let created_at: DateTime<Utc> = created.into();

        let content = fs::read_to_string(path).map_err(load_err)?;

        Ok(Note::new(title, created_at, content))
    }

    /// Write (create or overwrite) the note file for this title with the
    /// given content, verbatim. Returns the path written.
    pub fn write_note(&self, title: &str, content: &str) -> Result<PathBuf> {
        let path = self.note_path(title);

        fs::write(&path, content).map_err(|source| AnotisError::Save {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Remove the note file for this title. A missing file is not an error.
    pub fn delete_file(&self, title: &str) -> Result<()> {
        let path = self.note_path(title);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AnotisError::Io(e)),
        }
    }
}
