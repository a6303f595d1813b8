//! Error types for anotis

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for anotis application
#[derive(Debug, Error)]
pub enum AnotisError {
    #[error("Cannot create notes directory {path}: {source}")]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot read note file {path}: {source}")]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write note file {path}: {source}")]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Note title cannot be empty")]
    EmptyTitle,

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Notes not loaded yet")]
    NotInitialized,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AnotisError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AnotisError::NotInitialized => 2,
            AnotisError::EmptyTitle => 3,
            AnotisError::NotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            AnotisError::EmptyTitle => "Note title cannot be empty\n\n\
                Suggestions:\n\
                • Provide a non-empty title (whitespace-only titles are rejected)\n\
                • Example: anotis save 'shopping list' --content 'milk, eggs'"
                .to_string(),
            AnotisError::NotFound(title) => {
                format!(
                    "Note not found: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'anotis list' to see available notes\n\
                    • Titles are matched exactly, including case\n\
                    • Titles with special characters are stored under their sanitized name \
                    (e.g. 'A/B' becomes 'A_B')",
                    title
                )
            }
            AnotisError::Storage { path, .. } => {
                format!(
                    "Cannot create notes directory: {}\n\n\
                    Suggestions:\n\
                    • Check that the parent directory is writable\n\
                    • Point ANOTIS_NOTES_DIR at a writable location\n\
                    • Configure a different directory: anotis config notes_dir <path>",
                    path.display()
                )
            }
            AnotisError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: anotis config editor 'vim'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using AnotisError
pub type Result<T> = std::result::Result<T, AnotisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_suggestions() {
        let err = AnotisError::NotFound("groceries".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("groceries"));
        assert!(msg.contains("anotis list"));
        assert!(msg.contains("sanitized"));
    }

    #[test]
    fn test_empty_title_suggestions() {
        let err = AnotisError::EmptyTitle;
        let msg = err.display_with_suggestions();
        assert!(msg.contains("non-empty title"));
        assert!(msg.contains("anotis save"));
    }

    #[test]
    fn test_storage_error_suggestions() {
        let err = AnotisError::Storage {
            path: PathBuf::from("/tmp/notes"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/notes"));
        assert!(msg.contains("ANOTIS_NOTES_DIR"));
    }

    #[test]
    fn test_editor_error_suggestions() {
        let err = AnotisError::Editor("Editor not found".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("EDITOR environment variable"));
        assert!(msg.contains("anotis config editor"));
        assert!(msg.contains("PATH"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = AnotisError::Config("bad key".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: bad key");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AnotisError::NotInitialized.exit_code(), 2);
        assert_eq!(AnotisError::EmptyTitle.exit_code(), 3);
        assert_eq!(AnotisError::NotFound("x".to_string()).exit_code(), 4);
        assert_eq!(AnotisError::Config("x".to_string()).exit_code(), 1);
    }
}
