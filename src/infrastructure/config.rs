//! Configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_notes_dir")]
    pub notes_dir: PathBuf,
    #[serde(default = "detect_default_editor")]
    pub editor: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notes_dir: default_notes_dir(),
            editor: detect_default_editor(),
        }
    }
}

impl Config {
    /// Load config from config.toml, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Save config to config.toml, creating the config directory if needed
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;

        Ok(())
    }

    /// Location of config.toml. ANOTIS_CONFIG_DIR overrides the platform
    /// config directory.
    pub fn config_path() -> PathBuf {
        let base = std::env::var_os("ANOTIS_CONFIG_DIR")
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("anotis").join("config.toml")
    }

    /// The effective notes directory. ANOTIS_NOTES_DIR overrides the
    /// configured value.
    pub fn notes_dir(&self) -> PathBuf {
        std::env::var_os("ANOTIS_NOTES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| self.notes_dir.clone())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }
}

/// Default notes directory: `Anotis` under the user's documents folder
fn default_notes_dir() -> PathBuf {
    dirs::document_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Anotis")
}

/// Detect default editor from environment or system
fn detect_default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.notes_dir.ends_with("Anotis"));
        assert!(!config.editor.is_empty());
    }

    #[test]
    fn test_save_and_load_config() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("ANOTIS_CONFIG_DIR");

        let temp = TempDir::new().unwrap();
        std::env::set_var("ANOTIS_CONFIG_DIR", temp.path());

        let config = Config {
            notes_dir: PathBuf::from("/tmp/my-notes"),
            editor: "vim".to_string(),
        };
        config.save().unwrap();

        assert!(temp.path().join("anotis/config.toml").exists());

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.notes_dir, config.notes_dir);
        assert_eq!(loaded.editor, config.editor);
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("ANOTIS_CONFIG_DIR");

        let temp = TempDir::new().unwrap();
        std::env::set_var("ANOTIS_CONFIG_DIR", temp.path());

        let loaded = Config::load().unwrap();
        assert!(loaded.notes_dir.ends_with("Anotis"));
    }

    #[test]
    fn test_notes_dir_env_override() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("ANOTIS_NOTES_DIR");

        let config = Config::default();

        std::env::set_var("ANOTIS_NOTES_DIR", "/tmp/override-notes");
        assert_eq!(config.notes_dir(), PathBuf::from("/tmp/override-notes"));

        std::env::remove_var("ANOTIS_NOTES_DIR");
        assert_eq!(config.notes_dir(), config.notes_dir);
    }

    #[test]
    fn test_get_editor_not_empty() {
        let config = Config::default();
        assert!(!config.get_editor().is_empty());
    }
}
