use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::config_dirs::{settings_path, user_theme_dir};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Demo settings; every field may be omitted from `settings.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// UI theme selected at startup; the first available theme when unset.
    pub ui_theme: Option<String>,
    /// `"auto"` or the name of a registered engine theme.
    pub plot_theme: String,
    pub marker: String,
    /// Streaming example interval in milliseconds.
    pub tick_ms: u64,
    /// Extra directories holding UI theme files.
    pub theme_dirs: Vec<PathBuf>,
    pub log_file: Option<PathBuf>,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui_theme: None,
            plot_theme: "auto".to_string(),
            marker: "braille".to_string(),
            tick_ms: 250,
            theme_dirs: Vec::new(),
            log_file: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Configured theme directories followed by the per-user theme directory.
    pub fn theme_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = self.theme_dirs.clone();
        dirs.extend(user_theme_dir());
        dirs
    }
}

/// Read settings from `path`; a missing file yields the defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&s).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read settings from the per-user configuration directory.
pub fn load_settings() -> Result<Settings, SettingsError> {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "marker = \"dot\"\n").unwrap();
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.marker, "dot");
        assert_eq!(settings.plot_theme, "auto");
        assert_eq!(settings.tick_ms, 250);
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn bad_toml_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "tick_ms = \"soon\"").unwrap();
        let err = load_settings_from(&path).unwrap_err();
        assert!(err.to_string().contains("settings.toml"));
    }
}
