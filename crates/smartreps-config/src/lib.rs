//! Configuration loading for the smartreps dashboard.
//!
//! A single optional TOML file in the platform config directory. Missing
//! file, unreadable file, and unparsable file all fall back to defaults;
//! configuration problems never stop the app from starting.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// File name of the config file inside the platform config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Application configuration.
///
/// The backdrop itself is not tunable from here (its particle count,
/// colors and speeds are fixed internals); `background` only decides
/// whether the app mounts it at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether the animated backdrop is drawn behind the dashboard.
    pub background: bool,
    /// Override for where the session record is stored.
    pub session_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: true,
            session_path: None,
        }
    }
}

impl Config {
    /// Load from the platform config directory, defaulting on any problem.
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from an explicit path, defaulting on any problem.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|raw| toml::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

/// Path of the config file, `None` when no home directory resolves.
pub fn config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "smartreps")?;
    Some(dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.background);
        assert_eq!(config.session_path, None);
    }

    #[test]
    fn test_parse_explicit_values() {
        let config: Config = toml::from_str(
            "background = false\nsession_path = \"/tmp/session.json\"\n",
        )
        .unwrap();
        assert!(!config.background);
        assert_eq!(
            config.session_path,
            Some(PathBuf::from("/tmp/session.json"))
        );
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_path_uses_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/smartreps/config.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = std::env::temp_dir().join("smartreps_config_tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        std::fs::write(&path, "background = \"sideways\"").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }
}
