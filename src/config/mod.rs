//! Configuration management module.
//!
//! This module handles loading read-only application preferences, currently
//! just the theme selection. Nothing is ever written back to disk; the
//! application keeps no state across process lifetimes.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const LOG_FILE_NAME: &str = "storefront-tui.log";
const DEFAULT_DIRECTORY_PATH: &str = ".config/storefront-tui";

/// Oversees the configuration file and the paths derived from it.
///
#[derive(Clone)]
pub struct Config {
    pub theme_name: String,
    dir_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_theme_name() -> String {
    "storefront-dark".to_string()
}

impl Config {
    /// Return a new instance with the defaults in place.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            dir_path: None,
        }
    }

    /// Try to load existing preferences from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place;
    /// an unreadable or malformed file is an error.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };

        let file_path = dir_path.join(FILE_NAME);
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
        }

        self.dir_path = Some(dir_path);
        Ok(())
    }

    /// Return the path for the diagnostic log file inside the configuration
    /// directory.
    ///
    pub fn log_file_path(&self) -> Result<PathBuf, AppError> {
        match &self.dir_path {
            Some(dir) => Ok(dir.join(LOG_FILE_NAME)),
            None => Ok(Config::default_path()?.join(LOG_FILE_NAME)),
        }
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "storefront-dark");
    }

    #[test]
    fn test_load_reads_theme_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FILE_NAME), "theme_name: paper-light\n").unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "paper-light");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FILE_NAME), "theme_name: [not: a: string\n").unwrap();
        let mut config = Config::new();
        assert!(config.load(dir.path().to_str()).is_err());
    }

    #[test]
    fn test_log_file_path_uses_config_directory() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        let log_path = config.log_file_path().unwrap();
        assert_eq!(log_path, dir.path().join(LOG_FILE_NAME));
    }
}
