//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! the columns to seed, how placeholder items are generated, the theme and
//! the hotkey bindings.

mod error;
pub mod hotkeys;

pub use error::ConfigError;

use crate::board::{ColumnSeed, Placeholder};
use crate::error::AppError;
use hotkeys::ModeHotkeys;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/dnd-board";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub placeholder: Placeholder,
    pub seed: u64,
    pub columns: Vec<ColumnSeed>,
    pub hotkeys: ModeHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub placeholder: Placeholder,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_columns")]
    pub columns: Vec<ColumnSeed>,
    #[serde(default)]
    pub hotkeys: ModeHotkeys,
}

fn default_theme_name() -> String {
    "classic".to_string()
}

fn default_seed() -> u64 {
    42
}

fn default_columns() -> Vec<ColumnSeed> {
    vec![
        ColumnSeed::new("primary", "Items", 5),
        ColumnSeed::new("secondary", "Selected", 5),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            placeholder: Placeholder::default(),
            seed: default_seed(),
            columns: default_columns(),
            hotkeys: ModeHotkeys::default(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
            self.placeholder = data.placeholder;
            self.seed = data.seed;
            self.columns = data.columns;
            self.hotkeys = data.hotkeys;
        }
        self.file_path = Some(file_path);

        Ok(())
    }

    /// Path of the configuration file, once `load` has resolved it.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Attempt to serialize the configuration data and write it to the disk,
    /// creating the directory when needed.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            placeholder: self.placeholder,
            seed: self.seed,
            columns: self.columns.clone(),
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
