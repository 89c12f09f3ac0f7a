use std::fmt;
use std::path::Path;

mod loader;
mod paths;

use crate::path::Separator;
use loader::ConfigLoader;
use paths::ConfigPaths;

/// Settings read from `~/.wshrc` (or the `--config` file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub separator: Separator,
    pub banner: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: Separator::default(),
            banner: true,
            color: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the rc file at `custom`, or `~/.wshrc` when none is given.
    /// A missing file leaves every setting at its default.
    pub fn load(custom: Option<&Path>) -> Result<Self, ConfigError> {
        let paths = match custom {
            Some(path) => ConfigPaths::with_rc(path),
            None => ConfigPaths::new()?,
        };

        let mut config = Config::new();
        ConfigLoader::new(&paths).load_configs(&mut config)?;
        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    ConfigFileNotFound(String),
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::InvalidValue { line, key, value } => write!(
                f,
                "line {}: invalid value '{}' for '{}'",
                line, value, key
            ),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
