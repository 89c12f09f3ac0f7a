use std::{fs, path::Path};

use super::{Config, ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load_configs(&self, config: &mut Config) -> Result<(), ConfigError> {
        let rc_path = &self.paths.rc_path;
        if self.paths.explicit && !rc_path.exists() {
            return Err(ConfigError::ConfigFileNotFound(
                rc_path.to_string_lossy().into_owned(),
            ));
        }
        self.source_if_exists(rc_path, config)
    }

    fn source_if_exists(&self, path: &Path, config: &mut Config) -> Result<(), ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            for (index, line) in content.lines().enumerate() {
                self.process_line(index + 1, line, config)?;
            }
        }
        Ok(())
    }

    fn process_line(&self, number: usize, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let Some((key, value)) = line.split_once('=') else {
            return Ok(());
        };
        let key = key.trim();
        let value = unquote(value.trim());

        let invalid = || ConfigError::InvalidValue {
            line: number,
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "separator" => config.separator = value.parse().map_err(|_| invalid())?,
            "banner" => config.banner = parse_bool(value).ok_or_else(invalid)?,
            "color" => config.color = parse_bool(value).ok_or_else(invalid)?,
            _ => {}
        }
        Ok(())
    }
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
