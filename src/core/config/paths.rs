use super::ConfigError;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    /// Set when the path came from `--config`; such a file must exist.
    pub explicit: bool,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

        Ok(ConfigPaths {
            rc_path: home.join(".wshrc"),
            explicit: false,
        })
    }

    pub fn with_rc(path: &Path) -> Self {
        ConfigPaths {
            rc_path: path.to_path_buf(),
            explicit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rc_lives_in_home() {
        if let Some(home) = dirs::home_dir() {
            let paths = ConfigPaths::new().unwrap();
            assert_eq!(paths.rc_path, home.join(".wshrc"));
            assert!(!paths.explicit);
        }
    }

    #[test]
    fn test_custom_rc() {
        let paths = ConfigPaths::with_rc(Path::new("/etc/wshrc"));
        assert_eq!(paths.rc_path, PathBuf::from("/etc/wshrc"));
        assert!(paths.explicit);
    }
}
