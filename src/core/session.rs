use std::env;

use super::commands::CommandError;
use crate::fs::FileSystem;
use crate::path::{LogicalPath, Separator};

/// The shell's only persistent state: the logical working directory.
///
/// It is independent of the process working directory and changes only
/// through `change_dir` after the target is confirmed to be a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current: LogicalPath,
}

impl Session {
    pub fn new(path: &str, separator: Separator) -> Self {
        Self {
            current: LogicalPath::parse(path, separator),
        }
    }

    pub fn from_host(separator: Separator) -> Result<Self, std::io::Error> {
        let cwd = env::current_dir()?;
        Ok(Self::new(&cwd.to_string_lossy(), separator))
    }

    pub fn current(&self) -> &LogicalPath {
        &self.current
    }

    pub fn current_path(&self) -> String {
        self.current.to_string()
    }

    /// Candidate path for `raw`, without validating or committing it.
    pub fn resolve(&self, raw: &str) -> LogicalPath {
        self.current.resolve(raw)
    }

    pub fn change_dir(&mut self, raw: &str, fs: &dyn FileSystem) -> Result<(), CommandError> {
        let candidate = self.resolve(raw);
        let rendered = candidate.to_string();
        if !fs.is_directory(&rendered) {
            return Err(CommandError::InvalidDirectory(rendered));
        }
        self.current = candidate;
        Ok(())
    }
}
