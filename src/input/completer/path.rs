use rustyline::completion::Pair;

use crate::fs::FileSystem;
use crate::path::LogicalPath;

/// Completes file names relative to the session's logical directory.
#[derive(Clone)]
pub struct PathCompleter {
    cwd: LogicalPath,
}

impl PathCompleter {
    pub fn new(cwd: LogicalPath) -> Self {
        Self { cwd }
    }

    pub fn set_cwd(&mut self, cwd: LogicalPath) {
        self.cwd = cwd;
    }

    pub fn complete_path(&self, fs: &dyn FileSystem, incomplete: &str) -> Vec<Pair> {
        let (dir_part, file_prefix) = split_incomplete(incomplete);
        let dir = self.cwd.resolve(dir_part).to_string();

        let Ok(entries) = fs.list_entries(&dir) else {
            return Vec::new();
        };

        let sep = self.cwd.separator().as_char();
        entries
            .into_iter()
            .filter(|entry| entry.name.starts_with(file_prefix))
            .map(|entry| {
                let completed = format!("{}{}", dir_part, entry.name);
                if entry.is_directory {
                    Pair {
                        display: format!("{}{}", entry.name, sep),
                        replacement: format!("{}{}", completed, sep),
                    }
                } else {
                    Pair {
                        display: entry.name,
                        replacement: format!("{} ", completed),
                    }
                }
            })
            .collect()
    }
}

/// Splits `src/ma` into (`src/`, `ma`); either separator counts.
fn split_incomplete(incomplete: &str) -> (&str, &str) {
    match incomplete.rfind(['/', '\\']) {
        Some(idx) => incomplete.split_at(idx + 1),
        None => ("", incomplete),
    }
}
