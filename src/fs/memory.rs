use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::{EntryInfo, FileSystem, FsError};
use crate::path::{LogicalPath, Separator};

#[derive(Debug, Default)]
struct Tree {
    dirs: BTreeSet<String>,
    files: BTreeMap<String, Vec<u8>>,
}

/// In-memory `FileSystem`, keyed by normalized logical path.
#[derive(Debug)]
pub struct MemoryFs {
    separator: Separator,
    tree: RefCell<Tree>,
}

impl MemoryFs {
    pub fn new(separator: Separator) -> Self {
        Self {
            separator,
            tree: RefCell::new(Tree::default()),
        }
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.insert_ancestors(&self.parse(path), true);
        self
    }

    pub fn with_file(self, path: &str, contents: &[u8]) -> Self {
        let logical = self.parse(path);
        self.insert_ancestors(&logical, false);
        self.tree
            .borrow_mut()
            .files
            .insert(logical.to_string(), contents.to_vec());
        self
    }

    pub fn is_file(&self, path: &str) -> bool {
        let key = self.key(path);
        self.tree.borrow().files.contains_key(&key)
    }

    fn parse(&self, path: &str) -> LogicalPath {
        LogicalPath::parse(path, self.separator)
    }

    fn key(&self, path: &str) -> String {
        self.parse(path).to_string()
    }

    fn parent_key(&self, path: &LogicalPath) -> String {
        path.resolve("..").to_string()
    }

    fn insert_ancestors(&self, path: &LogicalPath, include_self: bool) {
        let mut tree = self.tree.borrow_mut();
        let mut current = LogicalPath::root(path.anchor(), self.separator);
        tree.dirs.insert(current.to_string());

        let segments = path.segments();
        let count = if include_self {
            segments.len()
        } else {
            segments.len().saturating_sub(1)
        };
        for segment in &segments[..count] {
            current = current.resolve(segment);
            tree.dirs.insert(current.to_string());
        }
    }

    fn check_creatable(&self, path: &str) -> Result<String, FsError> {
        let logical = self.parse(path);
        let key = logical.to_string();
        let tree = self.tree.borrow();

        if tree.dirs.contains(&key) || tree.files.contains_key(&key) {
            return Err(FsError::AlreadyExists(path.to_string()));
        }
        let parent = self.parent_key(&logical);
        if tree.files.contains_key(&parent) {
            return Err(FsError::NotADirectory(path.to_string()));
        }
        if !tree.dirs.contains(&parent) {
            return Err(FsError::NotFound(path.to_string()));
        }
        Ok(key)
    }
}

impl FileSystem for MemoryFs {
    fn is_directory(&self, path: &str) -> bool {
        let key = self.key(path);
        self.tree.borrow().dirs.contains(&key)
    }

    fn read_file_bytes(&self, path: &str) -> Result<Vec<u8>, FsError> {
        let key = self.key(path);
        self.tree
            .borrow()
            .files
            .get(&key)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_string()))
    }

    fn list_entries(&self, path: &str) -> Result<Vec<EntryInfo>, FsError> {
        let key = self.key(path);
        let tree = self.tree.borrow();

        if tree.files.contains_key(&key) {
            return Err(FsError::NotADirectory(path.to_string()));
        }
        if !tree.dirs.contains(&key) {
            return Err(FsError::NotFound(path.to_string()));
        }

        let mut entries = Vec::new();
        let child_of = |candidate: &str| {
            let logical = self.parse(candidate);
            !logical.is_root() && self.parent_key(&logical) == key
        };

        for dir in tree.dirs.iter().filter(|d| child_of(d)) {
            entries.push(EntryInfo {
                name: self.parse(dir).segments().last().cloned().unwrap_or_default(),
                is_directory: true,
                size: 0,
                modified: None,
            });
        }
        for (file, contents) in tree.files.iter().filter(|(f, _)| child_of(f)) {
            entries.push(EntryInfo {
                name: self.parse(file).segments().last().cloned().unwrap_or_default(),
                is_directory: false,
                size: contents.len() as u64,
                modified: None,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn create_empty_file(&self, path: &str) -> Result<(), FsError> {
        if self.is_file(path) {
            return Ok(());
        }
        let key = self.check_creatable(path)?;
        self.tree.borrow_mut().files.insert(key, Vec::new());
        Ok(())
    }

    fn create_directory(&self, path: &str) -> Result<(), FsError> {
        let key = self.check_creatable(path)?;
        self.tree.borrow_mut().dirs.insert(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryFs {
        MemoryFs::new(Separator::Backslash)
            .with_dir("C:\\a\\b")
            .with_file("C:\\a\\notes.txt", b"hi")
    }

    #[test]
    fn test_ancestors_are_directories() {
        let fs = sample();
        assert!(fs.is_directory("C:\\"));
        assert!(fs.is_directory("C:\\a"));
        assert!(fs.is_directory("C:\\a\\b\\"));
        assert!(!fs.is_directory("C:\\a\\notes.txt"));
        assert!(!fs.is_directory("C:\\zzz"));
    }

    #[test]
    fn test_list_entries_sorted() {
        let fs = sample();
        let entries = fs.list_entries("C:\\a").unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["b", "notes.txt"]);
        assert_eq!(entries[1].size, 2);
        assert!(matches!(
            fs.list_entries("C:\\a\\notes.txt"),
            Err(FsError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_create_rules() {
        let fs = sample();
        fs.create_directory("C:\\a\\c").unwrap();
        assert!(fs.is_directory("C:\\a\\c"));
        assert!(matches!(
            fs.create_directory("C:\\a\\c"),
            Err(FsError::AlreadyExists(_))
        ));
        assert!(matches!(
            fs.create_directory("C:\\missing\\x"),
            Err(FsError::NotFound(_))
        ));

        fs.create_empty_file("C:\\a\\new.txt").unwrap();
        assert_eq!(fs.read_file_bytes("C:\\a\\new.txt").unwrap(), b"");
        fs.create_empty_file("C:\\a\\notes.txt").unwrap();
        assert_eq!(fs.read_file_bytes("C:\\a\\notes.txt").unwrap(), b"hi");
    }
}
