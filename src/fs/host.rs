use std::fs::{self, OpenOptions};
use std::path::Path;

use super::{EntryInfo, FileSystem, FsError};

/// `FileSystem` backed by the real host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl HostFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for HostFs {
    fn is_directory(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn read_file_bytes(&self, path: &str) -> Result<Vec<u8>, FsError> {
        if Path::new(path).is_dir() {
            return Err(FsError::Io(
                path.to_string(),
                std::io::Error::new(std::io::ErrorKind::Other, "is a directory"),
            ));
        }
        fs::read(path).map_err(|e| FsError::from_io(path, e))
    }

    fn list_entries(&self, path: &str) -> Result<Vec<EntryInfo>, FsError> {
        let dir = Path::new(path);
        if dir.exists() && !dir.is_dir() {
            return Err(FsError::NotADirectory(path.to_string()));
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| FsError::from_io(path, e))? {
            let entry = entry.map_err(|e| FsError::from_io(path, e))?;
            let metadata = entry.metadata().map_err(|e| FsError::from_io(path, e))?;
            entries.push(EntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_directory: metadata.is_dir(),
                size: metadata.len(),
                modified: metadata.modified().ok(),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn create_empty_file(&self, path: &str) -> Result<(), FsError> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(|_| ())
            .map_err(|e| FsError::from_io(path, e))
    }

    fn create_directory(&self, path: &str) -> Result<(), FsError> {
        fs::create_dir(path).map_err(|e| FsError::from_io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("wsh_host_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_create_and_list() {
        let dir = scratch_dir("list");
        let hostfs = HostFs::new();
        let base = dir.to_str().unwrap();

        hostfs.create_directory(dir.join("sub").to_str().unwrap()).unwrap();
        hostfs.create_empty_file(dir.join("b.txt").to_str().unwrap()).unwrap();
        fs::write(dir.join("a.txt"), b"hello").unwrap();

        let entries = hostfs.list_entries(base).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "sub"]);
        assert_eq!(entries[0].size, 5);
        assert!(entries[2].is_directory);
        assert!(entries[0].modified.is_some());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_touch_keeps_existing_content() {
        let dir = scratch_dir("touch");
        let file = dir.join("keep.txt");
        fs::write(&file, b"data").unwrap();

        HostFs::new().create_empty_file(file.to_str().unwrap()).unwrap();
        assert_eq!(fs::read(&file).unwrap(), b"data");

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_errors_map_by_kind() {
        let dir = scratch_dir("errors");
        let hostfs = HostFs::new();
        let missing = dir.join("missing");
        let missing = missing.to_str().unwrap();

        assert!(!hostfs.is_directory(missing));
        assert!(matches!(
            hostfs.read_file_bytes(missing),
            Err(FsError::NotFound(_))
        ));
        assert!(matches!(
            hostfs.create_directory(dir.to_str().unwrap()),
            Err(FsError::AlreadyExists(_))
        ));

        let file = dir.join("plain");
        fs::write(&file, b"").unwrap();
        assert!(matches!(
            hostfs.list_entries(file.to_str().unwrap()),
            Err(FsError::NotADirectory(_))
        ));

        let _ = fs::remove_dir_all(dir);
    }
}
