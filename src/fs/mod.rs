use std::fmt;
use std::io;
use std::time::SystemTime;

mod host;
mod memory;

pub use host::HostFs;
pub use memory::MemoryFs;

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub is_directory: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

#[derive(Debug)]
pub enum FsError {
    NotFound(String),
    PermissionDenied(String),
    AlreadyExists(String),
    NotADirectory(String),
    Io(String, io::Error),
}

impl FsError {
    pub fn from_io(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_string()),
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_string()),
            _ => FsError::Io(path.to_string(), err),
        }
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::NotFound(p) => write!(f, "{}: no such file or directory", p),
            FsError::PermissionDenied(p) => write!(f, "{}: permission denied", p),
            FsError::AlreadyExists(p) => write!(f, "{}: already exists", p),
            FsError::NotADirectory(p) => write!(f, "{}: not a directory", p),
            FsError::Io(p, e) => write!(f, "{}: {}", p, e),
        }
    }
}

impl std::error::Error for FsError {}

/// The narrow filesystem capability the shell core consumes.
///
/// Paths are logical path strings as rendered by `LogicalPath`.
pub trait FileSystem {
    fn is_directory(&self, path: &str) -> bool;
    fn read_file_bytes(&self, path: &str) -> Result<Vec<u8>, FsError>;
    fn list_entries(&self, path: &str) -> Result<Vec<EntryInfo>, FsError>;
    fn create_empty_file(&self, path: &str) -> Result<(), FsError>;
    fn create_directory(&self, path: &str) -> Result<(), FsError>;
}
