//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go to a temp file in the target's directory and are renamed into
/// place, so a crash mid-write never leaves a truncated artifact behind.
/// An exclusive advisory lock on `<file>.lock` is held while the rename
/// happens and the lock file is removed afterwards; concurrent writers
/// still resolve as last-writer-wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

        let lock_path = lock_path(path);
        let lock_file = std::fs::File::create(&lock_path).map_err(|e| FsError::at(&lock_path, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| FsError::at(&lock_path, e))?;

        let result = (|| -> FsResult<()> {
            let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
            temp.write_all(content.as_bytes())
                .and_then(|_| temp.as_file().sync_all())
                .map_err(|e| FsError::at(path, e))?;
            temp.persist(path).map_err(|e| FsError::at(path, e.error))?;
            Ok(())
        })();

        let _ = std::fs::remove_file(&lock_path);
        let _ = lock_file.unlock();
        result
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".lock");
    path.with_file_name(name)
}
