use crate::content::DirectoryEntry;
use crate::error::{NavigationError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Where the engine gets its directory listings from.
#[cfg_attr(test, automock)]
pub trait DirectorySource {
    fn read_entries(&self, path: &Path) -> Result<Vec<DirectoryEntry>>;
}

/// Reads listings straight from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectorySource;

impl DirectorySource for FsDirectorySource {
    fn read_entries(&self, path: &Path) -> Result<Vec<DirectoryEntry>> {
        read_entries(path)
    }
}

/// List the immediate entries of `path` in the order the filesystem reports them.
pub fn read_entries(path: &Path) -> Result<Vec<DirectoryEntry>> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => NavigationError::NotFound {
            path: path.to_path_buf(),
        },
        _ => NavigationError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_dir() {
        return Err(NavigationError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let io_err = |source| NavigationError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for dirent in fs::read_dir(path).map_err(io_err)? {
        let dirent = dirent.map_err(io_err)?;
        entries.push(DirectoryEntry::new(dirent.file_name()));
    }

    Ok(entries)
}
