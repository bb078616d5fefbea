use crate::error::{NavigationError, Result};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Resolve `path` against the working directory into an absolute path.
///
/// `.` and `..` are removed lexically (symlinks are left alone) and the result
/// never ends in a separator, except for the root itself.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(NavigationError::InvalidPath {
            path: path.to_path_buf(),
            reason: "path contains a NUL byte".to_string(),
        });
    }

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| NavigationError::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("cannot determine working directory: {e}"),
        })?;
        cwd.join(path)
    };

    Ok(clean(&joined))
}

// Rebuilding from components drops trailing separators and `.` segments.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                cleaned.push(component.as_os_str())
            }
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` refuses to go above the root, matching `/..` == `/`.
                cleaned.pop();
            }
        }
    }
    cleaned
}

pub fn parent(path: &Path) -> Option<&Path> {
    path.parent()
}

pub fn basename(path: &Path) -> Option<&OsStr> {
    path.file_name()
}
