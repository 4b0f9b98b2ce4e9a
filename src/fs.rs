//! Filesystem checks
//!
//! `file_exists` and `directory_exists` follow symlinks and report `false`
//! for anything they cannot stat (missing path, permission denied, broken
//! network share). [`path_type`] never touches the disk.

use std::path::Path;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    File,
    Directory,
    Unknown,
}

pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    match path.metadata() {
        Ok(meta) => meta.is_file(),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "file not accessible");
            false
        }
    }
}

pub fn directory_exists<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    match path.metadata() {
        Ok(meta) => meta.is_dir(),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "directory not accessible");
            false
        }
    }
}

/// Guesses what a path names from its spelling alone.
///
/// A final component with a `.` followed by at least one character is a
/// [`PathType::File`] (so `.gitignore` is a file and `report.` is not),
/// anything else is a [`PathType::Directory`]. A blank path is
/// [`PathType::Unknown`].
///
/// # Example
/// ```
/// use codehelpers::fs::{path_type, PathType};
/// assert_eq!(path_type("C:\\reports\\q1.xlsx"), PathType::File);
/// assert_eq!(path_type("/var/log"), PathType::Directory);
/// ```
pub fn path_type(path: &str) -> PathType {
    if path.trim().is_empty() {
        return PathType::Unknown;
    }

    // Both separators are honoured regardless of the host platform.
    let last = path.rsplit(['/', '\\']).next().unwrap_or(path);
    if last.rfind('.').is_some_and(|dot| dot + 1 < last.len()) {
        PathType::File
    } else {
        PathType::Directory
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn existence_checks() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, b"hello").unwrap();

        assert!(file_exists(&file));
        assert!(!directory_exists(&file));

        assert!(directory_exists(dir.path()));
        assert!(!file_exists(dir.path()));

        let missing = dir.path().join("missing.txt");
        assert!(!file_exists(&missing));
        assert!(!directory_exists(&missing));
    }

    #[test]
    fn path_types() {
        assert_eq!(path_type("report.pdf"), PathType::File);
        assert_eq!(path_type("a/b/archive.tar.gz"), PathType::File);
        assert_eq!(path_type("C:\\Users\\me\\photo.JPG"), PathType::File);
        assert_eq!(path_type("C:\\Users\\me"), PathType::Directory);
        assert_eq!(path_type("src/"), PathType::Directory);
        assert_eq!(path_type("   "), PathType::Unknown);
    }

    #[test]
    fn extension_needs_a_character_after_the_dot() {
        assert_eq!(path_type(".gitignore"), PathType::File);
        assert_eq!(path_type("home/.bashrc"), PathType::File);
        assert_eq!(path_type("report."), PathType::Directory);
        assert_eq!(path_type("v1.2/"), PathType::Directory);
        assert_eq!(path_type("."), PathType::Directory);
        assert_eq!(path_type("a.b\\c"), PathType::Directory);
    }
}
