//! Filesystem utility functions
//!
//! Symlink helpers that hide the unix/windows split, plus directory listing
//! used by the scanner.

use std::fs;
use std::io;
use std::path::Path;

/// Create a directory symlink at `link` pointing at `target`
pub fn make_symlink(target: &Path, link: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_dir(target, link)
    }
}

/// Remove the symlink at `link` without touching what it points to
pub fn remove_symlink(link: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        fs::remove_file(link)
    }

    // Directory symlinks are directories as far as Windows removal is concerned
    #[cfg(windows)]
    {
        fs::remove_dir(link).or_else(|_| fs::remove_file(link))
    }
}

/// Names of the immediate subdirectories of `dir`, following symlinks.
///
/// Returns the total number of entries alongside the names so callers can
/// tell an empty directory apart from one holding only unrelated files.
pub fn subdirectory_names(dir: &Path) -> io::Result<(usize, Vec<String>)> {
    let mut total = 0;
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        total += 1;
        if !entry.path().is_dir() {
            continue;
        }
        // Non-UTF-8 names cannot be typed on the command line anyway
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    Ok((total, names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_symlink_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("jdk-17");
        fs::create_dir(&target).unwrap();
        let link = temp_dir.path().join("current");

        make_symlink(&target, &link).unwrap();
        assert_eq!(fs::read_link(&link).unwrap(), target);

        remove_symlink(&link).unwrap();
        assert!(fs::symlink_metadata(&link).is_err());
        assert!(target.is_dir());
    }

    #[test]
    fn test_subdirectory_names() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("jdk-11")).unwrap();
        fs::write(temp_dir.path().join("README"), "").unwrap();

        let (total, mut names) = subdirectory_names(temp_dir.path()).unwrap();
        names.sort();
        assert_eq!(total, 2);
        assert_eq!(names, vec!["jdk-11".to_string()]);
    }

    #[test]
    fn test_subdirectory_names_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(subdirectory_names(&temp_dir.path().join("nope")).is_err());
    }
}
