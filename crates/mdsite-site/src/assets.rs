//! Static asset copying.

use std::fs;
use std::path::Path;

use crate::BuildError;

/// Replace `dest` with a recursive copy of `src`.
///
/// An existing `dest` is deleted first so stale files never survive a build.
/// Returns the number of files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, BuildError> {
    if dest.exists() {
        tracing::debug!(path = %dest.display(), "Removing previous output");
        fs::remove_dir_all(dest).map_err(BuildError::io(dest))?;
    }
    fs::create_dir_all(dest).map_err(BuildError::io(dest))?;
    copy_dir(src, dest)
}

fn copy_dir(src: &Path, dest: &Path) -> Result<usize, BuildError> {
    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(BuildError::io(src))? {
        let entry = entry.map_err(BuildError::io(src))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            fs::create_dir(&to).map_err(BuildError::io(&to))?;
            copied += copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(BuildError::io(&from))?;
            tracing::debug!(from = %from.display(), to = %to.display(), "Copied asset");
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_static_recursive() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("static");
        fs::create_dir_all(src.join("images/icons")).unwrap();
        fs::write(src.join("index.css"), "body {}").unwrap();
        fs::write(src.join("images/icons/logo.svg"), "<svg/>").unwrap();

        let dest = temp.path().join("public");
        let copied = copy_static(&src, &dest).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            fs::read_to_string(dest.join("index.css")).unwrap(),
            "body {}"
        );
        assert_eq!(
            fs::read_to_string(dest.join("images/icons/logo.svg")).unwrap(),
            "<svg/>"
        );
    }

    #[test]
    fn test_copy_static_clears_destination() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("static");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("new.txt"), "new").unwrap();

        let dest = temp.path().join("public");
        fs::create_dir_all(dest.join("old")).unwrap();
        fs::write(dest.join("old/stale.txt"), "stale").unwrap();

        copy_static(&src, &dest).unwrap();

        assert!(dest.join("new.txt").exists());
        assert!(!dest.join("old").exists());
    }

    #[test]
    fn test_copy_static_missing_source() {
        let temp = tempfile::tempdir().unwrap();
        let err = copy_static(&temp.path().join("missing"), &temp.path().join("out")).unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
        assert!(err.to_string().contains("missing"));
    }
}
