//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use pyskel_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{PyskelError, PyskelResult},
};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }

    /// Every file under `root`, relative to it, sorted by path.
    pub fn list_files(&self, root: &Path) -> PyskelResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                PyskelError::from(ApplicationError::FilesystemError {
                    reason: format!("Failed to walk directory: {}", e),
                    path,
                })
            })?;

            if entry.file_type().is_file() {
                if let Ok(relative) = entry.path().strip_prefix(root) {
                    files.push(relative.to_path_buf());
                }
            }
        }

        Ok(files)
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> PyskelResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> PyskelResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> PyskelResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if executable {
                let metadata =
                    std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
                let mut perms = metadata.permissions();
                let mode = perms.mode();
                perms.set_mode(mode | 0o111);
                std::fs::set_permissions(path, perms)
                    .map_err(|e| map_io_error(path, e, "set permissions"))?;
            }
        }
        #[cfg(windows)]
        {
            let _ = executable;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> PyskelResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> PyskelError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_lists_files_relative_to_root() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let root = temp.path().join("pymx");

        fs.create_dir_all(&root.join("tests")).unwrap();
        fs.write_file(&root.join("setup.py"), "").unwrap();
        fs.write_file(&root.join("tests/__init__.py"), "").unwrap();

        assert_eq!(
            fs.list_files(&root).unwrap(),
            vec![PathBuf::from("setup.py"), PathBuf::from("tests/__init__.py")]
        );
    }

    #[test]
    fn remove_dir_all_deletes_tree() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let root = temp.path().join("gone");

        fs.create_dir_all(&root.join("a/b")).unwrap();
        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }

    #[test]
    fn write_into_missing_directory_is_filesystem_error() {
        let temp = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&temp.path().join("missing/file.txt"), "x")
            .unwrap_err();

        assert!(matches!(
            err,
            PyskelError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn set_permissions_marks_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let script = temp.path().join("run.sh");
        fs.write_file(&script, "#!/bin/sh\n").unwrap();
        fs.set_permissions(&script, true).unwrap();

        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0);
    }
}
