//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use gantry_core::{application::ports::Filesystem, error::GantryResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GantryResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_dir_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> GantryResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_dir_error(path: &Path, e: io::Error) -> gantry_core::error::GantryError {
    gantry_core::application::ApplicationError::DirectoryCreate {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> gantry_core::error::GantryError {
    gantry_core::application::ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = tmp.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));
    }

    #[test]
    fn write_then_exists() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("artifact.cs");

        fs.write_file(&file, "// generated").unwrap();
        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "// generated");
    }

    #[test]
    fn write_into_missing_directory_fails_loudly() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("missing/artifact.cs");

        assert!(fs.write_file(&file, "x").is_err());
    }
}
