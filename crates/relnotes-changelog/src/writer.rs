//! Persisting rendered release notes

use std::path::{Path, PathBuf};

use relnotes_core::{ChangelogError, Result};
use tracing::{info, instrument};

/// Destination for rendered release notes
pub trait ChangelogWriter: Send + Sync {
    /// Store `content` under `key` inside `dir`, returning where it went
    fn write(&self, dir: &Path, key: &str, content: &str) -> Result<PathBuf>;
}

/// Writes `{key}.txt` into a directory, replacing any existing file
#[derive(Debug, Clone, Copy, Default)]
pub struct FileWriter;

impl FileWriter {
    /// Create a new file writer
    pub fn new() -> Self {
        Self
    }

    /// Path the notes for `key` are written to
    pub fn path_for(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{}.txt", key))
    }
}

impl ChangelogWriter for FileWriter {
    #[instrument(skip(self, dir, content), fields(dir = %dir.display(), content_len = content.len()))]
    fn write(&self, dir: &Path, key: &str, content: &str) -> Result<PathBuf> {
        let path = Self::path_for(dir, key);
        std::fs::write(&path, content).map_err(|source| ChangelogError::WriteFailed {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "release notes written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relnotes_core::RelnotesError;
    use tempfile::TempDir;

    #[test]
    fn test_writes_key_file() {
        let temp = TempDir::new().unwrap();
        let path = FileWriter::new()
            .write(temp.path(), "101", "<u>Fixed</u>\nbug\n\n")
            .unwrap();

        assert_eq!(path, temp.path().join("101.txt"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "<u>Fixed</u>\nbug\n\n"
        );
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("101.txt");
        std::fs::write(&path, "old notes that are longer than the new ones").unwrap();

        FileWriter::new().write(temp.path(), "101", "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let err = FileWriter::new().write(&missing, "101", "notes").unwrap_err();
        match err {
            RelnotesError::Changelog(ChangelogError::WriteFailed { path, source }) => {
                assert_eq!(path, missing.join("101.txt"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
