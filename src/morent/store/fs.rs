use super::StorageBackend;
use crate::error::{MorentError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The fixed key the wishlist persists under.
const WISHLIST_FILENAME: &str = "wishlist.json";

/// File-backed storage slot: one JSON file inside the data directory.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(WISHLIST_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(&self.path)
            .map_err(|e| MorentError::Storage(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(payload))
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| MorentError::Storage(format!("{}: {}", parent.display(), e)))?;
            }
        }
        fs::write(&self.path, payload)
            .map_err(|e| MorentError::Storage(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert_eq!(backend.read().unwrap(), None);
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());
        backend.write("[1,2,3]").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn write_creates_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("deeper");
        let mut backend = FileBackend::new(&nested);
        backend.write("[]").unwrap();
        assert!(nested.join("wishlist.json").exists());
    }
}
