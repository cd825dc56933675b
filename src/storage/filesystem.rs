use crate::storage::backend::{BlobStore, StorageError, validate_filename};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-based document store.
///
/// Documents are written under `base_path` by file name, and the file name is
/// the content identifier.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    base_path: PathBuf,
}

impl FilesystemStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = base_path.into();
        // Create storage directory if it doesn't exist
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn file_path(&self, filename: &str) -> Result<PathBuf, StorageError> {
        validate_filename(filename)?;
        Ok(self.base_path.join(filename))
    }
}

impl BlobStore for FilesystemStore {
    fn upload(&self, filename: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let path = self.file_path(filename)?;
        fs::write(&path, bytes)?;
        log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(filename.to_string())
    }

    fn fetch(&self, content_id: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.file_path(content_id)?;
        if !path.exists() {
            return Err(StorageError::NotFound(content_id.to_string()));
        }
        Ok(fs::read(path)?)
    }

    fn exists(&self, content_id: &str) -> bool {
        self.file_path(content_id)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }
}
