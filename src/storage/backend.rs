use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage rejected the request: {0}")]
    Rejected(String),

    #[error("Document '{0}' not found")]
    NotFound(String),
}

/// Storage collaborator for rendered documents.
///
/// `upload` returns the content identifier the caller records on the
/// application; the other methods take that identifier back.
pub trait BlobStore: Send + Sync {
    /// Persist a document and return its content identifier.
    fn upload(&self, filename: &str, bytes: &[u8]) -> Result<String, StorageError>;

    /// Read a stored document back by content identifier.
    fn fetch(&self, content_id: &str) -> Result<Vec<u8>, StorageError>;

    /// Check whether a document exists for the given content identifier.
    fn exists(&self, content_id: &str) -> bool;
}

/// File names must stay inside the store; no separators or parent references.
pub(crate) fn validate_filename(filename: &str) -> Result<(), StorageError> {
    if filename.is_empty()
        || filename.contains(['/', '\\'])
        || filename == "."
        || filename == ".."
    {
        return Err(StorageError::Rejected(format!(
            "invalid document file name '{}'",
            filename
        )));
    }
    Ok(())
}
