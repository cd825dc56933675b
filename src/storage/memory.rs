use crate::storage::backend::{BlobStore, StorageError, validate_filename};
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    documents: BTreeMap<String, (String, Vec<u8>)>,
}

/// A thread-safe in-memory document store. Content ids are `mem-<n>`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|i| i.documents.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The file name a document was uploaded under.
    pub fn filename_of(&self, content_id: &str) -> Option<String> {
        let inner = self.inner.lock().ok()?;
        inner.documents.get(content_id).map(|(name, _)| name.clone())
    }
}

impl BlobStore for InMemoryStore {
    fn upload(&self, filename: &str, bytes: &[u8]) -> Result<String, StorageError> {
        validate_filename(filename)?;
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| StorageError::Rejected("store lock poisoned".into()))?;
        inner.next_id += 1;
        let content_id = format!("mem-{}", inner.next_id);
        inner
            .documents
            .insert(content_id.clone(), (filename.to_string(), bytes.to_vec()));
        Ok(content_id)
    }

    fn fetch(&self, content_id: &str) -> Result<Vec<u8>, StorageError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| StorageError::Rejected("store lock poisoned".into()))?;
        inner
            .documents
            .get(content_id)
            .map(|(_, bytes)| bytes.clone())
            .ok_or_else(|| StorageError::NotFound(content_id.to_string()))
    }

    fn exists(&self, content_id: &str) -> bool {
        self.inner
            .lock()
            .map(|i| i.documents.contains_key(content_id))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_sequential_ids() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        let a = store.upload("a.pdf", b"a").unwrap();
        let b = store.upload("b.pdf", b"b").unwrap();
        assert_eq!(a, "mem-1");
        assert_eq!(b, "mem-2");
        assert_eq!(store.len(), 2);
        assert_eq!(store.fetch(&b).unwrap(), b"b");
        assert_eq!(store.filename_of(&a).as_deref(), Some("a.pdf"));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = InMemoryStore::new();
        assert!(!store.exists("mem-9"));
        assert!(matches!(store.fetch("mem-9"), Err(StorageError::NotFound(_))));
    }
}
