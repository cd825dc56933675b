//! Storage collaborators for rendered documents.

pub mod backend;
pub mod filesystem;
pub mod memory;

pub use backend::{BlobStore, StorageError};
pub use filesystem::FilesystemStore;
pub use memory::InMemoryStore;
