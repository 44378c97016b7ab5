//! Remote-store collaborator contract.
//!
//! The vault only ever hands this layer opaque blobs: serialized
//! `EncryptedEntry` documents and the plaintext `KdfParams` record.
//! Implementations provide simple per-collection CRUD with full
//! overwrite semantics and no versioning.
//!
//! Two adapters ship with the crate:
//! - `MemoryStore` (in-process, for tests and embedding)
//! - `FsStore` (one JSON file per document under a root directory)

pub mod fs;
pub mod memory;

use async_trait::async_trait;

use crate::errors::{PassVaultError, Result};

pub use fs::FsStore;
pub use memory::MemoryStore;

/// Document id of the per-user KDF record inside the meta collection.
pub const KDF_DOC_ID: &str = "kdf";

/// Key-value document storage, grouped by collection.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Every `(doc_id, blob)` in a collection. Empty if the collection
    /// does not exist.
    async fn list(&self, collection: &str) -> Result<Vec<(String, String)>>;

    /// One document, or `None` if absent.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<String>>;

    /// Create or fully overwrite a document.
    async fn put(&self, collection: &str, id: &str, blob: &str) -> Result<()>;

    /// Remove a document. Removing a missing document is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}

/// Collection holding a user's encrypted entries.
pub fn entries_collection(user_id: &str) -> String {
    format!("users/{user_id}/passwords")
}

/// Collection holding a user's plaintext vault metadata.
pub fn meta_collection(user_id: &str) -> String {
    format!("users/{user_id}/meta")
}

/// Validate a single path-like segment (user id, collection part, doc id).
///
/// Allowed: ASCII letters, digits, underscores, hyphens, periods.
/// Must be non-empty, at most 128 characters, and not `.` or `..`.
pub fn validate_segment(segment: &str) -> Result<()> {
    if segment.is_empty() || segment.len() > 128 {
        return Err(PassVaultError::InvalidInput(
            "identifier must be 1 to 128 characters".into(),
        ));
    }
    if segment == "." || segment == ".." {
        return Err(PassVaultError::InvalidInput(format!(
            "identifier '{segment}' is reserved"
        )));
    }
    if !segment
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.')
    {
        return Err(PassVaultError::InvalidInput(format!(
            "identifier '{segment}' contains invalid characters"
        )));
    }
    Ok(())
}
