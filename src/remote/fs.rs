//! Directory-backed remote store.
//!
//! Layout under the root directory:
//!
//! ```text
//! <root>/users/<user_id>/passwords/<entry_id>.json
//! <root>/users/<user_id>/meta/kdf.json
//! ```
//!
//! Each document is written atomically (temp file in the same directory,
//! then rename), so a reader never sees a half-written blob.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::{validate_segment, RemoteStore};
use crate::errors::{PassVaultError, Result};

const DOC_EXT: &str = "json";

/// A `RemoteStore` rooted at a local directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collection_dir(&self, collection: &str) -> Result<PathBuf> {
        let mut dir = self.root.clone();
        for segment in collection.split('/') {
            validate_segment(segment)?;
            dir.push(segment);
        }
        Ok(dir)
    }

    fn doc_path(&self, collection: &str, id: &str) -> Result<PathBuf> {
        validate_segment(id)?;
        Ok(self
            .collection_dir(collection)?
            .join(format!("{id}.{DOC_EXT}")))
    }
}

fn unavailable(action: &str, path: &Path, err: std::io::Error) -> PassVaultError {
    PassVaultError::RemoteUnavailable(format!("{action} {}: {err}", path.display()))
}

#[async_trait]
impl RemoteStore for FsStore {
    async fn list(&self, collection: &str) -> Result<Vec<(String, String)>> {
        let dir = self.collection_dir(collection)?;
        let mut reader = match fs::read_dir(&dir).await {
            Ok(reader) => reader,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(unavailable("cannot list", &dir, e)),
        };

        let mut docs = Vec::new();
        while let Some(item) = reader
            .next_entry()
            .await
            .map_err(|e| unavailable("cannot list", &dir, e))?
        {
            let path = item.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DOC_EXT) {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            // Leftover temp files from an interrupted write start with '.'.
            if id.starts_with('.') {
                continue;
            }
            let blob = fs::read_to_string(&path)
                .await
                .map_err(|e| unavailable("cannot read", &path, e))?;
            docs.push((id.to_string(), blob));
        }

        docs.sort_by(|a, b| a.0.cmp(&b.0));
        debug!(collection, count = docs.len(), "listed documents");
        Ok(docs)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<String>> {
        let path = self.doc_path(collection, id)?;
        match fs::read_to_string(&path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable("cannot read", &path, e)),
        }
    }

    async fn put(&self, collection: &str, id: &str, blob: &str) -> Result<()> {
        let path = self.doc_path(collection, id)?;
        let parent = path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(parent)
            .await
            .map_err(|e| unavailable("cannot create", parent, e))?;

        let tmp_path = parent.join(format!(".{id}.{DOC_EXT}.tmp"));
        fs::write(&tmp_path, blob)
            .await
            .map_err(|e| unavailable("cannot write", &tmp_path, e))?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| unavailable("cannot replace", &path, e))?;

        debug!(collection, id, "document written");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let path = self.doc_path(collection, id)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(unavailable("cannot delete", &path, e)),
        }
    }
}
