//! High-level vault session used by CLI commands.
//!
//! `VaultStore` owns the decrypted working set for one user and keeps it
//! in step with the remote store. Remote writes happen first; the
//! in-memory set only changes once the remote call has succeeded, so a
//! failed call leaves it matching the last known remote state.
//!
//! Conflict policy is last-write-wins: `save` overwrites the remote
//! document unconditionally.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::crypto::envelope;
use crate::crypto::kdf::{Argon2Params, KdfParams};
use crate::crypto::KeyManager;
use crate::errors::{PassVaultError, Result};
use crate::remote::{
    entries_collection, meta_collection, validate_segment, RemoteStore, KDF_DOC_ID,
};

use super::codec::{decrypt_entry, encrypt_entry};
use super::entry::{EncryptedEntry, Entry, EntryInput};
use super::filter;

/// Plaintext sealed into the KDF record to check the master password.
const VERIFIER_MARKER: &str = "passvault-verifier-v1";

/// One entry that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    pub id: String,
    pub error: PassVaultError,
}

/// Result of [`VaultStore::load`]: the entries that decrypted, plus a
/// per-entry report of the ones that did not.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub entries: Vec<Entry>,
    pub failures: Vec<LoadFailure>,
}

/// The vault handle for one user session.
pub struct VaultStore {
    remote: Arc<dyn RemoteStore>,

    user_id: String,

    /// Session key (zeroized on lock and on drop).
    keys: KeyManager,

    /// Decrypted working set, in creation order.
    entries: Vec<Entry>,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction and session lifecycle
    // ------------------------------------------------------------------

    /// Bind a new, locked session to `user_id` on `remote`.
    pub fn new(remote: Arc<dyn RemoteStore>, user_id: &str) -> Result<Self> {
        validate_segment(user_id)?;
        Ok(Self {
            remote,
            user_id: user_id.to_string(),
            keys: KeyManager::new(),
            entries: Vec::new(),
        })
    }

    /// First-time setup: create and persist the user's KDF record, then
    /// unlock with `password`.
    pub async fn initialize(&mut self, password: &str, argon2: &Argon2Params) -> Result<()> {
        let meta = meta_collection(&self.user_id);
        if self.remote.get(&meta, KDF_DOC_ID).await?.is_some() {
            return Err(PassVaultError::VaultAlreadyExists(self.user_id.clone()));
        }

        let mut record = KdfParams::generate(*argon2);
        let mut keys = KeyManager::new();
        keys.set_master_password(password, &record)?;
        record.verifier = Some(envelope::encrypt(VERIFIER_MARKER, keys.key()?)?);

        let blob = serde_json::to_string(&record)
            .map_err(|e| PassVaultError::SerializationError(format!("kdf record: {e}")))?;
        self.remote.put(&meta, KDF_DOC_ID, &blob).await?;

        self.keys = keys;
        self.entries.clear();
        info!(user = %self.user_id, "vault initialized");
        Ok(())
    }

    /// Derive the session key from `password` using the user's stored
    /// KDF record.
    pub async fn unlock(&mut self, password: &str) -> Result<()> {
        let record = self.fetch_kdf_record().await?;

        let mut keys = KeyManager::new();
        keys.set_master_password(password, &record)?;

        // A record without a verifier cannot prove the password, so it is rejected.
        let verifier = record
            .verifier
            .as_deref()
            .ok_or(PassVaultError::InvalidMasterPassword)?;
        match envelope::decrypt(verifier, keys.key()?) {
            Ok(marker) if marker == VERIFIER_MARKER => {}
            _ => return Err(PassVaultError::InvalidMasterPassword),
        }

        self.keys = keys;
        self.entries.clear();
        info!(user = %self.user_id, "vault unlocked");
        Ok(())
    }

    /// Wipe the session key, then drop the decrypted working set.
    pub fn lock(&mut self) {
        self.keys.clear();
        self.entries.clear();
        info!(user = %self.user_id, "vault locked");
    }

    async fn fetch_kdf_record(&self) -> Result<KdfParams> {
        let blob = self
            .remote
            .get(&meta_collection(&self.user_id), KDF_DOC_ID)
            .await?
            .ok_or_else(|| PassVaultError::VaultNotFound(self.user_id.clone()))?;

        serde_json::from_str(&blob)
            .map_err(|e| PassVaultError::SerializationError(format!("kdf record: {e}")))
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Fetch and decrypt every entry for this user.
    ///
    /// Entries that cannot be parsed or decrypted are skipped and
    /// reported in `LoadReport::failures`; they never abort the load.
    /// The working set is replaced with the entries that succeeded.
    pub async fn load(&mut self) -> Result<LoadReport> {
        let key = self.keys.key()?;
        let docs = self.remote.list(&entries_collection(&self.user_id)).await?;

        let mut report = LoadReport::default();
        for (id, blob) in docs {
            let decoded = serde_json::from_str::<EncryptedEntry>(&blob)
                .map_err(|e| PassVaultError::SerializationError(format!("entry {id}: {e}")))
                .and_then(|enc| decrypt_entry(&id, &enc, key));

            match decoded {
                Ok(entry) => report.entries.push(entry),
                Err(error) => {
                    warn!(id = %id, %error, "skipping entry that failed to load");
                    report.failures.push(LoadFailure { id, error });
                }
            }
        }

        report
            .entries
            .sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        self.entries = report.entries.clone();

        debug!(
            loaded = report.entries.len(),
            failed = report.failures.len(),
            "vault loaded"
        );
        Ok(report)
    }

    /// Create (`id == None`) or replace (`id == Some`) an entry.
    ///
    /// New entries get a random 128-bit id and `created_at == updated_at`.
    /// Updates require the id to be in the working set and keep its
    /// `created_at`. The full document is written remotely before the
    /// working set changes.
    pub async fn save(&mut self, id: Option<&str>, input: &EntryInput) -> Result<Entry> {
        let key = self.keys.key()?;
        if input.website.trim().is_empty() {
            return Err(PassVaultError::InvalidInput(
                "website cannot be empty".into(),
            ));
        }

        let now = Utc::now();
        let (id, created_at, position) = match id {
            Some(id) => {
                let position = self
                    .position(id)
                    .ok_or_else(|| PassVaultError::NotFound(id.to_string()))?;
                (id.to_string(), self.entries[position].created_at, Some(position))
            }
            None => (self.fresh_id(), now, None),
        };

        let entry = Entry::from_input(id, input, created_at, now);
        let blob = serde_json::to_string(&encrypt_entry(&entry, key)?)
            .map_err(|e| PassVaultError::SerializationError(format!("entry: {e}")))?;

        self.remote
            .put(&entries_collection(&self.user_id), &entry.id, &blob)
            .await?;

        match position {
            Some(p) => self.entries[p] = entry.clone(),
            None => self.entries.push(entry.clone()),
        }
        debug!(id = %entry.id, created = position.is_none(), "entry saved");
        Ok(entry)
    }

    /// Remove an entry remotely, then from the working set.
    ///
    /// Unknown ids (including one already deleted) fail with `NotFound`.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.keys.key()?;
        let position = self
            .position(id)
            .ok_or_else(|| PassVaultError::NotFound(id.to_string()))?;

        self.remote
            .delete(&entries_collection(&self.user_id), id)
            .await?;

        self.entries.remove(position);
        debug!(id, "entry deleted");
        Ok(())
    }

    /// Entries matching a category and a search string.
    /// See [`filter::filter`].
    pub fn filter(&self, category: Option<&str>, search: Option<&str>) -> Vec<&Entry> {
        filter::filter(&self.entries, category, search)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_unlocked(&self) -> bool {
        self.keys.is_unlocked()
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}
