//! Session-scoped ownership of the master key.

use tracing::debug;
use zeroize::Zeroizing;

use super::kdf::KdfParams;
use super::keys::MasterKey;
use crate::errors::{PassVaultError, Result};

/// Holds the master key for the lifetime of one unlocked session.
///
/// The key lives only here. Replacing or clearing it drops the old
/// `MasterKey`, which zeroes its bytes.
#[derive(Debug, Default)]
pub struct KeyManager {
    key: Option<MasterKey>,
}

impl KeyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the master key from `password` under `kdf` and keep it
    /// for the session, replacing any previous key.
    pub fn set_master_password(&mut self, password: &str, kdf: &KdfParams) -> Result<()> {
        if password.is_empty() {
            return Err(PassVaultError::InvalidInput(
                "master password cannot be empty".into(),
            ));
        }

        let bytes = Zeroizing::new(kdf.derive(password.as_bytes())?);
        self.key = Some(MasterKey::new(*bytes));
        debug!("master key derived for session");
        Ok(())
    }

    /// The current session key.
    pub fn key(&self) -> Result<&MasterKey> {
        self.key.as_ref().ok_or(PassVaultError::NotInitialized)
    }

    pub fn is_unlocked(&self) -> bool {
        self.key.is_some()
    }

    /// Wipe the key. Safe to call when already cleared.
    pub fn clear(&mut self) {
        if self.key.take().is_some() {
            debug!("master key cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::kdf::Argon2Params;

    fn kdf() -> KdfParams {
        KdfParams::generate(Argon2Params {
            memory_kib: 8_192,
            iterations: 1,
            parallelism: 1,
        })
    }

    #[test]
    fn empty_password_is_invalid_input() {
        let mut km = KeyManager::new();
        assert!(matches!(
            km.set_master_password("", &kdf()),
            Err(PassVaultError::InvalidInput(_))
        ));
        assert!(!km.is_unlocked());
    }

    #[test]
    fn key_before_password_is_not_initialized() {
        let km = KeyManager::new();
        assert!(matches!(km.key(), Err(PassVaultError::NotInitialized)));
    }

    #[test]
    fn setting_again_replaces_key() {
        let record = kdf();
        let mut km = KeyManager::new();
        km.set_master_password("first-password", &record).unwrap();
        let first = *km.key().unwrap().as_bytes();

        km.set_master_password("second-password", &record).unwrap();
        assert_ne!(&first, km.key().unwrap().as_bytes());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut km = KeyManager::new();
        km.set_master_password("pw-for-clear", &kdf()).unwrap();
        km.clear();
        km.clear();
        assert!(matches!(km.key(), Err(PassVaultError::NotInitialized)));
    }
}
