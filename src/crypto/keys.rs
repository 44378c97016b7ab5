//! Master key type and HKDF-SHA256 field-key derivation.
//!
//! Field values are never encrypted under the master key directly.
//! Every envelope carries its own random salt, and the AES key for that
//! envelope is `HKDF-SHA256(ikm = master key, salt = envelope salt)`.

use std::fmt;

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::kdf::KEY_LEN;
use crate::errors::{PassVaultError, Result};

/// Context string binding derived keys to the field-encryption purpose.
const FIELD_INFO: &[u8] = b"passvault-field-v1";

/// A 32-byte master key that zeroes its memory when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MasterKey {
    bytes: [u8; KEY_LEN],
}

impl MasterKey {
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }

    /// Derive the AES key for one envelope from its salt.
    pub fn derive_field_key(&self, salt: &[u8]) -> Result<[u8; KEY_LEN]> {
        let hk = Hkdf::<Sha256>::new(Some(salt), &self.bytes);

        let mut okm = [0u8; KEY_LEN];
        hk.expand(FIELD_INFO, &mut okm)
            .map_err(|e| PassVaultError::KeyDerivationFailed(format!("HKDF expand failed: {e}")))?;

        Ok(okm)
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MasterKey")
            .field("bytes", &"<REDACTED>")
            .finish()
    }
}
