//! Password-based key derivation using Argon2id.
//!
//! The master key is never derived from a bare hash of the password.
//! Each user gets a random salt and a set of Argon2id cost parameters,
//! persisted as a plaintext `KdfParams` record next to (not inside) the
//! encrypted entries, so the same key can be re-derived on every device.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// Length of the per-user salt in bytes (256 bits).
pub const SALT_LEN: usize = 32;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Minimum safe memory cost in KiB (8 MB).
const MIN_MEMORY_KIB: u32 = 8_192;

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argon2Params {
    /// Memory cost in KiB (default: 65 536 = 64 MB).
    pub memory_kib: u32,
    /// Number of iterations (default: 3).
    pub iterations: u32,
    /// Parallelism lanes (default: 4).
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

impl Argon2Params {
    /// Reject parameter sets too weak to be worth deriving with.
    pub fn validate(&self) -> Result<()> {
        if self.memory_kib < MIN_MEMORY_KIB {
            return Err(PassVaultError::KeyDerivationFailed(format!(
                "Argon2 memory_kib must be at least {MIN_MEMORY_KIB} (got {})",
                self.memory_kib
            )));
        }
        if self.iterations < 1 {
            return Err(PassVaultError::KeyDerivationFailed(
                "Argon2 iterations must be at least 1".into(),
            ));
        }
        if self.parallelism < 1 {
            return Err(PassVaultError::KeyDerivationFailed(
                "Argon2 parallelism must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Per-user key derivation record.
///
/// Stored as plaintext metadata in the user's `meta` collection. The
/// `verifier` is an envelope of a fixed marker sealed under the derived
/// key; opening it is how a wrong master password is detected up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KdfParams {
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub salt: Vec<u8>,

    #[serde(flatten)]
    pub argon2: Argon2Params,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifier: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl KdfParams {
    /// Fresh record with a random salt and no verifier yet.
    pub fn generate(argon2: Argon2Params) -> Self {
        Self {
            salt: generate_salt().to_vec(),
            argon2,
            verifier: None,
            created_at: Utc::now(),
        }
    }

    /// Derive the 32-byte master key for `password` under this record.
    pub fn derive(&self, password: &[u8]) -> Result<[u8; KEY_LEN]> {
        derive_master_key_with_params(password, &self.salt, &self.argon2)
    }
}

/// Derive a 32-byte master key with explicit Argon2id parameters.
///
/// The same password + salt + params always produce the same key.
pub fn derive_master_key_with_params(
    password: &[u8],
    salt: &[u8],
    argon2_params: &Argon2Params,
) -> Result<[u8; KEY_LEN]> {
    argon2_params.validate()?;

    let params = Params::new(
        argon2_params.memory_kib,
        argon2_params.iterations,
        argon2_params.parallelism,
        Some(KEY_LEN),
    )
    .map_err(|e| PassVaultError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(password, salt, &mut key)
        .map_err(|e| PassVaultError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}")))?;

    Ok(key)
}

/// Generate a cryptographically random 32-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&BASE64.encode(data))
}

fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> Argon2Params {
        Argon2Params {
            memory_kib: 8_192,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn weak_params_are_rejected() {
        let params = Argon2Params {
            memory_kib: 1024,
            ..fast()
        };
        assert!(derive_master_key_with_params(b"pw", &[0u8; 32], &params).is_err());

        let params = Argon2Params {
            iterations: 0,
            ..fast()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn record_derives_deterministically() {
        let record = KdfParams::generate(fast());
        let k1 = record.derive(b"hunter2hunter2").unwrap();
        let k2 = record.derive(b"hunter2hunter2").unwrap();
        assert_eq!(k1, k2);
    }

    #[test]
    fn records_get_distinct_salts() {
        let a = KdfParams::generate(fast());
        let b = KdfParams::generate(fast());
        assert_ne!(a.salt, b.salt);
        assert_ne!(
            a.derive(b"same").unwrap(),
            b.derive(b"same").unwrap(),
            "same password under different salts must differ"
        );
    }

    #[test]
    fn record_json_uses_base64_salt_and_flat_params() {
        let record = KdfParams::generate(fast());
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();

        assert!(json["salt"].is_string());
        assert_eq!(json["memoryKib"], 8_192);
        assert_eq!(json["iterations"], 1);
        assert!(json.get("verifier").is_none());

        let back: KdfParams = serde_json::from_value(json).unwrap();
        assert_eq!(back.salt, record.salt);
        assert_eq!(back.argon2, record.argon2);
    }
}
