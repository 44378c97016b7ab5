//! Self-describing AES-256-GCM envelopes for single string fields.
//!
//! An envelope is one opaque string:
//!
//! ```text
//! pv1$<base64( salt: 16 bytes | nonce: 12 bytes | ciphertext | tag: 16 bytes )>
//! ```
//!
//! - **`pv1$`**: format/algorithm tag (HKDF-SHA256 + AES-256-GCM).
//! - **salt**: fresh per call; the AES key is derived from the master key
//!   and this salt, so no two envelopes share a field key.
//! - **nonce**: fresh per call.
//!
//! The tag prefix and salt are bound as associated data, so any edit to
//! the envelope (including a swapped salt) fails authentication.

use aes_gcm::aead::{Aead, KeyInit, OsRng, Payload};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::RngCore;
use zeroize::Zeroize;

use super::keys::MasterKey;
use crate::errors::{PassVaultError, Result};

/// Version/algorithm tag at the start of every envelope.
const PREFIX: &str = "pv1$";

/// Per-envelope HKDF salt length.
const SALT_LEN: usize = 16;

/// AES-256-GCM nonce length.
const NONCE_LEN: usize = 12;

/// AES-256-GCM authentication tag length.
const TAG_LEN: usize = 16;

/// Encrypt `plaintext` into a fresh envelope.
///
/// Two calls with the same plaintext and key always produce different
/// envelopes.
pub fn encrypt(plaintext: &str, key: &MasterKey) -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);

    let mut field_key = key.derive_field_key(&salt)?;
    let cipher = Aes256Gcm::new_from_slice(&field_key)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("invalid key length: {e}")));
    field_key.zeroize();
    let cipher = cipher?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let aad = associated_data(&salt);

    let ciphertext = cipher
        .encrypt(
            &nonce,
            Payload {
                msg: plaintext.as_bytes(),
                aad: &aad,
            },
        )
        .map_err(|e| PassVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut body = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    body.extend_from_slice(&salt);
    body.extend_from_slice(&nonce);
    body.extend_from_slice(&ciphertext);

    Ok(format!("{PREFIX}{}", BASE64.encode(&body)))
}

/// Decrypt an envelope produced by [`encrypt`].
///
/// Malformed input, an unknown tag, a wrong key, or tampered bytes all
/// fail with `DecryptionFailed`.
pub fn decrypt(envelope: &str, key: &MasterKey) -> Result<String> {
    let encoded = envelope
        .strip_prefix(PREFIX)
        .ok_or(PassVaultError::DecryptionFailed)?;
    let body = BASE64
        .decode(encoded)
        .map_err(|_| PassVaultError::DecryptionFailed)?;

    if body.len() < SALT_LEN + NONCE_LEN + TAG_LEN {
        return Err(PassVaultError::DecryptionFailed);
    }

    let (salt, rest) = body.split_at(SALT_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let mut field_key = key.derive_field_key(salt)?;
    let cipher = Aes256Gcm::new_from_slice(&field_key).map_err(|_| PassVaultError::DecryptionFailed);
    field_key.zeroize();
    let cipher = cipher?;

    let aad = associated_data(salt);
    let plaintext = cipher
        .decrypt(
            nonce,
            Payload {
                msg: ciphertext,
                aad: &aad,
            },
        )
        .map_err(|_| PassVaultError::DecryptionFailed)?;

    String::from_utf8(plaintext).map_err(|e| {
        let mut bad_bytes = e.into_bytes();
        bad_bytes.zeroize();
        PassVaultError::DecryptionFailed
    })
}

fn associated_data(salt: &[u8]) -> Vec<u8> {
    let mut aad = Vec::with_capacity(PREFIX.len() + salt.len());
    aad.extend_from_slice(PREFIX.as_bytes());
    aad.extend_from_slice(salt);
    aad
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(byte: u8) -> MasterKey {
        MasterKey::new([byte; 32])
    }

    #[test]
    fn envelope_is_tagged_and_opaque() {
        let env = encrypt("Secret#1", &key(1)).unwrap();
        assert!(env.starts_with("pv1$"));
        assert!(!env.contains("Secret#1"));
    }

    #[test]
    fn empty_plaintext_roundtrips() {
        let k = key(2);
        let env = encrypt("", &k).unwrap();
        assert_eq!(decrypt(&env, &k).unwrap(), "");
    }

    #[test]
    fn unknown_prefix_fails() {
        let k = key(3);
        let env = encrypt("x", &k).unwrap();
        let swapped = env.replacen("pv1$", "pv2$", 1);
        assert!(matches!(
            decrypt(&swapped, &k),
            Err(PassVaultError::DecryptionFailed)
        ));
    }

    #[test]
    fn truncated_body_fails() {
        let k = key(4);
        let short = format!("{PREFIX}{}", BASE64.encode([0u8; 20]));
        assert!(decrypt(&short, &k).is_err());
        assert!(decrypt("pv1$not base64!!", &k).is_err());
    }

    #[test]
    fn swapped_salt_fails_authentication() {
        let k = key(5);
        let env = encrypt("hello", &k).unwrap();
        let mut body = BASE64.decode(env.strip_prefix(PREFIX).unwrap()).unwrap();
        body[0] ^= 0x01;
        let tampered = format!("{PREFIX}{}", BASE64.encode(&body));
        assert!(decrypt(&tampered, &k).is_err());
    }
}
