//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - Argon2id master-key derivation and the per-user `KdfParams` record (`kdf`)
//! - The zeroizing `MasterKey` and HKDF field-key derivation (`keys`)
//! - Session key ownership (`key_manager`)
//! - Self-describing AES-256-GCM field envelopes (`envelope`)

pub mod envelope;
pub mod kdf;
pub mod key_manager;
pub mod keys;

pub use envelope::{decrypt, encrypt};
pub use kdf::{derive_master_key_with_params, generate_salt, Argon2Params, KdfParams};
pub use key_manager::KeyManager;
pub use keys::MasterKey;
