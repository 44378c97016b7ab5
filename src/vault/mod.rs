//! Vault module — credential entries and their lifecycle.
//!
//! This module provides:
//! - `Entry`, `EntryInput`, `EncryptedEntry` and `Category` (`entry`)
//! - Entry <-> at-rest document mapping (`codec`)
//! - Pure category/search filtering (`filter`)
//! - The `VaultStore` session that syncs with a remote store (`store`)

pub mod codec;
pub mod entry;
pub mod filter;
pub mod store;

// Re-export the most commonly used items.
pub use codec::{decrypt_entry, encrypt_entry};
pub use entry::{Category, EncryptedEntry, Entry, EntryInput};
pub use filter::{filter, ALL_CATEGORIES};
pub use store::{LoadFailure, LoadReport, VaultStore};
