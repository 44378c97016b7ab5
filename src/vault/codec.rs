//! Entry <-> at-rest document mapping.
//!
//! `password` is always sealed, even when empty. `notes` is optional:
//! absent notes are stored as the empty marker `""` and read back as
//! `None`. Every other field passes through untouched.

use crate::crypto::envelope;
use crate::crypto::MasterKey;
use crate::errors::Result;

use super::entry::{EncryptedEntry, Entry};

/// Encrypt the secret fields of `entry`.
pub fn encrypt_entry(entry: &Entry, key: &MasterKey) -> Result<EncryptedEntry> {
    let password = envelope::encrypt(&entry.password, key)?;
    let notes = match entry.notes.as_deref() {
        Some(notes) if !notes.is_empty() => envelope::encrypt(notes, key)?,
        _ => String::new(),
    };

    Ok(EncryptedEntry {
        website: entry.website.clone(),
        url: entry.url.clone(),
        username: entry.username.clone(),
        password,
        category: entry.category,
        notes,
        created_at: entry.created_at,
        updated_at: entry.updated_at,
    })
}

/// Decrypt a stored document back into an `Entry` with the given id.
///
/// Fails with `DecryptionFailed` if either secret field cannot be opened.
pub fn decrypt_entry(id: &str, enc: &EncryptedEntry, key: &MasterKey) -> Result<Entry> {
    let password = envelope::decrypt(&enc.password, key)?;
    let notes = if enc.notes.is_empty() {
        None
    } else {
        Some(envelope::decrypt(&enc.notes, key)?)
    };

    Ok(Entry {
        id: id.to_string(),
        website: enc.website.clone(),
        url: enc.url.clone(),
        username: enc.username.clone(),
        password,
        category: enc.category,
        notes,
        created_at: enc.created_at,
        updated_at: enc.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::errors::PassVaultError;
    use crate::vault::entry::Category;

    fn sample(notes: Option<&str>) -> Entry {
        let now = Utc::now();
        Entry {
            id: "abc".into(),
            website: "example.com".into(),
            url: Some("https://example.com".into()),
            username: "alice".into(),
            password: "Secret#1".into(),
            category: Category::Work,
            notes: notes.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn only_secret_fields_are_sealed() {
        let key = MasterKey::new([1u8; 32]);
        let entry = sample(Some("recovery codes"));
        let enc = encrypt_entry(&entry, &key).unwrap();

        assert_eq!(enc.website, entry.website);
        assert_eq!(enc.url, entry.url);
        assert_eq!(enc.username, entry.username);
        assert_eq!(enc.category, entry.category);
        assert_eq!(enc.created_at, entry.created_at);
        assert_ne!(enc.password, entry.password);
        assert!(enc.notes.starts_with("pv1$"));

        let back = decrypt_entry("abc", &enc, &key).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn missing_notes_store_empty_marker() {
        let key = MasterKey::new([2u8; 32]);
        let enc = encrypt_entry(&sample(None), &key).unwrap();
        assert_eq!(enc.notes, "");
        assert_eq!(decrypt_entry("abc", &enc, &key).unwrap().notes, None);
    }

    #[test]
    fn empty_password_is_still_sealed() {
        let key = MasterKey::new([3u8; 32]);
        let mut entry = sample(None);
        entry.password = String::new();
        let enc = encrypt_entry(&entry, &key).unwrap();
        assert!(enc.password.starts_with("pv1$"));
        assert_eq!(decrypt_entry("abc", &enc, &key).unwrap().password, "");
    }

    #[test]
    fn corrupted_notes_fail_whole_entry() {
        let key = MasterKey::new([4u8; 32]);
        let mut enc = encrypt_entry(&sample(Some("n")), &key).unwrap();
        enc.notes = "pv1$AAAA".into();
        assert!(matches!(
            decrypt_entry("abc", &enc, &key),
            Err(PassVaultError::DecryptionFailed)
        ));
    }
}
