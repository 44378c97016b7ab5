//! Entry types: the plaintext `Entry`, caller-supplied `EntryInput`,
//! and the at-rest `EncryptedEntry` document.
//!
//! Only `password` and `notes` are secret. Everything else is plaintext
//! metadata so the remote store can hold it without any key.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::errors::PassVaultError;

/// The fixed set of entry categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Banking,
    Email,
    Social,
    Gaming,
    Work,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Banking,
        Category::Email,
        Category::Social,
        Category::Gaming,
        Category::Work,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Banking => "banking",
            Category::Email => "email",
            Category::Social => "social",
            Category::Gaming => "gaming",
            Category::Work => "work",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PassVaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                PassVaultError::InvalidInput(format!(
                    "unknown category '{s}' (expected banking, email, social, gaming, work or other)"
                ))
            })
    }
}

/// The fields a caller provides when creating or updating an entry.
#[derive(Clone, Default)]
pub struct EntryInput {
    pub website: String,
    pub url: Option<String>,
    pub username: String,
    pub password: String,
    pub category: Category,
    pub notes: Option<String>,
}

impl fmt::Debug for EntryInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryInput")
            .field("website", &self.website)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .field("category", &self.category)
            .field("notes", &self.notes.as_ref().map(|_| "<REDACTED>"))
            .finish()
    }
}

/// One decrypted credential record.
///
/// Secret fields are zeroed on drop and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub website: String,
    pub url: Option<String>,
    pub username: String,
    pub password: String,
    pub category: Category,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Build an entry from caller input, normalizing optional fields:
    /// empty `url`/`notes` become `None`.
    pub(crate) fn from_input(
        id: String,
        input: &EntryInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            website: input.website.trim().to_string(),
            url: non_empty(input.url.as_deref()),
            username: input.username.clone(),
            password: input.password.clone(),
            category: input.category,
            notes: non_empty(input.notes.as_deref()),
            created_at,
            updated_at,
        }
    }
}

impl Drop for Entry {
    fn drop(&mut self) {
        self.password.zeroize();
        if let Some(notes) = self.notes.as_mut() {
            notes.zeroize();
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("website", &self.website)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .field("category", &self.category)
            .field("notes", &self.notes.as_ref().map(|_| "<REDACTED>"))
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// The at-rest document stored in the remote collection.
///
/// `password` is always an envelope. `notes` is an envelope, or `""` when
/// the entry has no notes. The entry id is the document id and is not
/// repeated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedEntry {
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub username: String,
    pub password: String,
    pub category: Category,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_every_lowercase_name() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
        }
        assert!("Work".parse::<Category>().is_err());
        assert!("all".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Banking).unwrap();
        assert_eq!(json, "\"banking\"");
    }

    #[test]
    fn from_input_drops_empty_optionals() {
        let input = EntryInput {
            website: " example.com ".into(),
            url: Some(String::new()),
            username: "alice".into(),
            password: "pw".into(),
            category: Category::Email,
            notes: Some(String::new()),
        };
        let now = Utc::now();
        let entry = Entry::from_input("id1".into(), &input, now, now);

        assert_eq!(entry.website, "example.com");
        assert_eq!(entry.url, None);
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn debug_hides_secrets() {
        let now = Utc::now();
        let input = EntryInput {
            website: "site".into(),
            password: "hunter2".into(),
            notes: Some("pin 1234".into()),
            ..EntryInput::default()
        };
        let entry = Entry::from_input("x".into(), &input, now, now);
        let shown = format!("{entry:?} {input:?}");
        assert!(!shown.contains("hunter2"));
        assert!(!shown.contains("1234"));
    }

    #[test]
    fn encrypted_entry_uses_camel_case_iso_timestamps() {
        let now = Utc::now();
        let enc = EncryptedEntry {
            website: "w".into(),
            url: None,
            username: "u".into(),
            password: "pv1$abc".into(),
            category: Category::Other,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        };
        let json: serde_json::Value = serde_json::to_value(&enc).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("url").is_none());
        let ts = json["updatedAt"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }
}
