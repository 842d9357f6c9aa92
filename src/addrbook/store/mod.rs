//! # Storage Layer
//!
//! A contact book is persisted as a single snapshot: the name → contact mapping encoded
//! as pretty-printed JSON.
//!
//! ```text
//! {
//!   "Ann": { "name": "Ann", "phones": ["5551234567"], "birthday": "15-03-1990" },
//!   "Bo":  { "name": "Bo",  "phones": [] }
//! }
//! ```
//!
//! Only the mapping is written, never the book itself. Fields are stored as their display
//! strings and decoded through their validating constructors, so a hand-edited file with
//! a nine-digit phone is rejected as corrupt instead of loading an invalid contact.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a snapshot file at a fixed path, written atomically
//! - [`memory::InMemoryStore`]: keeps the encoded snapshot in memory, for tests

use crate::book::Contacts;
use crate::error::{BookError, Result};
use std::io;
use std::path::Path;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for contact book persistence.
pub trait BookStore {
    /// Load the stored mapping. A store that has never been written is empty.
    fn load_contacts(&self) -> Result<Contacts>;

    /// Replace the stored mapping.
    fn save_contacts(&mut self, contacts: &Contacts) -> Result<()>;
}

pub fn encode(contacts: &Contacts) -> Result<String> {
    Ok(serde_json::to_string_pretty(contacts)?)
}

/// Decode a snapshot, checking that every key matches the name of the contact under it.
pub fn decode(content: &str) -> Result<Contacts> {
    let contacts: Contacts =
        serde_json::from_str(content).map_err(|e| BookError::CorruptData(e.to_string()))?;

    if let Some((key, contact)) = contacts
        .iter()
        .find(|(key, contact)| key.as_str() != contact.name().as_str())
    {
        return Err(BookError::CorruptData(format!(
            "entry '{}' holds contact '{}'",
            key,
            contact.name()
        )));
    }

    Ok(contacts)
}

pub fn read_snapshot(path: &Path) -> Result<Contacts> {
    let content = std::fs::read_to_string(path)?;
    decode(&content)
}

/// Write a snapshot through a temporary sibling file so the destination is never
/// left half written.
pub fn write_snapshot(path: &Path, contacts: &Contacts) -> Result<()> {
    let content = encode(contacts)?;

    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a file path: {}", path.display()),
        )
    })?;
    let tmp_file = path.with_file_name(format!(
        ".{}-{}.tmp",
        file_name.to_string_lossy(),
        Uuid::new_v4()
    ));

    let written =
        std::fs::write(&tmp_file, content).and_then(|()| std::fs::rename(&tmp_file, path));
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp_file);
        return Err(e.into());
    }
    Ok(())
}
