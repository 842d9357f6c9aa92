use super::{read_snapshot, write_snapshot, BookStore};
use crate::book::Contacts;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store: one snapshot file, created on first save.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load_contacts(&self) -> Result<Contacts> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no snapshot yet, starting empty");
            return Ok(Contacts::new());
        }
        read_snapshot(&self.path)
    }

    fn save_contacts(&mut self, contacts: &Contacts) -> Result<()> {
        self.ensure_parent_dir()?;
        write_snapshot(&self.path, contacts)
    }
}
