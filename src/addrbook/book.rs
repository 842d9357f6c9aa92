//! # Contact Book
//!
//! [`ContactBook`] owns every [`Contact`], keyed by the contact's display name. Keys are
//! unique: adding a contact whose name is already present replaces the old entry.
//!
//! Iteration is in ascending name order. Pagination and search both walk the book in
//! that order, so the same book always produces the same pages and results.
//!
//! ## Persistence
//!
//! [`ContactBook::save`] and [`ContactBook::load`] move the name → contact mapping to and
//! from a file path supplied by the caller. Loading decodes into a fresh map first and
//! only swaps it in once the whole snapshot validated, so a failed load leaves the book
//! as it was.

use crate::error::{BookError, Result};
use crate::model::Contact;
use crate::store;
use chrono::NaiveDate;
use std::collections::btree_map::{self, BTreeMap};
use std::path::Path;
use tracing::debug;

/// The name → contact mapping that gets persisted.
pub type Contacts = BTreeMap<String, Contact>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Contacts,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Contacts) -> Self {
        Self { contacts }
    }

    /// Insert `contact` under its name, returning the contact it replaced, if any.
    pub fn add_record(&mut self, contact: Contact) -> Option<Contact> {
        self.contacts.insert(contact.name().to_string(), contact)
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(name)
    }

    /// Remove the contact named `name`. Absent names are not an error.
    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        self.contacts.remove(name)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contacts.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Contacts {
        &self.contacts
    }

    /// Split the book into pages of at most `page_size` contacts.
    ///
    /// Every call starts again from the first contact. A book of `n` contacts yields
    /// `ceil(n / page_size)` pages; an empty book yields none.
    pub fn paginate(&self, page_size: usize) -> Result<Pages<'_>> {
        if page_size == 0 {
            return Err(BookError::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }
        Ok(Pages {
            inner: self.contacts.values(),
            page_size,
        })
    }

    /// Names of contacts whose name or any phone contains `term`.
    pub fn search(&self, term: &str) -> Vec<String> {
        self.contacts
            .iter()
            .filter(|(_, contact)| contact.matches(term))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Contacts whose next birthday is at most `within_days` days after `today`,
    /// soonest first.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<(String, i64)> {
        let mut upcoming: Vec<(String, i64)> = self
            .contacts
            .iter()
            .filter_map(|(name, contact)| {
                contact
                    .days_to_next_birthday(today)
                    .filter(|days| *days <= within_days)
                    .map(|days| (name.clone(), days))
            })
            .collect();
        upcoming.sort_by(|(name_a, days_a), (name_b, days_b)| {
            days_a.cmp(days_b).then_with(|| name_a.cmp(name_b))
        });
        upcoming
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        store::write_snapshot(path, &self.contacts)?;
        debug!(path = %path.display(), contacts = self.contacts.len(), "saved contact book");
        Ok(())
    }

    /// Replace the whole book with the snapshot at `path`.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contacts = store::read_snapshot(path)?;
        debug!(path = %path.display(), contacts = contacts.len(), "loaded contact book");
        self.contacts = contacts;
        Ok(())
    }
}

/// Lazy page iterator returned by [`ContactBook::paginate`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    inner: btree_map::Values<'a, String, Contact>,
    page_size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Contact>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<&'a Contact> = self.inner.by_ref().take(self.page_size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.inner.len().div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}
