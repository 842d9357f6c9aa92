//! # API Facade
//!
//! [`BookApi`] is the single entry point UI clients use. It owns the loaded
//! [`ContactBook`] and a [`BookStore`], dispatches each call to the matching command,
//! and writes the book back after every successful mutation.
//!
//! Mutations run against a copy of the book. The copy replaces the live book only once
//! the store accepted it, so a failed save never leaves memory ahead of disk.
//!
//! The facade holds no business logic and never prints; it returns [`CmdResult`]s.

use crate::book::ContactBook;
use crate::commands::{self, birthdays, contact, list, phones, search};
use crate::error::Result;
use crate::store::BookStore;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::info;

pub struct BookApi<S: BookStore> {
    store: S,
    book: ContactBook,
    config_dir: PathBuf,
}

impl<S: BookStore> BookApi<S> {
    /// Load the book from `store`.
    pub fn open(store: S, config_dir: impl Into<PathBuf>) -> Result<Self> {
        let book = ContactBook::from_contacts(store.load_contacts()?);
        Ok(Self {
            store,
            book,
            config_dir: config_dir.into(),
        })
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn add_contact<P: AsRef<str>>(
        &mut self,
        name: &str,
        phones: &[P],
        birthday: Option<&str>,
    ) -> Result<CmdResult> {
        self.mutate(|book| contact::add(book, name, phones, birthday))
    }

    pub fn show_contact(&self, name: &str) -> Result<CmdResult> {
        contact::show(&self.book, name)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        self.mutate(|book| contact::delete(book, name))
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        self.mutate(|book| phones::add(book, name, phone))
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        self.mutate(|book| phones::edit(book, name, old, new))
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        self.mutate(|book| phones::remove(book, name, phone))
    }

    pub fn set_birthday(&mut self, name: &str, birthday: &str) -> Result<CmdResult> {
        self.mutate(|book| birthdays::set(book, name, birthday))
    }

    pub fn days_to_birthday(&self, name: &str, today: NaiveDate) -> Result<CmdResult> {
        birthdays::days(&self.book, name, today)
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Result<CmdResult> {
        birthdays::upcoming(&self.book, today, within_days)
    }

    pub fn list(&self, page_size: usize) -> Result<CmdResult> {
        list::run(&self.book, page_size)
    }

    pub fn search(&self, term: &str) -> Result<CmdResult> {
        search::run(&self.book, term)
    }

    pub fn show_config(&self, key: Option<&str>) -> Result<CmdResult> {
        commands::config::show(&self.config_dir, key)
    }

    pub fn set_config(&mut self, key: &str, value: &str) -> Result<CmdResult> {
        commands::config::set(&self.config_dir, key, value)
    }

    fn mutate<F>(&mut self, op: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut ContactBook) -> Result<CmdResult>,
    {
        let mut next = self.book.clone();
        let result = op(&mut next)?;
        self.store.save_contacts(next.as_map())?;
        self.book = next;
        info!(contacts = self.book.len(), "contact book saved");
        Ok(result)
    }
}

pub use commands::{BirthdayEntry, CmdMessage, CmdResult, MessageLevel};
