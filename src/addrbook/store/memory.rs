use super::{decode, encode, BookStore};
use crate::book::Contacts;
use crate::error::{BookError, Result};
use std::io;

/// In-memory store for testing.
///
/// Keeps the encoded snapshot rather than the map itself, so everything that passes
/// through it goes through the same encode/decode path as a file.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw snapshot, valid or not.
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            snapshot: Some(snapshot.into()),
            simulate_write_error: false,
        }
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    /// Make every following save fail with an IO error.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl BookStore for InMemoryStore {
    fn load_contacts(&self) -> Result<Contacts> {
        match &self.snapshot {
            Some(content) => decode(content),
            None => Ok(Contacts::new()),
        }
    }

    fn save_contacts(&mut self, contacts: &Contacts) -> Result<()> {
        if self.simulate_write_error {
            return Err(BookError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write error",
            )));
        }
        self.snapshot = Some(encode(contacts)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::book::ContactBook;
    use crate::model::Contact;

    /// Builds books for tests without repeating the add/unwrap dance.
    #[derive(Default)]
    pub struct BookFixture {
        pub book: ContactBook,
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut contact = Contact::new(name).unwrap();
            for phone in phones {
                contact.add_phone(phone).unwrap();
            }
            self.book.add_record(contact);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            self.book
                .find_mut(name)
                .expect("fixture contact must exist")
                .set_birthday(birthday)
                .unwrap();
            self
        }

        pub fn with_numbered(mut self, count: usize) -> Self {
            for i in 0..count {
                let contact = Contact::new(&format!("Contact {:02}", i + 1)).unwrap();
                self.book.add_record(contact);
            }
            self
        }

        pub fn build(self) -> ContactBook {
            self.book
        }
    }
}
