use crate::model::Contact;

pub mod birthdays;
pub mod config;
pub mod contact;
pub mod list;
pub mod phones;
pub mod search;

/// How prominently a client should show a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        let content = content.into();
        Self { level, content }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }
}

/// A contact's name and the days left until their next birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayEntry {
    pub name: String,
    pub days: i64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_names: Vec<String>,
    pub pages: Vec<Vec<Contact>>,
    pub birthdays: Vec<BirthdayEntry>,
    /// `(key, value)` pairs from `config.json`
    pub config_entries: Vec<(String, String)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_names(mut self, names: Vec<String>) -> Self {
        self.listed_names = names;
        self
    }

    pub fn with_pages(mut self, pages: Vec<Vec<Contact>>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<BirthdayEntry>) -> Self {
        self.birthdays = birthdays;
        self
    }

    pub fn with_config_entries(mut self, entries: Vec<(String, String)>) -> Self {
        self.config_entries = entries;
        self
    }
}
