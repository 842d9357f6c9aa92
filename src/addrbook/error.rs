use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Invalid {field} '{value}': {reason}")]
    Format {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Phone {phone} not found for {contact}")]
    PhoneNotFound { contact: String, phone: String },

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt data: {0}")]
    CorruptData(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl BookError {
    pub(crate) fn format(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        BookError::Format {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// True for the errors a caller gets when a referenced phone or contact is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BookError::PhoneNotFound { .. } | BookError::ContactNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
