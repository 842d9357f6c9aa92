use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::model::Contact;

/// Build a contact from raw values and store it, replacing any contact with that name.
///
/// Every value is validated before the book is touched.
pub fn add<P: AsRef<str>>(
    book: &mut ContactBook,
    name: &str,
    phones: &[P],
    birthday: Option<&str>,
) -> Result<CmdResult> {
    let mut contact = Contact::new(name)?;
    for phone in phones {
        contact.add_phone(phone.as_ref())?;
    }
    if let Some(raw) = birthday {
        contact.set_birthday(raw)?;
    }

    let mut result = CmdResult::default();
    let label = contact.name().to_string();
    match book.add_record(contact.clone()) {
        Some(_) => result.add_message(CmdMessage::warning(format!("Contact replaced: {}", label))),
        None => result.add_message(CmdMessage::success(format!("Contact added: {}", label))),
    }
    Ok(result.with_affected_contacts(vec![contact]))
}

pub fn show(book: &ContactBook, name: &str) -> Result<CmdResult> {
    let contact = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    Ok(CmdResult::default().with_affected_contacts(vec![contact.clone()]))
}

pub fn delete(book: &mut ContactBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.delete(name) {
        Some(contact) => {
            result.add_message(CmdMessage::success(format!("Contact deleted: {}", name)));
            result.affected_contacts.push(contact);
        }
        None => result.add_message(CmdMessage::info(format!("No contact named {}", name))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn adds_contact_with_phones_and_birthday() {
        let mut book = ContactBook::new();
        let result = add(&mut book, "Ann", &["5551234567"], Some("15-03-1990")).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        let ann = book.find("Ann").unwrap();
        assert_eq!(ann.phones()[0].as_str(), "5551234567");
        assert_eq!(ann.birthday().unwrap().to_string(), "15-03-1990");
        assert_eq!(result.affected_contacts, vec![ann.clone()]);
    }

    #[test]
    fn add_replaces_existing_contact() {
        let mut book = BookFixture::new()
            .with_contact("Ann", &["1111111111"])
            .build();
        let result = add(&mut book, "Ann", &["2222222222"], None).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(book.find("Ann").unwrap().phones().len(), 1);
        assert!(book.find("Ann").unwrap().find_phone("2222222222").is_some());
    }

    #[test]
    fn add_with_invalid_phone_leaves_book_untouched() {
        let mut book = BookFixture::new()
            .with_contact("Ann", &["1111111111"])
            .build();
        let before = book.clone();

        let err = add(&mut book, "Ann", &["2222222222", "12"], None).unwrap_err();
        assert!(matches!(err, BookError::Format { .. }));
        assert_eq!(book, before);
    }

    #[test]
    fn show_missing_contact_is_not_found() {
        let book = ContactBook::new();
        assert!(show(&book, "Ann").unwrap_err().is_not_found());
    }

    #[test]
    fn delete_missing_contact_is_not_an_error() {
        let mut book = BookFixture::new().with_contact("Ann", &[]).build();
        let result = delete(&mut book, "Bo").unwrap();
        assert!(result.affected_contacts.is_empty());
        assert_eq!(book.len(), 1);

        let result = delete(&mut book, "Ann").unwrap();
        assert_eq!(result.affected_contacts.len(), 1);
        assert!(book.is_empty());
    }
}
