use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::model::Contact;

fn contact_mut<'a>(book: &'a mut ContactBook, name: &str) -> Result<&'a mut Contact> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

pub fn add(book: &mut ContactBook, name: &str, phone: &str) -> Result<CmdResult> {
    let contact = contact_mut(book, name)?;
    contact.add_phone(phone)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Phone {} added to {}",
        phone, name
    )));
    Ok(result.with_affected_contacts(vec![contact.clone()]))
}

pub fn edit(book: &mut ContactBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let contact = contact_mut(book, name)?;
    contact.edit_phone(old, new)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Phone {} changed to {} for {}",
        old, new, name
    )));
    Ok(result.with_affected_contacts(vec![contact.clone()]))
}

pub fn remove(book: &mut ContactBook, name: &str, phone: &str) -> Result<CmdResult> {
    let contact = contact_mut(book, name)?;
    contact.remove_phone(phone)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Phone {} removed from {}",
        phone, name
    )));
    Ok(result.with_affected_contacts(vec![contact.clone()]))
}
