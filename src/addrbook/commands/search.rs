use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &ContactBook, term: &str) -> Result<CmdResult> {
    let names = book.search(term);
    let contacts = names
        .iter()
        .filter_map(|name| book.find(name).cloned())
        .collect();

    let mut result = CmdResult::default();
    if names.is_empty() {
        result.add_message(CmdMessage::info(format!("No contacts match '{}'", term)));
    }
    Ok(result
        .with_listed_names(names)
        .with_affected_contacts(contacts))
}
