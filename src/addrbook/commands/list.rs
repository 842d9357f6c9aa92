use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;

pub fn run(book: &ContactBook, page_size: usize) -> Result<CmdResult> {
    let pages: Vec<Vec<Contact>> = book
        .paginate(page_size)?
        .map(|page| page.into_iter().cloned().collect())
        .collect();

    let mut result = CmdResult::default();
    if pages.is_empty() {
        result.add_message(CmdMessage::info("No contacts yet."));
    }
    Ok(result.with_pages(pages))
}
