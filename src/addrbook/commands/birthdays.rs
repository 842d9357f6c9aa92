use crate::book::ContactBook;
use crate::commands::{BirthdayEntry, CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use chrono::NaiveDate;

pub fn set(book: &mut ContactBook, name: &str, birthday: &str) -> Result<CmdResult> {
    let contact = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    contact.set_birthday(birthday)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Birthday {} set for {}",
        birthday, name
    )));
    Ok(result.with_affected_contacts(vec![contact.clone()]))
}

/// Days until one contact's next birthday. A missing birthday is reported, not an error.
pub fn days(book: &ContactBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let contact = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    let mut result = CmdResult::default();
    match contact.days_to_next_birthday(today) {
        Some(days) => {
            result.birthdays.push(BirthdayEntry {
                name: name.to_string(),
                days,
            });
            let message = match days {
                0 => format!("{}'s birthday is today", name),
                1 => format!("1 day until {}'s birthday", name),
                n => format!("{} days until {}'s birthday", n, name),
            };
            result.add_message(CmdMessage::info(message));
        }
        None => result.add_message(CmdMessage::warning(format!(
            "{} has no birthday set",
            name
        ))),
    }
    Ok(result)
}

pub fn upcoming(book: &ContactBook, today: NaiveDate, within_days: i64) -> Result<CmdResult> {
    let entries: Vec<BirthdayEntry> = book
        .upcoming_birthdays(today, within_days)
        .into_iter()
        .map(|(name, days)| BirthdayEntry { name, days })
        .collect();

    let mut result = CmdResult::default();
    if entries.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No birthdays in the next {} days",
            within_days
        )));
    }
    Ok(result.with_birthdays(entries))
}
