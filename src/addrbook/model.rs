use crate::error::{BookError, Result};
use crate::fields::{Birthday, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One person's entry: a name, phone numbers in insertion order, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Contact {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Remove the first phone equal to `raw`.
    pub fn remove_phone(&mut self, raw: &str) -> Result<Phone> {
        let pos = self.phone_position(raw)?;
        Ok(self.phones.remove(pos))
    }

    /// Replace the first phone equal to `old` with `new`. The list is untouched on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self.phone_position(old)?;
        self.phones[pos].set_value(new)
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Days from `today` until the next occurrence of the birthday, 0 when it is today.
    ///
    /// Returns `None` when no birthday is set. A 29 February birthday falls on
    /// 1 March in years without that date.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?.date();
        let mut next = anniversary_in(birthday, today.year());
        if next < today {
            next = anniversary_in(birthday, today.year() + 1);
        }
        Some((next - today).num_days())
    }

    /// Same as [`Contact::days_to_next_birthday`], counted from the local calendar date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_next_birthday(Local::now().date_naive())
    }

    /// True when `term` is a substring of the name or of any phone.
    pub fn matches(&self, term: &str) -> bool {
        self.name.as_str().contains(term) || self.phones.iter().any(|p| p.as_str().contains(term))
    }

    fn phone_position(&self, raw: &str) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == raw)
            .ok_or_else(|| BookError::PhoneNotFound {
                contact: self.name.to_string(),
                phone: raw.to_string(),
            })
    }
}

fn anniversary_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birthday)
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
