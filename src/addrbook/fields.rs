//! Validated scalar values.
//!
//! A [`Field`] wraps one value whose format has been checked by its [`FieldKind`].
//! The only ways to obtain or change one are [`Field::new`], [`Field::set_value`],
//! `FromStr` and `Deserialize`, and all of them run the same validation, so a stored
//! field always satisfies its kind's predicate.
//!
//! - [`Name`]: non-empty identifier, the key of a contact in the book
//! - [`Phone`]: exactly ten decimal digits
//! - [`Birthday`]: a real calendar date written as `dd-mm-yyyy`

use crate::error::{BookError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

pub const PHONE_LEN: usize = 10;
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// The format rule behind a [`Field`].
pub trait FieldKind {
    /// Used in error messages.
    const LABEL: &'static str;

    type Value: Clone + PartialEq + Eq + Hash + fmt::Debug;

    /// Validate `raw` and convert it into the stored representation.
    fn parse(raw: &str) -> Result<Self::Value>;

    /// Write the canonical text form of a stored value.
    fn render(value: &Self::Value, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

pub struct Field<K: FieldKind> {
    value: K::Value,
    kind: PhantomData<K>,
}

impl<K: FieldKind> Field<K> {
    pub fn new(raw: &str) -> Result<Self> {
        Ok(Self {
            value: K::parse(raw)?,
            kind: PhantomData,
        })
    }

    /// Replace the value. On error the previous value is kept.
    pub fn set_value(&mut self, raw: &str) -> Result<()> {
        self.value = K::parse(raw)?;
        Ok(())
    }
}

impl<K: FieldKind<Value = String>> Field<K> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<K: FieldKind> Clone for Field<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: FieldKind> PartialEq for Field<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: FieldKind> Eq for Field<K> {}

impl<K: FieldKind> Hash for Field<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: FieldKind> fmt::Debug for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::LABEL).field(&self.value).finish()
    }
}

impl<K: FieldKind> fmt::Display for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        K::render(&self.value, f)
    }
}

impl<K: FieldKind> FromStr for Field<K> {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

// Serde support - serialize as the display string
impl<K: FieldKind> Serialize for Field<K> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de, K: FieldKind> Deserialize<'de> for Field<K> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Field::new(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameKind;

impl FieldKind for NameKind {
    const LABEL: &'static str = "name";
    type Value = String;

    fn parse(raw: &str) -> Result<String> {
        if raw.trim().is_empty() {
            return Err(BookError::format(Self::LABEL, raw, "must not be empty"));
        }
        Ok(raw.to_string())
    }

    fn render(value: &String, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneKind;

impl FieldKind for PhoneKind {
    const LABEL: &'static str = "phone";
    type Value = String;

    fn parse(raw: &str) -> Result<String> {
        if raw.len() != PHONE_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookError::format(
                Self::LABEL,
                raw,
                format!("expected exactly {} digits", PHONE_LEN),
            ));
        }
        Ok(raw.to_string())
    }

    fn render(value: &String, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthdayKind;

impl FieldKind for BirthdayKind {
    const LABEL: &'static str = "birthday";
    type Value = NaiveDate;

    fn parse(raw: &str) -> Result<NaiveDate> {
        // chrono accepts unpadded days and months, so the shape is checked first.
        if !has_date_shape(raw) {
            return Err(BookError::format(
                Self::LABEL,
                raw,
                "expected dd-mm-yyyy",
            ));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| BookError::format(Self::LABEL, raw, "not a calendar date"))
    }

    fn render(value: &NaiveDate, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", value.format(BIRTHDAY_FORMAT))
    }
}

fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub type Name = Field<NameKind>;
pub type Phone = Field<PhoneKind>;
pub type Birthday = Field<BirthdayKind>;

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_ten_digits() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
        assert_eq!(phone.to_string(), "0501234567");
    }

    #[test]
    fn phone_rejects_bad_shapes() {
        for raw in [
            "",
            "123456789",
            "12345678901",
            "12345abcde",
            "123-456-78",
            " 123456789",
            "+380501234",
        ] {
            let err = Phone::new(raw).unwrap_err();
            assert!(
                matches!(err, BookError::Format { field: "phone", .. }),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn set_value_revalidates_and_keeps_old_value_on_error() {
        let mut phone = Phone::new("1111111111").unwrap();
        assert!(phone.set_value("22").is_err());
        assert_eq!(phone.as_str(), "1111111111");

        phone.set_value("2222222222").unwrap();
        assert_eq!(phone.as_str(), "2222222222");
    }

    #[test]
    fn name_must_not_be_empty() {
        assert!(Name::new("").is_err());
        assert!(Name::new("   ").is_err());
        assert_eq!(Name::new("Ann").unwrap().to_string(), "Ann");
    }

    #[test]
    fn birthday_round_trips_display() {
        for raw in ["15-03-1990", "01-01-2000", "29-02-2024", "31-12-1999"] {
            let birthday = Birthday::new(raw).unwrap();
            assert_eq!(birthday.to_string(), raw);
        }
        let birthday = Birthday::new("15-03-1990").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 3, 15).unwrap()
        );
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        for raw in ["31-02-2024", "29-02-2023", "31-04-2020", "00-01-2000", "10-13-2000"] {
            assert!(Birthday::new(raw).is_err(), "{raw} should fail");
        }
    }

    #[test]
    fn birthday_rejects_other_layouts() {
        for raw in ["1-3-2024", "2024-03-01", "01/03/2024", "01-03-24", "01-03-2024 ", ""] {
            assert!(Birthday::new(raw).is_err(), "{raw:?} should fail");
        }
    }

    #[test]
    fn parses_through_from_str() {
        let phone: Phone = "5551234567".parse().unwrap();
        assert_eq!(phone.as_str(), "5551234567");
        assert!("nope".parse::<Birthday>().is_err());
    }

    #[test]
    fn serializes_as_display_string() {
        let birthday = Birthday::new("05-06-1987").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"05-06-1987\"");
    }

    #[test]
    fn deserialization_validates() {
        let phone: Phone = serde_json::from_str("\"0123456789\"").unwrap();
        assert_eq!(phone.as_str(), "0123456789");

        assert!(serde_json::from_str::<Phone>("\"012\"").is_err());
        assert!(serde_json::from_str::<Birthday>("\"31-02-2024\"").is_err());
    }
}
