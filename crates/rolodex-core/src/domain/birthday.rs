use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// External representation of a birthday, e.g. `05.03.1990`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses `DD.MM.YYYY`. The shape is checked strictly so that a valid
    /// value renders back to exactly the input.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidBirthday(raw.to_string());
        if !has_birthday_shape(raw) {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|_| invalid())?;
        if !(1..=9999).contains(&date.year()) {
            return Err(invalid());
        }
        Ok(Self(date))
    }

    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, CoreError> {
        raw.map(Self::parse).transpose()
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }
}

fn has_birthday_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl TryFrom<String> for Birthday {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
