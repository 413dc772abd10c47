use crate::domain::{Birthday, Name, Phone};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact. The name never changes once the record exists; phone and
/// birthday are replaced through the setters, which validate first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phone: Phone,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str, phone: &str, birthday: Option<&str>) -> Result<Self, CoreError> {
        let name = Name::new(name)?;
        let phone = Phone::new(phone)?;
        let birthday = Birthday::parse_optional(birthday)?;
        Ok(Self {
            name,
            phone,
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn set_phone(&mut self, phone: &str) -> Result<(), CoreError> {
        self.phone = Phone::new(phone)?;
        Ok(())
    }

    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phone: {}, birthday: ", self.name, self.phone)?;
        if let Some(birthday) = self.birthday {
            write!(f, "{birthday}")?;
        }
        Ok(())
    }
}
