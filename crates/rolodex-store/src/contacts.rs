use crate::error::{Result, StoreError};
use chrono::NaiveDateTime;
use rolodex_core::domain::{Birthday, Phone, Record};
use rolodex_core::rules::{upcoming_birthdays, BirthdayReport, WindowPolicy};
use std::collections::HashMap;

/// In-memory address book keyed by contact name.
///
/// Records keep the position of their first insertion; adding a name that is
/// already present replaces the whole record in place.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, phone: &str, birthday: Option<&str>) -> Result<&Record> {
        let record = Record::new(name, phone, birthday)?;
        let slot = match self.index.get(name).copied() {
            Some(idx) => {
                self.records[idx] = record;
                idx
            }
            None => {
                let idx = self.records.len();
                self.records.push(record);
                self.index.insert(name.to_string(), idx);
                idx
            }
        };
        Ok(&self.records[slot])
    }

    pub fn edit_phone(&mut self, name: &str, phone: &str) -> Result<&Record> {
        let record = self.get_mut(name)?;
        record.set_phone(phone)?;
        Ok(&*record)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<&Record> {
        let record = self.get_mut(name)?;
        record.set_birthday(birthday)?;
        Ok(&*record)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    pub fn find_phone(&self, name: &str) -> Option<&Phone> {
        self.get(name).map(Record::phone)
    }

    /// `None` when the contact is unknown, `Some(None)` when it has no birthday.
    pub fn show_birthday(&self, name: &str) -> Option<Option<Birthday>> {
        self.get(name).map(Record::birthday)
    }

    pub fn all(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn upcoming_birthdays(&self, now: NaiveDateTime, policy: WindowPolicy) -> BirthdayReport {
        upcoming_birthdays(&self.records, now, policy)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Record> {
        let idx = *self
            .index
            .get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        Ok(&mut self.records[idx])
    }
}
