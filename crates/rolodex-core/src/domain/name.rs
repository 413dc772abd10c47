use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contact name; the key a contact is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if raw.trim().is_empty() {
            return Err(CoreError::InvalidName);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Name;
    use crate::error::CoreError;

    #[test]
    fn name_keeps_value() {
        let name = Name::new("Ada").unwrap();
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn name_rejects_empty_and_blank() {
        assert_eq!(Name::new(""), Err(CoreError::InvalidName));
        assert_eq!(Name::new("   "), Err(CoreError::InvalidName));
    }
}
