use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name is required")]
    InvalidName,
    #[error("invalid phone: {0}")]
    InvalidPhone(String),
    #[error("invalid birthday: {0}")]
    InvalidBirthday(String),
    #[error("invalid window days: {0}")]
    InvalidWindowDays(i64),
}
