use rolodex_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    InvalidName,
    InvalidPhone,
    InvalidBirthday,
    Core,
    NotFound,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Core(CoreError::InvalidName) => StoreErrorKind::InvalidName,
            StoreError::Core(CoreError::InvalidPhone(_)) => StoreErrorKind::InvalidPhone,
            StoreError::Core(CoreError::InvalidBirthday(_)) => StoreErrorKind::InvalidBirthday,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
        }
    }
}
