pub mod contacts;
pub mod error;

pub use contacts::ContactStore;
pub use error::{Result, StoreError, StoreErrorKind};
