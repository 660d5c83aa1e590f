//! Domain layer - core entities, errors and repository traits

pub mod account;
pub mod error;

pub use account::{Account, AccountRepository, AccountRole, NewAccountDto};
pub use error::{DomainError, DomainResult};
