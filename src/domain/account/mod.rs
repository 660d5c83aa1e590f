//! Account aggregate
//!
//! Contains the Account entity, DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto_create;

pub use dto_create::NewAccountDto;
pub use model::{Account, AccountRole};
pub use repository::AccountRepository;
