//! Password hashing

pub mod password;

pub use password::{BcryptHasher, PasswordHasher, HASH_COST};
