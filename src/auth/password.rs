//! Password hashing utilities

use crate::domain::{DomainError, DomainResult};

/// Fixed bcrypt cost factor for new password digests.
pub const HASH_COST: u32 = 10;

/// Hashing seam for the request handlers.
///
/// Object-safe so handler tests can run against a double instead of
/// paying for real bcrypt rounds.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> DomainResult<String>;
    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool>;
}

/// bcrypt-backed hasher
#[derive(Debug, Clone, Default)]
pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, HASH_COST).map_err(|e| DomainError::Crypto(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(password, hash).map_err(|e| DomainError::Crypto(e.to_string()))
    }
}
