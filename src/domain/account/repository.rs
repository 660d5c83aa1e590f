use async_trait::async_trait;

use super::{Account, NewAccountDto};
use crate::domain::DomainResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Look up a single account by its unique email.
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>>;

    /// Insert a new account row and return it with the generated id.
    async fn insert(&self, dto: NewAccountDto) -> DomainResult<Account>;
}
