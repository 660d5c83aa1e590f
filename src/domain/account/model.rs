use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account role: which side of the housing marketplace the account is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Student,
    Landlord,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Landlord => "landlord",
        }
    }
}

/// Account entity
///
/// `password_hash` stays inside the process; handlers map to
/// [`crate::api::dto::AccountInfo`] before replying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Store-assigned identifier, immutable once created
    pub id: String,
    /// Unique lookup key
    pub email: String,
    /// bcrypt digest of the password
    pub password_hash: String,
    /// Display name
    pub name: String,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
}
