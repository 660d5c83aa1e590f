use super::AccountRole;

#[derive(Debug, Clone)]
pub struct NewAccountDto {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: AccountRole,
}
