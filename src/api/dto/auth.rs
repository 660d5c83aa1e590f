//! Request and response bodies for the signup and login endpoints

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Account, AccountRole};

/// Запрос на регистрацию аккаунта
///
/// Все четыре поля обязательны. Строковые поля по умолчанию пустые,
/// поэтому отсутствующее поле и пустая строка отклоняются одинаково.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "email": "a@x.edu",
    "password": "pw123456",
    "name": "A",
    "role": "student"
}))]
pub struct SignupRequest {
    /// Email (уникальный, ключ для входа)
    #[serde(default)]
    pub email: String,
    /// Пароль в открытом виде, хэшируется до записи
    #[serde(default)]
    pub password: String,
    /// Отображаемое имя
    #[serde(default)]
    pub name: String,
    /// Роль: `student` или `landlord`
    pub role: Option<AccountRole>,
}

/// Запрос на вход
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "email": "a@x.edu",
    "password": "pw123456"
}))]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Несекретные поля аккаунта, возвращаемые вызывающей стороне
///
/// Хэш пароля сюда не попадает никогда.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountInfo {
    /// Уникальный идентификатор аккаунта (UUID)
    pub id: String,
    /// Email
    pub email: String,
    /// Отображаемое имя
    pub name: String,
    /// Роль: `student` или `landlord`
    pub role: AccountRole,
}

impl From<Account> for AccountInfo {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            name: account.name,
            role: account.role,
        }
    }
}

/// Успешный ответ: `{"user": {...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub user: AccountInfo,
}

/// Ответ с ошибкой: `{"error": "..."}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Описание ошибки
    pub error: String,
}
