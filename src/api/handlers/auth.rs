//! Authentication API handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, warn};

use crate::api::dto::{ErrorResponse, LoginRequest, SignupRequest, UserResponse};
use crate::api::error::ApiError;
use crate::auth::PasswordHasher;
use crate::domain::{AccountRepository, DomainError, NewAccountDto};

/// Auth state for authentication handlers
///
/// Constructed once at startup and cloned per request; handlers share
/// the store client and the hasher, nothing else.
#[derive(Clone)]
pub struct AuthHandlerState {
    pub repo: Arc<dyn AccountRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
}

/// Регистрация нового аккаунта
///
/// Все четыре поля обязательны. Email должен быть уникальным:
/// повторная регистрация возвращает 409.
#[utoipa::path(
    post,
    path = "/signup",
    tag = "Authentication",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Аккаунт создан", body = UserResponse),
        (status = 400, description = "Не все поля заполнены", body = ErrorResponse),
        (status = 409, description = "Email уже зарегистрирован", body = ErrorResponse),
        (status = 500, description = "Ошибка хранилища или хэширования", body = ErrorResponse)
    )
)]
pub async fn signup(
    State(state): State<AuthHandlerState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    // Presence checks before any store access
    let Some(role) = request.role else {
        return Err(ApiError::Validation("All fields required"));
    };
    if request.email.is_empty() || request.password.is_empty() || request.name.is_empty() {
        return Err(ApiError::Validation("All fields required"));
    }

    // Check if the email is already registered
    let existing = state
        .repo
        .find_by_email(&request.email)
        .await
        .map_err(|e| match e {
            DomainError::Database(detail) => ApiError::Database(detail),
            other => ApiError::Database(other.to_string()),
        })?;

    if existing.is_some() {
        return Err(ApiError::EmailTaken);
    }

    // Hash the password before any write
    let password_hash = state
        .hasher
        .hash(&request.password)
        .map_err(|_| ApiError::Hashing)?;

    let account = state
        .repo
        .insert(NewAccountDto {
            email: request.email,
            password_hash,
            name: request.name,
            role,
        })
        .await
        .map_err(|e| match e {
            // Lost the race on the unique email index
            DomainError::Conflict(_) => ApiError::EmailTaken,
            DomainError::Database(detail) => ApiError::CreateFailed(detail),
            other => ApiError::CreateFailed(other.to_string()),
        })?;

    info!(email = %account.email, role = account.role.as_str(), "account created");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: account.into(),
        }),
    ))
}

/// Вход по email и паролю
///
/// При любой причине отказа (неизвестный email, ошибка поиска, неверный
/// пароль) возвращается один и тот же ответ 401 — вызывающая сторона не
/// может выяснить, зарегистрирован ли email.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Успешный вход", body = UserResponse),
        (status = 400, description = "Не указан email или пароль", body = ErrorResponse),
        (status = 401, description = "Неверный email или пароль", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation("Email and password required"));
    }

    // Missing row and lookup failure collapse into the same generic error
    let account = match state.repo.find_by_email(&request.email).await {
        Ok(Some(account)) => account,
        Ok(None) | Err(_) => {
            warn!(email = %request.email, "login rejected");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let password_valid = state
        .hasher
        .verify(&request.password, &account.password_hash)
        .unwrap_or(false);
    if !password_valid {
        warn!(email = %request.email, "login rejected");
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(UserResponse {
        user: account.into(),
    }))
}

// ── Tests ──────────────────────────────────────────────────────
