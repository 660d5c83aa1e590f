//! API error taxonomy and HTTP mapping
//!
//! Every failure path returns a JSON body with a single `error` string.
//! All errors are terminal for the request; nothing is retried here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::dto::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Email already registered")]
    EmailTaken,

    /// Single message for every failed login. Unknown email, lookup
    /// failure and wrong password must stay indistinguishable to the
    /// caller.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Password hashing failed")]
    Hashing,

    #[error("Failed to create user: {0}")]
    CreateFailed(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Hashing | Self::CreateFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ApiError::Validation("All fields required").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::EmailTaken.status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Hashing.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn message_texts_match_contract() {
        assert_eq!(ApiError::EmailTaken.to_string(), "Email already registered");
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            ApiError::Database("boom".into()).to_string(),
            "Database error: boom"
        );
        assert_eq!(ApiError::Hashing.to_string(), "Password hashing failed");
        assert_eq!(
            ApiError::CreateFailed("boom".into()).to_string(),
            "Failed to create user: boom"
        );
    }
}
