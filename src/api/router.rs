//! API Router with Swagger UI

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::{AccountInfo, ErrorResponse, LoginRequest, SignupRequest, UserResponse};
use crate::api::error::ApiError;
use crate::api::handlers::auth::{self, AuthHandlerState};
use crate::api::handlers::health;
use crate::auth::PasswordHasher;
use crate::domain::{AccountRepository, AccountRole};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::signup,
        auth::login,
    ),
    components(schemas(
        SignupRequest,
        LoginRequest,
        AccountInfo,
        AccountRole,
        UserResponse,
        ErrorResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "Authentication", description = "Email/password signup and login"),
        (name = "Health", description = "Service availability"),
    )
)]
struct ApiDoc;

/// Rejects any method the route does not serve, before the store or the
/// hasher is touched.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Build the application router.
///
/// The store client and the hasher are constructed once at startup and
/// injected here; handlers never build their own.
pub fn create_api_router(
    repo: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
) -> Router {
    let state = AuthHandlerState { repo, hasher };

    // The landing page calls these endpoints from the browser
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check))
        .route("/signup", post(auth::signup).fallback(method_not_allowed))
        .route("/login", post(auth::login).fallback(method_not_allowed))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
