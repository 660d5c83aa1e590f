//! # Rentora Auth Service
//!
//! Signup/login backend for the Rentora student-housing landing page.
//! Two JSON endpoints over a relational account store, passwords hashed
//! with bcrypt. The landing page itself is an external caller.
//!
//! ## Architecture
//!
//! - **domain**: Account entity, role, repository trait, error types
//! - **infrastructure**: SeaORM store (entities, migrations, repository)
//! - **auth**: bcrypt password hashing behind a small trait seam
//! - **api**: axum router, handlers and DTOs with Swagger documentation

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use api::create_api_router;
