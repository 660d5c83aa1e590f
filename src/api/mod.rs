//! REST API module
//!
//! Provides the signup/login HTTP endpoints consumed by the Rentora
//! landing page, plus health and Swagger documentation.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use router::create_api_router;
