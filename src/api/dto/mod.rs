//! API DTOs

pub mod auth;

pub use auth::*;
