//! # API Shared
//!
//! Shared utilities and definitions for the article APIs.
//!
//! Contains:
//! - JSON wire types (`dto` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`; kept separate so another surface can reuse the same wire contract.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
