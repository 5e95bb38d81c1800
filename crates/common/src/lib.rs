//! Shared configuration, error handling, and extractors for the portfolio service
//!
//! This crate provides common functionality used across the portfolio workspace:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Request extractors with uniform rejection bodies
//! - State machine error types

pub mod config;
pub mod error;
pub mod extractors;
pub mod state;

pub use error::{Error, Result};
pub use extractors::{JsonBody, QueryParams};
pub use state::StateError;
