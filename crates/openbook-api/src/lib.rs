//! # openbook-api
//!
//! Serialization layer of the Openbook REST API.
//!
//! Provides request DTOs with field and reference validation, read-model
//! projections from entities to response DTOs (including the polymorphic
//! notification renderer), the axum extractors that run validation, and the
//! error-to-HTTP mapping.

pub mod context;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod validators;

pub use context::RenderContext;
pub use error::ApiError;
pub use extractors::{ValidatedJson, ValidatedQuery};
