//! # openbook-core
//!
//! Core crate for the Openbook API layer. Contains configuration schemas,
//! typed identifiers, field limits, the reference lookup trait, logging
//! setup, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Openbook crates.

pub mod config;
pub mod error;
pub mod limits;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
