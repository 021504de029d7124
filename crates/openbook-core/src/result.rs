//! Convenience result type alias for Openbook.

use crate::error::AppError;

/// A specialized `Result` type for Openbook operations.
pub type AppResult<T> = Result<T, AppError>;
