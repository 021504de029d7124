//! Profile badge entity.

use serde::{Deserialize, Serialize};

use openbook_core::types::BadgeId;

/// A badge shown on a user's profile (verified, founder, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Unique badge identifier.
    pub id: BadgeId,
    /// Machine keyword, e.g. `"VERIFIED"`.
    pub keyword: String,
    /// Human readable description of the keyword.
    pub keyword_description: Option<String>,
}
