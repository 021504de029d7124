//! Member listing exclusion keywords.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Staff group that can be left out of a community member listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunityMembersExclusion {
    /// Leave out community administrators.
    Administrators,
    /// Leave out community moderators.
    Moderators,
}

impl CommunityMembersExclusion {
    /// Return the wire keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrators => "administrators",
            Self::Moderators => "moderators",
        }
    }
}

impl fmt::Display for CommunityMembersExclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CommunityMembersExclusion {
    type Err = openbook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrators" => Ok(Self::Administrators),
            "moderators" => Ok(Self::Moderators),
            _ => Err(openbook_core::AppError::field_validation(
                "exclude",
                format!("\"{s}\" is not a valid choice."),
            )),
        }
    }
}
