//! User and profile entity models.

use serde::{Deserialize, Serialize};

use openbook_core::types::{ProfileId, UserId};

use super::badge::Badge;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// The user's public profile.
    pub profile: UserProfile,
}

/// The public profile attached to every user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique profile identifier.
    pub id: ProfileId,
    /// Display name.
    pub name: String,
    /// Stored avatar path, relative to the media root.
    pub avatar: Option<String>,
    /// Badges awarded to the user.
    #[serde(default)]
    pub badges: Vec<Badge>,
}
