//! Community and membership entity models.

use serde::{Deserialize, Serialize};

use openbook_core::types::{CommunityId, MembershipId, UserId};

/// A community users can join and post into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Community {
    /// Unique community identifier.
    pub id: CommunityId,
    /// Unique, URL-safe community name.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Stored avatar path, relative to the media root.
    pub avatar: Option<String>,
    /// Stored cover path, relative to the media root.
    pub cover: Option<String>,
    /// Hex theme color.
    pub color: String,
}

/// A user's membership in a community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityMembership {
    /// Unique membership identifier.
    pub id: MembershipId,
    /// The member.
    pub user_id: UserId,
    /// The community.
    pub community_id: CommunityId,
    /// Whether the member administers the community.
    pub is_administrator: bool,
    /// Whether the member moderates the community.
    pub is_moderator: bool,
}

/// A community together with its loaded memberships.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityWithMemberships {
    /// The community row.
    pub community: Community,
    /// Memberships belonging to the community.
    pub memberships: Vec<CommunityMembership>,
}

impl CommunityWithMemberships {
    /// Memberships of the given user in this community.
    pub fn memberships_of(&self, user_id: UserId) -> impl Iterator<Item = &CommunityMembership> {
        let community_id = self.community.id;
        self.memberships
            .iter()
            .filter(move |m| m.user_id == user_id && m.community_id == community_id)
    }
}
