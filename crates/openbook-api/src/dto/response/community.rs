//! Community membership read models.

use serde::Serialize;

use openbook_core::types::{CommunityId, MembershipId, UserId};
use openbook_entity::community::{CommunityMembership, CommunityWithMemberships};
use openbook_entity::user::User;

use crate::context::RenderContext;

/// Profile summary shown in member listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityMemberProfileResponse {
    /// Absolute avatar URL.
    pub avatar: Option<String>,
    /// Display name.
    pub name: String,
}

/// A community member as shown in member listings and search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityMemberResponse {
    /// User id.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Profile summary.
    pub profile: CommunityMemberProfileResponse,
}

impl CommunityMemberResponse {
    /// Project a user into a member summary.
    pub fn render(user: &User, ctx: &RenderContext) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            profile: CommunityMemberProfileResponse {
                avatar: ctx.optional_media_url(user.profile.avatar.as_deref()),
                name: user.profile.name.clone(),
            },
        }
    }

    /// Project a page of users.
    pub fn render_all(users: &[User], ctx: &RenderContext) -> Vec<Self> {
        users.iter().map(|u| Self::render(u, ctx)).collect()
    }
}

/// A membership row in the community-with-memberships view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembersCommunityMembershipResponse {
    /// Membership id.
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

impl From<&CommunityMembership> for MembersCommunityMembershipResponse {
    fn from(m: &CommunityMembership) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            community_id: m.community_id,
            is_administrator: m.is_administrator,
            is_moderator: m.is_moderator,
        }
    }
}

/// A community with the viewer's own memberships in it.
///
/// Returned after joining, leaving or inviting, so the client can refresh
/// its view of where the viewer stands in the community.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembersCommunityResponse {
    /// Community id.
    pub id: CommunityId,
    /// `None` when there is no authenticated viewer.
    pub memberships: Option<Vec<MembersCommunityMembershipResponse>>,
}

impl MembersCommunityResponse {
    /// Project a community, keeping only the viewer's memberships.
    pub fn render(community: &CommunityWithMemberships, ctx: &RenderContext) -> Self {
        let memberships = ctx.viewer().map(|viewer| {
            community
                .memberships_of(viewer)
                .map(MembersCommunityMembershipResponse::from)
                .collect()
        });

        Self {
            id: community.community.id,
            memberships,
        }
    }
}
