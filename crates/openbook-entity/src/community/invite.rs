//! Community invite entity.

use serde::{Deserialize, Serialize};

use openbook_core::types::{CommunityInviteId, UserId};

use super::model::Community;
use crate::user::User;

/// An invitation from one user to another to join a community.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityInvite {
    /// Unique invite identifier.
    pub id: CommunityInviteId,
    /// The inviting user.
    pub creator: User,
    /// The invited user.
    pub invited_user_id: UserId,
    /// The community the invite is for.
    pub community: Community,
}
