//! Community domain entities.

pub mod exclusion;
pub mod invite;
pub mod model;

pub use exclusion::CommunityMembersExclusion;
pub use invite::CommunityInvite;
pub use model::{Community, CommunityMembership, CommunityWithMemberships};
