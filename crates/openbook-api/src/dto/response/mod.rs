//! Response DTOs and their projections from entities.

pub mod community;
pub mod notification;

pub use community::{
    CommunityMemberProfileResponse, CommunityMemberResponse, MembersCommunityMembershipResponse,
    MembersCommunityResponse,
};
pub use notification::{
    NotificationContentResponse, NotificationResponse, UnreadNotificationsCountResponse,
    render_notifications,
};
