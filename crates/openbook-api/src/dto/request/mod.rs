//! Request DTOs with validation.

pub mod community;
pub mod notification;

pub use community::{
    GetCommunityMembersRequest, InviteCommunityMemberRequest, JoinCommunityRequest,
    LeaveCommunityRequest, SearchCommunityMembersRequest,
};
pub use notification::{
    DeleteNotificationRequest, GetNotificationsRequest, ReadNotificationRequest,
    ReadNotificationsRequest, UnreadNotificationsCountRequest,
};
