//! Notification domain entities.

pub mod content;
pub mod kind;
pub mod model;

pub use content::{
    CommunityInviteNotification, CommunityNewPostNotification, ConnectionConfirmedNotification,
    ConnectionRequestNotification, FollowNotification, NotificationContent,
    PostCommentNotification, PostCommentReactionNotification, PostCommentReplyNotification,
    PostCommentUserMentionNotification, PostReactionNotification, PostUserMentionNotification,
    UserNewPostNotification,
};
pub use kind::NotificationType;
pub use model::Notification;
