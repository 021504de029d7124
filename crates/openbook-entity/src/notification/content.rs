//! Concrete notification records.
//!
//! A [`Notification`](super::Notification) points at exactly one of these
//! records. Each record carries its own primary key plus the domain object
//! the event is about.

use serde::{Deserialize, Serialize};

use openbook_core::types::NotificationContentId;

use super::kind::NotificationType;
use crate::community::CommunityInvite;
use crate::post::{
    Post, PostComment, PostCommentReaction, PostCommentUserMention, PostReaction,
    PostUserMention,
};
use crate::user::User;

/// A new comment on one of the owner's posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCommentNotification {
    /// Primary key of this record.
    pub id: NotificationContentId,
    /// The new comment.
    pub post_comment: PostComment,
}

/// A reply to one of the owner's comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCommentReplyNotification {
    /// Primary key of this record.
    pub id: NotificationContentId,
    /// The reply. Its `parent_comment` is the comment replied to.
    pub post_comment: PostComment,
}

/// A reaction to one of the owner's comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCommentReactionNotification {
    /// Primary key of this record.
    pub id: NotificationContentId,
    /// The reaction left on the comment.
    pub post_comment_reaction: PostCommentReaction,
}

/// A reaction to one of the owner's posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostReactionNotification {
    /// Primary key of this record.
    pub id: NotificationContentId,
    /// The reaction left on the post.
    pub post_reaction: PostReaction,
}

/// Someone asked to connect with the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionRequestNotification {
    /// Primary key of this record.
    pub id: NotificationContentId,
    /// The user asking to connect.
    pub connection_requester: User,
}

/// Someone accepted the owner's connection request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfirmedNotification {
    /// Primary key of this record.
    pub id: NotificationContentId,
    /// The user who confirmed the connection.
    pub connection_confirmator: User,
}

/// Someone started following the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowNotification {
    /// Primary key of this record.
    pub id: NotificationContentId,
    /// The new follower.
    pub follower: User,
}

/// The owner was invited into a community.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityInviteNotification {
    /// Primary key of this record.
    pub id: NotificationContentId,
    /// The pending invite.
    pub community_invite: CommunityInvite,
}

/// A new post in a community the owner subscribed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityNewPostNotification {
    /// Primary key of this record.
    pub id: NotificationContentId,
    /// The new post.
    pub post: Post,
}

/// A new post by a user the owner subscribed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserNewPostNotification {
    /// Primary key of this record.
    pub id: NotificationContentId,
    /// The new post.
    pub post: Post,
}

/// The owner was mentioned in a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostUserMentionNotification {
    /// Primary key of this record.
    pub id: NotificationContentId,
    /// The mention.
    pub post_user_mention: PostUserMention,
}

/// The owner was mentioned in a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCommentUserMentionNotification {
    /// Primary key of this record.
    pub id: NotificationContentId,
    /// The mention.
    pub post_comment_user_mention: PostCommentUserMention,
}

/// The content object a notification refers to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "object")]
pub enum NotificationContent {
    /// `PC`
    PostComment(PostCommentNotification),
    /// `PCR`
    PostCommentReply(PostCommentReplyNotification),
    /// `PCRA`
    PostCommentReaction(PostCommentReactionNotification),
    /// `PR`
    PostReaction(PostReactionNotification),
    /// `CR`
    ConnectionRequest(ConnectionRequestNotification),
    /// `CC`
    ConnectionConfirmed(ConnectionConfirmedNotification),
    /// `F`
    Follow(FollowNotification),
    /// `CI`
    CommunityInvite(CommunityInviteNotification),
    /// `PCUM`
    PostCommentUserMention(PostCommentUserMentionNotification),
    /// `PUM`
    PostUserMention(PostUserMentionNotification),
    /// `CNP`
    CommunityNewPost(CommunityNewPostNotification),
    /// `UNP`
    UserNewPost(UserNewPostNotification),
}

impl NotificationContent {
    /// The notification type this content belongs to.
    pub fn kind(&self) -> NotificationType {
        match self {
            Self::PostComment(_) => NotificationType::PostComment,
            Self::PostCommentReply(_) => NotificationType::PostCommentReply,
            Self::PostCommentReaction(_) => NotificationType::PostCommentReaction,
            Self::PostReaction(_) => NotificationType::PostReaction,
            Self::ConnectionRequest(_) => NotificationType::ConnectionRequest,
            Self::ConnectionConfirmed(_) => NotificationType::ConnectionConfirmed,
            Self::Follow(_) => NotificationType::Follow,
            Self::CommunityInvite(_) => NotificationType::CommunityInvite,
            Self::PostCommentUserMention(_) => NotificationType::PostCommentUserMention,
            Self::PostUserMention(_) => NotificationType::PostUserMention,
            Self::CommunityNewPost(_) => NotificationType::CommunityNewPost,
            Self::UserNewPost(_) => NotificationType::UserNewPost,
        }
    }

    /// Primary key of the concrete record.
    pub fn id(&self) -> NotificationContentId {
        match self {
            Self::PostComment(n) => n.id,
            Self::PostCommentReply(n) => n.id,
            Self::PostCommentReaction(n) => n.id,
            Self::PostReaction(n) => n.id,
            Self::ConnectionRequest(n) => n.id,
            Self::ConnectionConfirmed(n) => n.id,
            Self::Follow(n) => n.id,
            Self::CommunityInvite(n) => n.id,
            Self::PostCommentUserMention(n) => n.id,
            Self::PostUserMention(n) => n.id,
            Self::CommunityNewPost(n) => n.id,
            Self::UserNewPost(n) => n.id,
        }
    }
}
