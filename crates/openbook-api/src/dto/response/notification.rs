//! Notification read models.
//!
//! A notification renders as `{ id, notification_type, content_object, read,
//! created }`, where `content_object` takes the shape of whichever concrete
//! notification record the row points at. The nested shapes below are shared
//! between the kinds: every user (commenter, reactor, follower, ...) renders
//! as [`NotificationUserResponse`], every post as
//! [`NotificationPostResponse`], and so on.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use openbook_core::error::AppError;
use openbook_core::result::AppResult;
use openbook_core::types::{
    CommunityId, CommunityInviteId, EmojiId, HashtagId, LanguageId, NotificationContentId,
    NotificationId, PostCommentId, PostCommentReactionId, PostCommentUserMentionId, PostId,
    PostImageId, PostReactionId, PostUserMentionId, ProfileId, UserId,
};
use openbook_entity::common::{Emoji, Hashtag, Language};
use openbook_entity::community::{Community, CommunityInvite};
use openbook_entity::notification::{Notification, NotificationContent, NotificationType};
use openbook_entity::post::{
    Post, PostComment, PostCommentReaction, PostCommentUserMention, PostImage, PostReaction,
    PostUserMention,
};
use openbook_entity::user::{Badge, User};

use crate::context::RenderContext;
use crate::dto::request::UnreadNotificationsCountRequest;

/// A badge shown on a user profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationBadgeResponse {
    /// Badge keyword, e.g. `VERIFIED`.
    pub keyword: String,
    /// Human readable badge description.
    pub keyword_description: Option<String>,
}

impl From<&Badge> for NotificationBadgeResponse {
    fn from(b: &Badge) -> Self {
        Self {
            keyword: b.keyword.clone(),
            keyword_description: b.keyword_description.clone(),
        }
    }
}

/// Profile of a user inside a notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationUserProfileResponse {
    /// Unique identifier.
    pub id: ProfileId,
    /// Absolute avatar URL.
    pub avatar: Option<String>,
    /// Display name.
    pub name: String,
    /// Badges shown next to the name.
    pub badges: Vec<NotificationBadgeResponse>,
}

/// Any user appearing inside a notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationUserResponse {
    /// Unique identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Public profile.
    pub profile: NotificationUserProfileResponse,
}

impl NotificationUserResponse {
    /// Render a user with an absolute avatar URL.
    pub fn render(user: &User, ctx: &RenderContext) -> Self {
        let profile = &user.profile;
        Self {
            id: user.id,
            username: user.username.clone(),
            profile: NotificationUserProfileResponse {
                id: profile.id,
                avatar: ctx.optional_media_url(profile.avatar.as_deref()),
                name: profile.name.clone(),
                badges: profile.badges.iter().map(Into::into).collect(),
            },
        }
    }
}

/// A community appearing inside a notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationCommunityResponse {
    /// Unique identifier.
    pub id: CommunityId,
    /// Display name.
    pub name: String,
    /// Absolute avatar URL.
    pub avatar: Option<String>,
    /// Absolute cover image URL.
    pub cover: Option<String>,
    /// Hex theme color.
    pub color: String,
}

impl NotificationCommunityResponse {
    /// Render a community with absolute image URLs.
    pub fn render(community: &Community, ctx: &RenderContext) -> Self {
        Self {
            id: community.id,
            name: community.name.clone(),
            avatar: ctx.optional_media_url(community.avatar.as_deref()),
            cover: ctx.optional_media_url(community.cover.as_deref()),
            color: community.color.clone(),
        }
    }
}

/// Legacy single image of a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationPostImageResponse {
    /// Unique identifier.
    pub id: PostImageId,
    /// Absolute image URL.
    pub image: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl NotificationPostImageResponse {
    /// Build the response from the entity.
    pub fn render(image: &PostImage, ctx: &RenderContext) -> Self {
        Self {
            id: image.id,
            image: ctx.media_url(&image.image),
            width: image.width,
            height: image.height,
        }
    }
}

/// A post appearing inside a notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationPostResponse {
    /// Unique identifier.
    pub id: PostId,
    /// Public post UUID.
    pub uuid: Uuid,
    /// Body text.
    pub text: Option<String>,
    /// Author.
    pub creator: NotificationUserResponse,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// Community the item belongs to.
    pub community: Option<NotificationCommunityResponse>,
    /// Whether the post is closed to new comments.
    pub is_closed: bool,
    /// Whether the post is only shared with circles.
    pub is_encircled: bool,
    /// Height of the primary media.
    pub media_height: Option<u32>,
    /// Width of the primary media.
    pub media_width: Option<u32>,
    /// Absolute thumbnail URL of the primary media.
    pub media_thumbnail: Option<String>,
    /// Legacy single image, kept for older clients.
    pub image: Option<NotificationPostImageResponse>,
}

impl NotificationPostResponse {
    /// Render a post, its creator and its community.
    pub fn render(post: &Post, ctx: &RenderContext) -> Self {
        Self {
            id: post.id,
            uuid: post.uuid,
            text: post.text.clone(),
            creator: NotificationUserResponse::render(&post.creator, ctx),
            created: post.created,
            community: post
                .community
                .as_ref()
                .map(|c| NotificationCommunityResponse::render(c, ctx)),
            is_closed: post.is_closed,
            is_encircled: post.is_encircled(),
            media_height: post.media_height,
            media_width: post.media_width,
            media_thumbnail: ctx.optional_media_url(post.media_thumbnail.as_deref()),
            image: post
                .image
                .as_ref()
                .map(|i| NotificationPostImageResponse::render(i, ctx)),
        }
    }
}

/// Language of a comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationLanguageResponse {
    /// Unique identifier.
    pub id: LanguageId,
    /// Language code.
    pub code: String,
    /// Display name.
    pub name: String,
}

impl From<&Language> for NotificationLanguageResponse {
    fn from(l: &Language) -> Self {
        Self {
            id: l.id,
            code: l.code.clone(),
            name: l.name.clone(),
        }
    }
}

/// A hashtag used in a comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationHashtagResponse {
    /// Unique identifier.
    pub id: HashtagId,
    /// Display name.
    pub name: String,
    /// Hex theme color.
    pub color: Option<String>,
    /// Absolute hashtag image URL.
    pub image: Option<String>,
}

impl NotificationHashtagResponse {
    /// Build the response from the entity.
    pub fn render(hashtag: &Hashtag, ctx: &RenderContext) -> Self {
        Self {
            id: hashtag.id,
            name: hashtag.name.clone(),
            color: hashtag.color.clone(),
            image: ctx.optional_media_url(hashtag.image.as_deref()),
        }
    }
}

/// Emoji of a reaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationEmojiResponse {
    /// Unique identifier.
    pub id: EmojiId,
    /// Emoji keyword.
    pub keyword: String,
    /// Absolute image URL.
    pub image: String,
}

impl NotificationEmojiResponse {
    /// Build the response from the entity.
    pub fn render(emoji: &Emoji, ctx: &RenderContext) -> Self {
        Self {
            id: emoji.id,
            keyword: emoji.keyword.clone(),
            image: ctx.media_url(&emoji.image),
        }
    }
}

fn is_muted(comment: &PostComment, ctx: &RenderContext) -> bool {
    ctx.viewer()
        .map(|viewer| comment.is_muted_by(viewer))
        .unwrap_or(false)
}

/// The comment a reply answers, without its post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationParentCommentResponse {
    /// Unique identifier.
    pub id: PostCommentId,
    /// Comment author.
    pub commenter: NotificationUserResponse,
    /// Detected language of the text.
    pub language: Option<NotificationLanguageResponse>,
    /// Body text.
    pub text: String,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// Whether the text was edited after posting.
    pub is_edited: bool,
    /// Whether the viewer muted notifications for the comment.
    pub is_muted: bool,
}

impl NotificationParentCommentResponse {
    /// Build the response from the entity.
    pub fn render(comment: &PostComment, ctx: &RenderContext) -> Self {
        Self {
            id: comment.id,
            commenter: NotificationUserResponse::render(&comment.commenter, ctx),
            language: comment.language.as_ref().map(Into::into),
            text: comment.text.clone(),
            created: comment.created,
            is_edited: comment.is_edited,
            is_muted: is_muted(comment, ctx),
        }
    }
}

/// A comment appearing inside a notification, with its post and parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationPostCommentResponse {
    /// Unique identifier.
    pub id: PostCommentId,
    /// Comment author.
    pub commenter: NotificationUserResponse,
    /// Detected language of the text.
    pub language: Option<NotificationLanguageResponse>,
    /// Body text.
    pub text: String,
    /// The post.
    pub post: NotificationPostResponse,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// The comment replied to.
    pub parent_comment: Option<NotificationParentCommentResponse>,
    /// Whether the viewer muted notifications for the comment.
    pub is_muted: bool,
    /// Hashtags used in the text.
    pub hashtags: Vec<NotificationHashtagResponse>,
}

impl NotificationPostCommentResponse {
    /// Render a comment. `is_muted` is evaluated for the viewer.
    pub fn render(comment: &PostComment, ctx: &RenderContext) -> Self {
        Self {
            id: comment.id,
            commenter: NotificationUserResponse::render(&comment.commenter, ctx),
            language: comment.language.as_ref().map(Into::into),
            text: comment.text.clone(),
            post: NotificationPostResponse::render(&comment.post, ctx),
            created: comment.created,
            parent_comment: comment
                .parent_comment
                .as_deref()
                .map(|p| NotificationParentCommentResponse::render(p, ctx)),
            is_muted: is_muted(comment, ctx),
            hashtags: comment
                .hashtags
                .iter()
                .map(|h| NotificationHashtagResponse::render(h, ctx))
                .collect(),
        }
    }
}

/// A reaction to a comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCommentReactionResponse {
    /// Unique identifier.
    pub id: PostCommentReactionId,
    /// User who reacted.
    pub reactor: NotificationUserResponse,
    /// Reaction emoji.
    pub emoji: NotificationEmojiResponse,
    /// The comment.
    pub post_comment: NotificationPostCommentResponse,
    /// Creation time.
    pub created: DateTime<Utc>,
}

impl PostCommentReactionResponse {
    /// Build the response from the entity.
    pub fn render(reaction: &PostCommentReaction, ctx: &RenderContext) -> Self {
        Self {
            id: reaction.id,
            reactor: NotificationUserResponse::render(&reaction.reactor, ctx),
            emoji: NotificationEmojiResponse::render(&reaction.emoji, ctx),
            post_comment: NotificationPostCommentResponse::render(&reaction.post_comment, ctx),
            created: reaction.created,
        }
    }
}

/// A reaction to a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostReactionResponse {
    /// Unique identifier.
    pub id: PostReactionId,
    /// User who reacted.
    pub reactor: NotificationUserResponse,
    /// Reaction emoji.
    pub emoji: NotificationEmojiResponse,
    /// The post.
    pub post: NotificationPostResponse,
}

impl PostReactionResponse {
    /// Build the response from the entity.
    pub fn render(reaction: &PostReaction, ctx: &RenderContext) -> Self {
        Self {
            id: reaction.id,
            reactor: NotificationUserResponse::render(&reaction.reactor, ctx),
            emoji: NotificationEmojiResponse::render(&reaction.emoji, ctx),
            post: NotificationPostResponse::render(&reaction.post, ctx),
        }
    }
}

/// A community invite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityInviteResponse {
    /// Unique identifier.
    pub id: CommunityInviteId,
    /// User who sent the invite.
    pub creator: NotificationUserResponse,
    /// The invited user.
    pub invited_user_id: UserId,
    /// Community the user is invited to.
    pub community: NotificationCommunityResponse,
}

impl CommunityInviteResponse {
    /// Build the response from the entity.
    pub fn render(invite: &CommunityInvite, ctx: &RenderContext) -> Self {
        Self {
            id: invite.id,
            creator: NotificationUserResponse::render(&invite.creator, ctx),
            invited_user_id: invite.invited_user_id,
            community: NotificationCommunityResponse::render(&invite.community, ctx),
        }
    }
}

/// A user mentioned in a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostUserMentionResponse {
    /// Unique identifier.
    pub id: PostUserMentionId,
    /// The post.
    pub post: NotificationPostResponse,
    /// The mentioned user.
    pub user: NotificationUserResponse,
}

impl PostUserMentionResponse {
    /// Build the response from the entity.
    pub fn render(mention: &PostUserMention, ctx: &RenderContext) -> Self {
        Self {
            id: mention.id,
            post: NotificationPostResponse::render(&mention.post, ctx),
            user: NotificationUserResponse::render(&mention.user, ctx),
        }
    }
}

/// A user mentioned in a comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCommentUserMentionResponse {
    /// Unique identifier.
    pub id: PostCommentUserMentionId,
    /// The comment.
    pub post_comment: NotificationPostCommentResponse,
    /// The mentioned user.
    pub user: NotificationUserResponse,
}

impl PostCommentUserMentionResponse {
    /// Build the response from the entity.
    pub fn render(mention: &PostCommentUserMention, ctx: &RenderContext) -> Self {
        Self {
            id: mention.id,
            post_comment: NotificationPostCommentResponse::render(&mention.post_comment, ctx),
            user: NotificationUserResponse::render(&mention.user, ctx),
        }
    }
}

// Content objects, one per notification type.

/// Content object of `PC` notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCommentNotificationResponse {
    /// Content record id.
    pub id: NotificationContentId,
    /// The comment.
    pub post_comment: NotificationPostCommentResponse,
}

/// Content object of `PCR` notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCommentReplyNotificationResponse {
    /// Content record id.
    pub id: NotificationContentId,
    /// The comment.
    pub post_comment: NotificationPostCommentResponse,
    /// Duplicates `post_comment.parent_comment` for clients predating it.
    pub parent_comment: Option<NotificationParentCommentResponse>,
}

/// Content object of `PCRA` notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCommentReactionNotificationResponse {
    /// Content record id.
    pub id: NotificationContentId,
    /// The reaction.
    pub post_comment_reaction: PostCommentReactionResponse,
}

/// Content object of `PR` notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostReactionNotificationResponse {
    /// Content record id.
    pub id: NotificationContentId,
    /// The reaction.
    pub post_reaction: PostReactionResponse,
}

/// Content object of `CR` notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionRequestNotificationResponse {
    /// Content record id.
    pub id: NotificationContentId,
    /// User asking to connect.
    pub connection_requester: NotificationUserResponse,
}

/// Content object of `CC` notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionConfirmedNotificationResponse {
    /// Content record id.
    pub id: NotificationContentId,
    /// User who confirmed the connection.
    pub connection_confirmator: NotificationUserResponse,
}

/// Content object of `F` notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowNotificationResponse {
    /// Content record id.
    pub id: NotificationContentId,
    /// The new follower.
    pub follower: NotificationUserResponse,
}

/// Content object of `CI` notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityInviteNotificationResponse {
    /// Content record id.
    pub id: NotificationContentId,
    /// The invite.
    pub community_invite: CommunityInviteResponse,
}

/// Content object of `CNP` and `UNP` notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPostNotificationResponse {
    /// Content record id.
    pub id: NotificationContentId,
    /// The post.
    pub post: NotificationPostResponse,
}

/// Content object of `PUM` notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostUserMentionNotificationResponse {
    /// Content record id.
    pub id: NotificationContentId,
    /// The mention.
    pub post_user_mention: PostUserMentionResponse,
}

/// Content object of `PCUM` notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCommentUserMentionNotificationResponse {
    /// Content record id.
    pub id: NotificationContentId,
    /// The mention.
    pub post_comment_user_mention: PostCommentUserMentionResponse,
}

/// The rendered content object. Serializes as the bare nested record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NotificationContentResponse {
    PostComment(PostCommentNotificationResponse),
    PostCommentReply(PostCommentReplyNotificationResponse),
    PostCommentReaction(PostCommentReactionNotificationResponse),
    PostReaction(PostReactionNotificationResponse),
    ConnectionRequest(ConnectionRequestNotificationResponse),
    ConnectionConfirmed(ConnectionConfirmedNotificationResponse),
    Follow(FollowNotificationResponse),
    CommunityInvite(CommunityInviteNotificationResponse),
    PostCommentUserMention(PostCommentUserMentionNotificationResponse),
    PostUserMention(PostUserMentionNotificationResponse),
    CommunityNewPost(NewPostNotificationResponse),
    UserNewPost(NewPostNotificationResponse),
}

impl NotificationContentResponse {
    /// Select and build the nested shape for a content object.
    pub fn render(content: &NotificationContent, ctx: &RenderContext) -> Self {
        match content {
            NotificationContent::PostComment(n) => {
                Self::PostComment(PostCommentNotificationResponse {
                    id: n.id,
                    post_comment: NotificationPostCommentResponse::render(&n.post_comment, ctx),
                })
            }
            NotificationContent::PostCommentReply(n) => {
                Self::PostCommentReply(PostCommentReplyNotificationResponse {
                    id: n.id,
                    post_comment: NotificationPostCommentResponse::render(&n.post_comment, ctx),
                    parent_comment: n
                        .post_comment
                        .parent_comment
                        .as_deref()
                        .map(|p| NotificationParentCommentResponse::render(p, ctx)),
                })
            }
            NotificationContent::PostCommentReaction(n) => {
                Self::PostCommentReaction(PostCommentReactionNotificationResponse {
                    id: n.id,
                    post_comment_reaction: PostCommentReactionResponse::render(
                        &n.post_comment_reaction,
                        ctx,
                    ),
                })
            }
            NotificationContent::PostReaction(n) => {
                Self::PostReaction(PostReactionNotificationResponse {
                    id: n.id,
                    post_reaction: PostReactionResponse::render(&n.post_reaction, ctx),
                })
            }
            NotificationContent::ConnectionRequest(n) => {
                Self::ConnectionRequest(ConnectionRequestNotificationResponse {
                    id: n.id,
                    connection_requester: NotificationUserResponse::render(
                        &n.connection_requester,
                        ctx,
                    ),
                })
            }
            NotificationContent::ConnectionConfirmed(n) => {
                Self::ConnectionConfirmed(ConnectionConfirmedNotificationResponse {
                    id: n.id,
                    connection_confirmator: NotificationUserResponse::render(
                        &n.connection_confirmator,
                        ctx,
                    ),
                })
            }
            NotificationContent::Follow(n) => Self::Follow(FollowNotificationResponse {
                id: n.id,
                follower: NotificationUserResponse::render(&n.follower, ctx),
            }),
            NotificationContent::CommunityInvite(n) => {
                Self::CommunityInvite(CommunityInviteNotificationResponse {
                    id: n.id,
                    community_invite: CommunityInviteResponse::render(&n.community_invite, ctx),
                })
            }
            NotificationContent::PostCommentUserMention(n) => {
                Self::PostCommentUserMention(PostCommentUserMentionNotificationResponse {
                    id: n.id,
                    post_comment_user_mention: PostCommentUserMentionResponse::render(
                        &n.post_comment_user_mention,
                        ctx,
                    ),
                })
            }
            NotificationContent::PostUserMention(n) => {
                Self::PostUserMention(PostUserMentionNotificationResponse {
                    id: n.id,
                    post_user_mention: PostUserMentionResponse::render(&n.post_user_mention, ctx),
                })
            }
            NotificationContent::CommunityNewPost(n) => {
                Self::CommunityNewPost(NewPostNotificationResponse {
                    id: n.id,
                    post: NotificationPostResponse::render(&n.post, ctx),
                })
            }
            NotificationContent::UserNewPost(n) => Self::UserNewPost(NewPostNotificationResponse {
                id: n.id,
                post: NotificationPostResponse::render(&n.post, ctx),
            }),
        }
    }
}

/// A notification as returned by the notifications list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationResponse {
    /// Notification id.
    pub id: NotificationId,
    /// Wire code of the notification kind.
    pub notification_type: NotificationType,
    /// The related record, `null` once that record has been deleted.
    pub content_object: Option<NotificationContentResponse>,
    /// Whether the owner has read it.
    pub read: bool,
    /// Creation time.
    pub created: DateTime<Utc>,
}

impl NotificationResponse {
    /// Render a notification.
    ///
    /// Fails when the content object's kind disagrees with the stored
    /// `notification_type`.
    pub fn render(notification: &Notification, ctx: &RenderContext) -> AppResult<Self> {
        if !notification.is_consistent() {
            let (kind, content_id) = notification
                .content
                .as_ref()
                .map(|c| (c.kind().to_string(), c.id().to_string()))
                .unwrap_or_default();
            return Err(AppError::internal(format!(
                "Notification {} is typed {} but points at {} record {}",
                notification.id, notification.notification_type, kind, content_id
            )));
        }

        Ok(Self {
            id: notification.id,
            notification_type: notification.notification_type,
            content_object: notification
                .content
                .as_ref()
                .map(|c| NotificationContentResponse::render(c, ctx)),
            read: notification.read,
            created: notification.created,
        })
    }
}

/// Render a page of notifications.
///
/// Notifications whose content disagrees with their type are left out of the
/// page and logged, so one corrupt row does not break the whole listing.
pub fn render_notifications(
    notifications: &[Notification],
    ctx: &RenderContext,
) -> Vec<NotificationResponse> {
    let rendered: Vec<_> = notifications
        .iter()
        .filter_map(|n| match NotificationResponse::render(n, ctx) {
            Ok(response) => Some(response),
            Err(e) => {
                tracing::warn!(notification_id = %n.id, error = %e, "Skipping notification");
                None
            }
        })
        .collect();

    tracing::debug!(
        requested = notifications.len(),
        rendered = rendered.len(),
        "Rendered notifications"
    );
    rendered
}

/// Unread notification count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnreadNotificationsCountResponse {
    /// Number of unread notifications matching the request filters.
    pub count: u64,
}

impl UnreadNotificationsCountResponse {
    /// Count the unread notifications that pass the request's `max_id` and
    /// `types` filters.
    pub fn count<'a, I>(notifications: I, request: &UnreadNotificationsCountRequest) -> Self
    where
        I: IntoIterator<Item = &'a Notification>,
    {
        let count = notifications
            .into_iter()
            .filter(|n| !n.read)
            .filter(|n| request.max_id.is_none_or(|max_id| n.id <= max_id))
            .filter(|n| request.includes(n.notification_type))
            .count();
        Self {
            count: count as u64,
        }
    }
}
