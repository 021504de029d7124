//! Reaction entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use openbook_core::types::{PostCommentReactionId, PostReactionId};

use super::comment::PostComment;
use super::model::Post;
use crate::common::Emoji;
use crate::user::User;

/// An emoji reaction on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostReaction {
    /// Unique reaction identifier.
    pub id: PostReactionId,
    /// The reacting user.
    pub reactor: User,
    /// The emoji reacted with.
    pub emoji: Emoji,
    /// The post reacted to.
    pub post: Post,
    /// When the reaction was made.
    pub created: DateTime<Utc>,
}

/// An emoji reaction on a post comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCommentReaction {
    /// Unique reaction identifier.
    pub id: PostCommentReactionId,
    /// The reacting user.
    pub reactor: User,
    /// The emoji reacted with.
    pub emoji: Emoji,
    /// The comment reacted to.
    pub post_comment: PostComment,
    /// When the reaction was made.
    pub created: DateTime<Utc>,
}
