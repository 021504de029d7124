//! User mention entity models.

use serde::{Deserialize, Serialize};

use openbook_core::types::{PostCommentUserMentionId, PostUserMentionId};

use super::comment::PostComment;
use super::model::Post;
use crate::user::User;

/// A `@username` mention inside a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostUserMention {
    /// Unique mention identifier.
    pub id: PostUserMentionId,
    /// The post containing the mention.
    pub post: Post,
    /// The mentioned user.
    pub user: User,
}

/// A `@username` mention inside a post comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCommentUserMention {
    /// Unique mention identifier.
    pub id: PostCommentUserMentionId,
    /// The comment containing the mention.
    pub post_comment: PostComment,
    /// The mentioned user.
    pub user: User,
}
