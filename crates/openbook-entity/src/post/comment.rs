//! Post comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use openbook_core::types::{PostCommentId, UserId};

use super::model::Post;
use crate::common::{Hashtag, Language};
use crate::user::User;

/// A comment on a post, or a reply to another comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostComment {
    /// Unique comment identifier.
    pub id: PostCommentId,
    /// The comment author.
    pub commenter: User,
    /// Detected language of the text.
    pub language: Option<Language>,
    /// Comment text.
    pub text: String,
    /// The commented post.
    pub post: Post,
    /// When the comment was written.
    pub created: DateTime<Utc>,
    /// The comment this one replies to.
    pub parent_comment: Option<Box<PostComment>>,
    /// Whether the text was edited after publishing.
    #[serde(default)]
    pub is_edited: bool,
    /// Users that muted notifications for this comment.
    #[serde(default)]
    pub muted_by_user_ids: Vec<UserId>,
    /// Hashtags used in the text.
    #[serde(default)]
    pub hashtags: Vec<Hashtag>,
}

impl PostComment {
    /// Whether the given user muted this comment.
    pub fn is_muted_by(&self, user_id: UserId) -> bool {
        self.muted_by_user_ids.contains(&user_id)
    }
}
