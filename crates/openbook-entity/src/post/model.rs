//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use openbook_core::types::{CircleId, PostId, PostImageId};

use crate::community::Community;
use crate::user::User;

/// A post published by a user, optionally inside a community.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier.
    pub id: PostId,
    /// Public identifier used in share links.
    pub uuid: Uuid,
    /// Post text.
    pub text: Option<String>,
    /// The author.
    pub creator: User,
    /// When the post was published.
    pub created: DateTime<Utc>,
    /// The community the post was published into, if any.
    pub community: Option<Community>,
    /// Whether commenting is closed.
    #[serde(default)]
    pub is_closed: bool,
    /// Circles the post was shared with. Empty for public or community posts.
    #[serde(default)]
    pub circle_ids: Vec<CircleId>,
    /// Height of the first media item.
    pub media_height: Option<u32>,
    /// Width of the first media item.
    pub media_width: Option<u32>,
    /// Stored thumbnail path of the first media item.
    pub media_thumbnail: Option<String>,
    /// Legacy single image attachment.
    pub image: Option<PostImage>,
}

impl Post {
    /// Whether the post was shared only with selected circles.
    pub fn is_encircled(&self) -> bool {
        !self.circle_ids.is_empty()
    }
}

/// The legacy single image attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostImage {
    /// Unique post image identifier.
    pub id: PostImageId,
    /// Stored image path, relative to the media root.
    pub image: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}
