//! Newtype wrappers around `i64` primary keys for all domain entities.
//!
//! Using distinct types prevents accidentally passing a `UserId` where a
//! `CommunityId` is expected. Every id serializes as a bare JSON number.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an identifier from a raw primary key.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Return the raw primary key.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user.
    UserId
);

define_id!(
    /// Unique identifier for a user profile.
    ProfileId
);

define_id!(
    /// Unique identifier for a profile badge.
    BadgeId
);

define_id!(
    /// Unique identifier for a community.
    CommunityId
);

define_id!(
    /// Unique identifier for a community membership.
    MembershipId
);

define_id!(
    /// Unique identifier for a community invite.
    CommunityInviteId
);

define_id!(
    /// Unique identifier for a circle.
    CircleId
);

define_id!(
    /// Unique identifier for a post.
    PostId
);

define_id!(
    /// Unique identifier for a post image.
    PostImageId
);

define_id!(
    /// Unique identifier for a post comment.
    PostCommentId
);

define_id!(
    /// Unique identifier for a post reaction.
    PostReactionId
);

define_id!(
    /// Unique identifier for a post comment reaction.
    PostCommentReactionId
);

define_id!(
    /// Unique identifier for a user mention inside a post.
    PostUserMentionId
);

define_id!(
    /// Unique identifier for a user mention inside a post comment.
    PostCommentUserMentionId
);

define_id!(
    /// Unique identifier for an emoji.
    EmojiId
);

define_id!(
    /// Unique identifier for a language.
    LanguageId
);

define_id!(
    /// Unique identifier for a hashtag.
    HashtagId
);

define_id!(
    /// Unique identifier for a notification.
    NotificationId
);

define_id!(
    /// Unique identifier for a concrete notification record (the content
    /// object a notification points at).
    NotificationContentId
);
