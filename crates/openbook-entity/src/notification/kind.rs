//! Notification type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of event a notification reports.
///
/// Serialized as the short wire code stored in the `notification_type`
/// column, e.g. `"PCR"` for a comment reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationType {
    /// Someone commented on a post.
    #[serde(rename = "PC")]
    PostComment,
    /// Someone replied to a comment.
    #[serde(rename = "PCR")]
    PostCommentReply,
    /// Someone reacted to a comment.
    #[serde(rename = "PCRA")]
    PostCommentReaction,
    /// Someone reacted to a post.
    #[serde(rename = "PR")]
    PostReaction,
    /// Someone asked to connect.
    #[serde(rename = "CR")]
    ConnectionRequest,
    /// Someone confirmed a connection.
    #[serde(rename = "CC")]
    ConnectionConfirmed,
    /// Someone started following.
    #[serde(rename = "F")]
    Follow,
    /// Someone sent a community invite.
    #[serde(rename = "CI")]
    CommunityInvite,
    /// Someone was mentioned in a comment.
    #[serde(rename = "PCUM")]
    PostCommentUserMention,
    /// Someone was mentioned in a post.
    #[serde(rename = "PUM")]
    PostUserMention,
    /// A subscribed community published a post.
    #[serde(rename = "CNP")]
    CommunityNewPost,
    /// A subscribed user published a post.
    #[serde(rename = "UNP")]
    UserNewPost,
}

impl NotificationType {
    /// Every notification type, in declaration order.
    pub const ALL: [NotificationType; 12] = [
        Self::PostComment,
        Self::PostCommentReply,
        Self::PostCommentReaction,
        Self::PostReaction,
        Self::ConnectionRequest,
        Self::ConnectionConfirmed,
        Self::Follow,
        Self::CommunityInvite,
        Self::PostCommentUserMention,
        Self::PostUserMention,
        Self::CommunityNewPost,
        Self::UserNewPost,
    ];

    /// Return the wire code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostComment => "PC",
            Self::PostCommentReply => "PCR",
            Self::PostCommentReaction => "PCRA",
            Self::PostReaction => "PR",
            Self::ConnectionRequest => "CR",
            Self::ConnectionConfirmed => "CC",
            Self::Follow => "F",
            Self::CommunityInvite => "CI",
            Self::PostCommentUserMention => "PCUM",
            Self::PostUserMention => "PUM",
            Self::CommunityNewPost => "CNP",
            Self::UserNewPost => "UNP",
        }
    }

    /// Every valid wire code, in declaration order.
    pub fn codes() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(|t| t.as_str())
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = openbook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                openbook_core::AppError::field_validation(
                    "types",
                    format!("\"{s}\" is not a valid choice."),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = NotificationType::codes().collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), NotificationType::ALL.len());
    }

    #[test]
    fn test_from_str_round_trips_every_code() {
        for kind in NotificationType::ALL {
            assert_eq!(kind.as_str().parse::<NotificationType>().unwrap(), kind);
        }
        assert!("pcr".parse::<NotificationType>().is_err());
        assert!("".parse::<NotificationType>().is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for kind in NotificationType::ALL {
            let value = serde_json::to_value(kind).unwrap();
            assert_eq!(value, serde_json::json!(kind.as_str()));
        }
    }
}
