//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use openbook_core::types::{NotificationId, UserId};

use super::content::NotificationContent;
use super::kind::NotificationType;

/// A notification delivered to a user.
///
/// `content` is the generically related record the notification points at.
/// It is `None` when that record has been deleted since.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The recipient.
    pub owner_id: UserId,
    /// Kind of event stored in the `notification_type` column.
    pub notification_type: NotificationType,
    /// The related content object.
    pub content: Option<NotificationContent>,
    /// Whether the recipient has read this notification.
    #[serde(default)]
    pub read: bool,
    /// When the notification was created.
    pub created: DateTime<Utc>,
}

impl Notification {
    /// Check that the content object, when it still exists, is of the
    /// declared notification type.
    pub fn is_consistent(&self) -> bool {
        self.content
            .as_ref()
            .is_none_or(|c| c.kind() == self.notification_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::FollowNotification;
    use crate::user::{User, UserProfile};
    use openbook_core::types::{NotificationContentId, ProfileId};

    fn follow_notification(kind: NotificationType, with_content: bool) -> Notification {
        let follower = User {
            id: UserId::new(2),
            username: "follower".to_string(),
            profile: UserProfile {
                id: ProfileId::new(2),
                name: "Follower".to_string(),
                avatar: None,
                badges: Vec::new(),
            },
        };
        Notification {
            id: NotificationId::new(1),
            owner_id: UserId::new(1),
            notification_type: kind,
            content: with_content.then(|| {
                NotificationContent::Follow(FollowNotification {
                    id: NotificationContentId::new(5),
                    follower,
                })
            }),
            read: false,
            created: Utc::now(),
        }
    }

    #[test]
    fn test_consistent_when_kinds_match() {
        let notification = follow_notification(NotificationType::Follow, true);
        assert!(notification.is_consistent());
    }

    #[test]
    fn test_inconsistent_when_kinds_differ() {
        let notification = follow_notification(NotificationType::PostReaction, true);
        assert!(!notification.is_consistent());
    }

    #[test]
    fn test_consistent_when_content_missing() {
        let notification = follow_notification(NotificationType::Follow, false);
        assert!(notification.is_consistent());
        let notification = follow_notification(NotificationType::PostReaction, false);
        assert!(notification.is_consistent());
    }
}
