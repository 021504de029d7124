//! Notification request DTOs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use validator::Validate;

use openbook_core::limits::MAX_LIST_COUNT;
use openbook_core::result::AppResult;
use openbook_core::traits::ReferenceLookup;
use openbook_core::types::NotificationId;
use openbook_entity::notification::NotificationType;

use crate::validators::CheckReferences;
use crate::validators::fields::notification_types;
use crate::validators::references::ReferenceErrors;

/// Mark notifications as read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ReadNotificationsRequest {
    /// Only affect notifications with an id up to this one.
    pub max_id: Option<NotificationId>,
    /// Only affect notifications of these types.
    #[serde(default, deserialize_with = "notification_types")]
    pub types: Option<Vec<NotificationType>>,
}

/// Count unread notifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UnreadNotificationsCountRequest {
    /// Only count notifications with an id up to this one.
    pub max_id: Option<NotificationId>,
    /// Only count notifications of these types.
    #[serde(default, deserialize_with = "notification_types")]
    pub types: Option<Vec<NotificationType>>,
}

/// List notifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GetNotificationsRequest {
    /// Page size.
    #[validate(range(max = MAX_LIST_COUNT, message = "Ensure this value is less than or equal to 20."))]
    pub count: Option<u32>,
    /// Only return notifications with an id lower than this.
    pub max_id: Option<NotificationId>,
    /// Only return notifications of these types.
    #[serde(default, deserialize_with = "notification_types")]
    pub types: Option<Vec<NotificationType>>,
}

/// Delete a single notification.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeleteNotificationRequest {
    /// The notification to delete.
    pub notification_id: NotificationId,
}

/// Mark a single notification as read.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReadNotificationRequest {
    /// The notification to mark.
    pub notification_id: NotificationId,
}

impl GetNotificationsRequest {
    /// Whether a notification type passes the `types` filter.
    pub fn includes(&self, kind: NotificationType) -> bool {
        includes(self.types.as_deref(), kind)
    }
}

impl ReadNotificationsRequest {
    /// Whether a notification type passes the `types` filter.
    pub fn includes(&self, kind: NotificationType) -> bool {
        includes(self.types.as_deref(), kind)
    }
}

impl UnreadNotificationsCountRequest {
    /// Whether a notification type passes the `types` filter.
    pub fn includes(&self, kind: NotificationType) -> bool {
        includes(self.types.as_deref(), kind)
    }
}

fn includes(types: Option<&[NotificationType]>, kind: NotificationType) -> bool {
    types.map(|t| t.contains(&kind)).unwrap_or(true)
}

#[async_trait]
impl CheckReferences for ReadNotificationsRequest {
    async fn check_references(&self, _lookup: &dyn ReferenceLookup) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl CheckReferences for UnreadNotificationsCountRequest {
    async fn check_references(&self, _lookup: &dyn ReferenceLookup) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl CheckReferences for GetNotificationsRequest {
    async fn check_references(&self, _lookup: &dyn ReferenceLookup) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl CheckReferences for DeleteNotificationRequest {
    async fn check_references(&self, lookup: &dyn ReferenceLookup) -> AppResult<()> {
        let mut errors = ReferenceErrors::new();
        errors
            .notification("notification_id", self.notification_id, lookup)
            .await?;
        errors.into_result()
    }
}

#[async_trait]
impl CheckReferences for ReadNotificationRequest {
    async fn check_references(&self, lookup: &dyn ReferenceLookup) -> AppResult<()> {
        let mut errors = ReferenceErrors::new();
        errors
            .notification("notification_id", self.notification_id, lookup)
            .await?;
        errors.into_result()
    }
}
