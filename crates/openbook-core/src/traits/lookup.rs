//! Existence checks used by request validation.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::NotificationId;

/// Answers "does this referenced record exist?" for request validation.
///
/// Implemented by the application's persistence layer. Request DTOs call
/// into it after their field-level constraints pass, so implementations
/// only ever see well-formed names and ids.
#[async_trait]
pub trait ReferenceLookup: Send + Sync + 'static {
    /// Whether a community with exactly this name exists.
    async fn community_name_exists(&self, name: &str) -> AppResult<bool>;

    /// Whether a user with exactly this username exists.
    async fn username_exists(&self, username: &str) -> AppResult<bool>;

    /// Whether a notification with this id exists.
    async fn notification_exists(&self, id: NotificationId) -> AppResult<bool>;
}
