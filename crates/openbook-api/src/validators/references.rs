//! Existence checks for names and ids referenced by a request.

use async_trait::async_trait;
use validator::{Validate, ValidationError, ValidationErrors};

use openbook_core::result::AppResult;
use openbook_core::traits::ReferenceLookup;
use openbook_core::types::NotificationId;

/// Checks that the records a request refers to exist.
///
/// Runs after field-level validation passed. Missing references are
/// reported as validation errors on the offending field.
#[async_trait]
pub trait CheckReferences {
    /// Verify every referenced record against the lookup.
    async fn check_references(&self, lookup: &dyn ReferenceLookup) -> AppResult<()>;
}

/// Run field validation and then reference checks on a request.
pub async fn validate_request<T>(request: &T, lookup: &dyn ReferenceLookup) -> AppResult<()>
where
    T: Validate + CheckReferences + Sync,
{
    let request_type = std::any::type_name::<T>();

    if let Err(errors) = request.validate() {
        tracing::warn!(request = request_type, errors = %errors, "Request failed field validation");
        return Err(errors.into());
    }

    if let Err(err) = request.check_references(lookup).await {
        tracing::warn!(request = request_type, error = %err, "Request failed reference checks");
        return Err(err);
    }

    tracing::debug!(request = request_type, "Request validated");
    Ok(())
}

/// Collects missing-reference errors across the fields of one request.
#[derive(Debug, Default)]
pub struct ReferenceErrors {
    errors: ValidationErrors,
}

impl ReferenceErrors {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error on `field` when the community name does not exist.
    pub async fn community_name(
        &mut self,
        field: &'static str,
        name: &str,
        lookup: &dyn ReferenceLookup,
    ) -> AppResult<()> {
        if !lookup.community_name_exists(name).await? {
            self.missing(field, "No community with the provided name exists.");
        }
        Ok(())
    }

    /// Record an error on `field` when the username does not exist.
    pub async fn username(
        &mut self,
        field: &'static str,
        username: &str,
        lookup: &dyn ReferenceLookup,
    ) -> AppResult<()> {
        if !lookup.username_exists(username).await? {
            self.missing(field, "No user with the provided username exists.");
        }
        Ok(())
    }

    /// Record an error on `field` when the notification does not exist.
    pub async fn notification(
        &mut self,
        field: &'static str,
        id: NotificationId,
        lookup: &dyn ReferenceLookup,
    ) -> AppResult<()> {
        if !lookup.notification_exists(id).await? {
            self.missing(field, "The notification does not exist.");
        }
        Ok(())
    }

    fn missing(&mut self, field: &'static str, message: &'static str) {
        self.errors
            .add(field, ValidationError::new("does_not_exist").with_message(message.into()));
    }

    /// `Ok` when nothing was recorded, a validation error otherwise.
    pub fn into_result(self) -> AppResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.into())
        }
    }
}
