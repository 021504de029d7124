//! Community membership request DTOs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use validator::Validate;

use openbook_core::limits::{
    COMMUNITY_NAME_MAX_LENGTH, MAX_LIST_COUNT, SEARCH_QUERIES_MAX_LENGTH, USERNAME_MAX_LENGTH,
};
use openbook_core::result::AppResult;
use openbook_core::traits::ReferenceLookup;
use openbook_core::types::UserId;
use openbook_entity::community::CommunityMembersExclusion;

use crate::validators::CheckReferences;
use crate::validators::fields::{
    COMMUNITY_NAME_CHARACTERS, USERNAME_CHARACTERS, exclusion, not_blank, trimmed,
};
use crate::validators::references::ReferenceErrors;

/// Join community request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JoinCommunityRequest {
    /// Name of the community to join.
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = COMMUNITY_NAME_MAX_LENGTH, message = "Ensure this field is not too long."),
        regex(path = *COMMUNITY_NAME_CHARACTERS, message = "Community names can only contain alphanumerical characters and underscores.")
    )]
    pub community_name: String,
}

/// Leave community request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LeaveCommunityRequest {
    /// Name of the community to leave.
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = COMMUNITY_NAME_MAX_LENGTH, message = "Ensure this field is not too long."),
        regex(path = *COMMUNITY_NAME_CHARACTERS, message = "Community names can only contain alphanumerical characters and underscores.")
    )]
    pub community_name: String,
}

/// Invite a user into a community.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InviteCommunityMemberRequest {
    /// Username of the invited user.
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = USERNAME_MAX_LENGTH, message = "Ensure this field is not too long."),
        regex(path = *USERNAME_CHARACTERS, message = "Usernames can only contain alphanumerical characters, periods and underscores.")
    )]
    pub username: String,
    /// Name of the community the user is invited to.
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = COMMUNITY_NAME_MAX_LENGTH, message = "Ensure this field is not too long."),
        regex(path = *COMMUNITY_NAME_CHARACTERS, message = "Community names can only contain alphanumerical characters and underscores.")
    )]
    pub community_name: String,
}

/// List the members of a community.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GetCommunityMembersRequest {
    /// Only return members with an id lower than this.
    pub max_id: Option<UserId>,
    /// Page size.
    #[validate(range(max = MAX_LIST_COUNT, message = "Ensure this value is less than or equal to 20."))]
    pub count: Option<u32>,
    /// Staff group to leave out.
    #[serde(default, deserialize_with = "exclusion")]
    pub exclude: Option<CommunityMembersExclusion>,
    /// Name of the community.
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = COMMUNITY_NAME_MAX_LENGTH, message = "Ensure this field is not too long."),
        regex(path = *COMMUNITY_NAME_CHARACTERS, message = "Community names can only contain alphanumerical characters and underscores.")
    )]
    pub community_name: String,
}

/// Search the members of a community.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchCommunityMembersRequest {
    /// Page size.
    #[validate(range(max = MAX_LIST_COUNT, message = "Ensure this value is less than or equal to 20."))]
    pub count: Option<u32>,
    /// Search text matched against usernames and profile names.
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = SEARCH_QUERIES_MAX_LENGTH, message = "Ensure this field is not too long.")
    )]
    pub query: String,
    /// Staff group to leave out.
    #[serde(default, deserialize_with = "exclusion")]
    pub exclude: Option<CommunityMembersExclusion>,
    /// Name of the community.
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = COMMUNITY_NAME_MAX_LENGTH, message = "Ensure this field is not too long."),
        regex(path = *COMMUNITY_NAME_CHARACTERS, message = "Community names can only contain alphanumerical characters and underscores.")
    )]
    pub community_name: String,
}

#[async_trait]
impl CheckReferences for JoinCommunityRequest {
    async fn check_references(&self, lookup: &dyn ReferenceLookup) -> AppResult<()> {
        let mut errors = ReferenceErrors::new();
        errors
            .community_name("community_name", &self.community_name, lookup)
            .await?;
        errors.into_result()
    }
}

#[async_trait]
impl CheckReferences for LeaveCommunityRequest {
    async fn check_references(&self, lookup: &dyn ReferenceLookup) -> AppResult<()> {
        let mut errors = ReferenceErrors::new();
        errors
            .community_name("community_name", &self.community_name, lookup)
            .await?;
        errors.into_result()
    }
}

#[async_trait]
impl CheckReferences for InviteCommunityMemberRequest {
    async fn check_references(&self, lookup: &dyn ReferenceLookup) -> AppResult<()> {
        let mut errors = ReferenceErrors::new();
        errors.username("username", &self.username, lookup).await?;
        errors
            .community_name("community_name", &self.community_name, lookup)
            .await?;
        errors.into_result()
    }
}

#[async_trait]
impl CheckReferences for GetCommunityMembersRequest {
    async fn check_references(&self, lookup: &dyn ReferenceLookup) -> AppResult<()> {
        let mut errors = ReferenceErrors::new();
        errors
            .community_name("community_name", &self.community_name, lookup)
            .await?;
        errors.into_result()
    }
}

#[async_trait]
impl CheckReferences for SearchCommunityMembersRequest {
    async fn check_references(&self, lookup: &dyn ReferenceLookup) -> AppResult<()> {
        let mut errors = ReferenceErrors::new();
        errors
            .community_name("community_name", &self.community_name, lookup)
            .await?;
        errors.into_result()
    }
}
