//! Field length and list size limits shared by request validation.

/// Maximum length of a username.
pub const USERNAME_MAX_LENGTH: u64 = 30;

/// Maximum length of a community name.
pub const COMMUNITY_NAME_MAX_LENGTH: u64 = 32;

/// Maximum length of a free-text search query.
pub const SEARCH_QUERIES_MAX_LENGTH: u64 = 120;

/// Maximum number of items a list endpoint may be asked for.
pub const MAX_LIST_COUNT: u32 = 20;
