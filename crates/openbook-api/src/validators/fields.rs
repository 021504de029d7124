//! Character-set validators and deserializers for request fields.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

use openbook_entity::community::CommunityMembersExclusion;
use openbook_entity::notification::NotificationType;

/// Usernames: letters, digits, underscores and periods.
///
/// Empty input matches; [`not_blank`] reports it.
pub static USERNAME_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_.]*$").expect("valid username regex"));

/// Community names: letters, digits and underscores.
pub static COMMUNITY_NAME_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]*$").expect("valid community name regex"));

/// Rejects empty strings.
///
/// Combined with [`trimmed`], whitespace-only input is rejected as well.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("blank").with_message("This field may not be blank.".into()));
    }
    Ok(())
}

/// Deserializes a string with surrounding whitespace removed.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Deserializes an optional member exclusion keyword.
///
/// An empty value means "no exclusion".
pub fn exclusion<'de, D>(deserializer: D) -> Result<Option<CommunityMembersExclusion>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<CommunityMembersExclusion>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(e.message)),
        _ => Ok(None),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Deserializes an optional list of notification types.
///
/// Accepts a JSON array of codes or a single comma separated string, which
/// is how the list arrives in a query string (`types=PR,PC`). Empty input
/// means "no filter".
pub fn notification_types<'de, D>(deserializer: D) -> Result<Option<Vec<NotificationType>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(OneOrMany::One(s)) => s
            .split(',')
            .map(|part| part.trim().to_string())
            .collect::<Vec<_>>(),
        Some(OneOrMany::Many(v)) => v,
    };

    let types = raw
        .iter()
        .filter(|code| !code.is_empty())
        .map(|code| {
            code.parse::<NotificationType>()
                .map_err(|e| serde::de::Error::custom(e.message))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((!types.is_empty()).then_some(types))
}
