//! Emoji, language and hashtag entities.

use serde::{Deserialize, Serialize};

use openbook_core::types::{EmojiId, HashtagId, LanguageId};

/// An emoji usable as a reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    /// Unique emoji identifier.
    pub id: EmojiId,
    /// Keyword, e.g. `"heart_eyes"`.
    pub keyword: String,
    /// Stored image path, relative to the media root.
    pub image: String,
}

/// A language a comment may be written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Unique language identifier.
    pub id: LanguageId,
    /// ISO code, e.g. `"en"`.
    pub code: String,
    /// English name of the language.
    pub name: String,
}

/// A hashtag extracted from post or comment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hashtag {
    /// Unique hashtag identifier.
    pub id: HashtagId,
    /// Tag name without the leading `#`.
    pub name: String,
    /// Hex color, if one was assigned.
    pub color: Option<String>,
    /// Stored image path, relative to the media root.
    pub image: Option<String>,
}
