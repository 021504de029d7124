//! Shared lookup entities referenced by posts and comments.

pub mod model;

pub use model::{Emoji, Hashtag, Language};
