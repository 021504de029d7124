//! Post domain entities.

pub mod comment;
pub mod mention;
pub mod model;
pub mod reaction;

pub use comment::PostComment;
pub use mention::{PostCommentUserMention, PostUserMention};
pub use model::{Post, PostImage};
pub use reaction::{PostCommentReaction, PostReaction};
