//! Field validators, lenient deserializers, and reference checks shared by
//! the request DTOs.

pub mod fields;
pub mod references;

pub use fields::{COMMUNITY_NAME_CHARACTERS, USERNAME_CHARACTERS};
pub use references::{CheckReferences, validate_request};
