//! User domain entities.

pub mod badge;
pub mod model;

pub use badge::Badge;
pub use model::{User, UserProfile};
