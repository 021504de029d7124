//! # openbook-entity
//!
//! Domain entity models for Openbook. Every struct in this crate represents
//! a database row with the relations the API layer needs already loaded,
//! or a domain value object. All entities derive `Debug`, `Clone`,
//! `Serialize` and `Deserialize`.

pub mod common;
pub mod community;
pub mod notification;
pub mod post;
pub mod user;
