//! Core type definitions used across the Openbook workspace.

pub mod id;

pub use id::*;
