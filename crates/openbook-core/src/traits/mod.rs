//! Core traits defined in `openbook-core` and implemented by other crates.

pub mod lookup;

pub use lookup::ReferenceLookup;
