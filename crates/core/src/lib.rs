//! Shared domain types, errors, and state machines for the BCI platform.
//!
//! This crate has zero internal dependencies so it can be used by the
//! repository layer, the API, and any future CLI tooling alike.

pub mod care;
pub mod error;
pub mod lifecycle;
pub mod pagination;
pub mod types;
pub mod validate;

pub use error::CoreError;
