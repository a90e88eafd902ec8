//! `vendorbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod record;

pub use error::{DomainError, DomainResult, MESSAGE_SEPARATOR, join_messages};
pub use record::Record;
