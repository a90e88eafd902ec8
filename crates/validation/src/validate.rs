//! `Validate` capability for records.

use vendorbook_core::DomainResult;

use crate::clock::{Clock, SystemClock};

/// A record that can check itself against its registered rules.
///
/// Persistence code must call this before writing and abort on `Err`.
pub trait Validate {
    /// Validate with "now" taken from `clock`.
    fn validate_at(&self, clock: &dyn Clock) -> DomainResult<()>;

    /// Validate against wall-clock time.
    fn validate(&self) -> DomainResult<()> {
        self.validate_at(&SystemClock)
    }
}
