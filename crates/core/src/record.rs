//! Record trait: a plain data value that is validated before it is persisted.

/// Record marker + minimal interface.
///
/// Records carry no identity or behavior of their own; the only thing the
/// domain layer needs is a stable name to key rule sets by.
pub trait Record: 'static {
    /// Stable record type identifier (e.g. "parties.supplier").
    const RECORD_TYPE: &'static str;
}
