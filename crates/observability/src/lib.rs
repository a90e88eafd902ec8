//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> bool {
    tracing::init()
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::init_for_tests;
