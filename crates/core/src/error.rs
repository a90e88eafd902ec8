//! Domain error model.

use thiserror::Error;

/// Separator placed between failure messages when they are joined into one
/// user-facing error ("and" in the domain language).
pub const MESSAGE_SEPARATOR: &str = " e ";

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record failed one or more field rules.
    ///
    /// Carries every failure message in rule order; the rendered text is the
    /// messages joined with [`MESSAGE_SEPARATOR`].
    #[error("{}", join_messages(.0))]
    ValidationFailed(Vec<String>),

    /// A value failed validation (e.g. malformed input or configuration).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation_failed<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ValidationFailed(messages.into_iter().map(Into::into).collect())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Individual failure messages, if this is a [`DomainError::ValidationFailed`].
    pub fn messages(&self) -> &[String] {
        match self {
            Self::ValidationFailed(messages) => messages,
            _ => &[],
        }
    }
}

/// Join failure messages with [`MESSAGE_SEPARATOR`].
pub fn join_messages<S: AsRef<str>>(messages: &[S]) -> String {
    let mut out = String::new();
    for (i, msg) in messages.iter().enumerate() {
        if i > 0 {
            out.push_str(MESSAGE_SEPARATOR);
        }
        out.push_str(msg.as_ref());
    }
    out
}
