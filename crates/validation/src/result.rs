//! Validation outcome and its conversion into a domain error.

use serde::Serialize;

use vendorbook_core::{DomainError, DomainResult};

/// A single unsatisfied rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub field: &'static str,
    pub message: String,
}

/// Ordered failure messages from one evaluation (empty = valid).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    failures: Vec<Failure>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.failures.push(Failure {
            field,
            message: message.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of unsatisfied rules.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.message.as_str())
    }

    /// `Ok(())` when valid, otherwise one [`DomainError::ValidationFailed`]
    /// carrying every message in rule order.
    pub fn into_result(self) -> DomainResult<()> {
        if self.failures.is_empty() {
            return Ok(());
        }
        Err(DomainError::ValidationFailed(
            self.failures.into_iter().map(|f| f.message).collect(),
        ))
    }
}
