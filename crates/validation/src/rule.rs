//! Rule model: one predicate over a record plus the message it reports.

use chrono::{DateTime, Utc};

/// Per-evaluation context shared by every rule of one `evaluate` call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EvalContext {
    now: DateTime<Utc>,
}

impl EvalContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Evaluation-time "now", captured once per call.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Capability interface: decides whether a record satisfies a rule.
///
/// Predicates see the whole record, so cross-field rules are just predicates
/// that read more than one field.
pub trait Predicate<R>: Send + Sync {
    fn test(&self, record: &R, ctx: &EvalContext) -> bool;
}

impl<R, F> Predicate<R> for F
where
    F: Fn(&R, &EvalContext) -> bool + Send + Sync,
{
    fn test(&self, record: &R, ctx: &EvalContext) -> bool {
        self(record, ctx)
    }
}

/// A single field-level or cross-field rule.
pub struct Rule<R> {
    field: &'static str,
    message: String,
    predicate: Box<dyn Predicate<R>>,
}

impl<R> Rule<R> {
    /// Build a rule. Message emptiness is checked by
    /// [`RuleBuilder::build`](crate::RuleBuilder::build).
    pub fn new<P>(field: &'static str, message: impl Into<String>, predicate: P) -> Self
    where
        P: Predicate<R> + 'static,
    {
        Self {
            field,
            message: message.into(),
            predicate: Box::new(predicate),
        }
    }

    /// Name of the field this rule is bound to.
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether `record` satisfies this rule.
    pub fn check(&self, record: &R, ctx: &EvalContext) -> bool {
        self.predicate.test(record, ctx)
    }
}

impl<R> core::fmt::Debug for Rule<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
