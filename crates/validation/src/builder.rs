//! Fluent rule declarations.
//!
//! Each chained check produces exactly one [`Rule`], so a field with three
//! checks contributes three independent rules (and up to three messages).
//!
//! ```ignore
//! let mut rules = RuleBuilder::<Supplier>::new();
//! rules
//!     .field("name", |s: &Supplier| &s.name)
//!     .not_empty("O nome é obrigatório.")
//!     .length(2, 100, "O nome deve ter entre 2 e 100 caracteres.");
//! let rules = rules.build()?;
//! ```

use chrono::{DateTime, Utc};
use regex::Regex;

use vendorbook_core::{DomainError, DomainResult};

use crate::rule::{EvalContext, Rule};

/// Reads one field out of a record.
pub type Accessor<R, T> = fn(&R) -> &T;

/// Optional timestamp field (`None` = not provided).
pub type DateField = Option<DateTime<Utc>>;

/// Collects rules for one record type, in declaration order.
pub struct RuleBuilder<R> {
    rules: Vec<Rule<R>>,
}

impl<R: 'static> RuleBuilder<R> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Start declaring checks for `name`.
    pub fn field<T>(&mut self, name: &'static str, accessor: Accessor<R, T>) -> FieldRules<'_, R, T> {
        FieldRules {
            builder: self,
            name,
            accessor,
        }
    }

    /// Append an arbitrary rule (e.g. one spanning several fields).
    pub fn rule(&mut self, rule: Rule<R>) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Finish, rejecting rules whose message is empty.
    pub fn build(self) -> DomainResult<Vec<Rule<R>>> {
        if let Some(rule) = self.rules.iter().find(|r| r.message().trim().is_empty()) {
            return Err(DomainError::validation(format!(
                "rule on field `{}` has an empty message",
                rule.field()
            )));
        }
        Ok(self.rules)
    }
}

impl<R: 'static> Default for RuleBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks bound to a single field.
pub struct FieldRules<'a, R, T> {
    builder: &'a mut RuleBuilder<R>,
    name: &'static str,
    accessor: Accessor<R, T>,
}

impl<R: 'static, T: 'static> FieldRules<'_, R, T> {
    fn push<P>(self, message: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(&R, &EvalContext) -> bool + Send + Sync + 'static,
    {
        self.builder.rules.push(Rule::new(self.name, message, predicate));
        self
    }

    /// Custom check on the field value.
    pub fn must<F>(self, message: impl Into<String>, check: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let get = self.accessor;
        self.push(message, move |r, _| check(get(r)))
    }
}

/// Text that may be absent (`None` for an omitted optional field).
pub trait TextValue: Send + Sync + 'static {
    fn text(&self) -> Option<&str>;
}

impl TextValue for String {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextValue for Option<String> {
    fn text(&self) -> Option<&str> {
        self.as_deref()
    }
}

/// Only `not_empty` fails on absent text; the shape checks pass on it.
impl<R: 'static, T: TextValue> FieldRules<'_, R, T> {
    /// Required: present, not empty and not whitespace-only.
    pub fn not_empty(self, message: impl Into<String>) -> Self {
        let get = self.accessor;
        self.push(message, move |r, _| {
            get(r).text().is_some_and(|s| !s.trim().is_empty())
        })
    }

    /// Character count within `min..=max`.
    pub fn length(self, min: usize, max: usize, message: impl Into<String>) -> Self {
        let get = self.accessor;
        self.push(message, move |r, _| {
            get(r)
                .text()
                .is_none_or(|s| (min..=max).contains(&s.chars().count()))
        })
    }

    /// Character count exactly `len`.
    pub fn exact_length(self, len: usize, message: impl Into<String>) -> Self {
        let get = self.accessor;
        self.push(message, move |r, _| {
            get(r).text().is_none_or(|s| s.chars().count() == len)
        })
    }

    /// Must match `pattern`.
    pub fn matches(self, pattern: Regex, message: impl Into<String>) -> Self {
        let get = self.accessor;
        self.push(message, move |r, _| {
            get(r).text().is_none_or(|s| pattern.is_match(s))
        })
    }

    /// Loose email shape: exactly one `@`, neither first nor last.
    pub fn email(self, message: impl Into<String>) -> Self {
        let get = self.accessor;
        self.push(message, move |r, _| get(r).text().is_none_or(is_email_shaped))
    }
}

impl<R: 'static> FieldRules<'_, R, DateField> {
    /// Required date.
    pub fn present(self, message: impl Into<String>) -> Self {
        let get = self.accessor;
        self.push(message, move |r, _| get(r).is_some())
    }

    /// `value <= now`. Passes when the date is missing.
    pub fn at_most_now(self, message: impl Into<String>) -> Self {
        let get = self.accessor;
        self.push(message, move |r, ctx| get(r).is_none_or(|d| d <= ctx.now()))
    }

    /// `value < now`. Passes when the date is missing.
    pub fn before_now(self, message: impl Into<String>) -> Self {
        let get = self.accessor;
        self.push(message, move |r, ctx| get(r).is_none_or(|d| d < ctx.now()))
    }

    /// `value > other`, where `other` is another date of the same record.
    ///
    /// A missing value is earlier than any date, so it fails; a missing
    /// `other` is passed by any present value.
    pub fn after(self, other: Accessor<R, DateField>, message: impl Into<String>) -> Self {
        let get = self.accessor;
        self.push(message, move |r, _| match (get(r), other(r)) {
            (Some(value), Some(bound)) => value > bound,
            (Some(_), None) => true,
            (None, _) => false,
        })
    }
}

impl<R: 'static> FieldRules<'_, R, f64> {
    /// `min <= value <= max`. NaN fails.
    pub fn between(self, min: f64, max: f64, message: impl Into<String>) -> Self {
        let get = self.accessor;
        self.push(message, move |r, _| (min..=max).contains(get(r)))
    }

    /// `value > bound`. NaN fails.
    pub fn greater_than(self, bound: f64, message: impl Into<String>) -> Self {
        let get = self.accessor;
        self.push(message, move |r, _| *get(r) > bound)
    }
}

fn is_email_shaped(value: &str) -> bool {
    match (value.find('@'), value.rfind('@')) {
        (Some(first), Some(last)) => first == last && first > 0 && first < value.len() - 1,
        _ => false,
    }
}
