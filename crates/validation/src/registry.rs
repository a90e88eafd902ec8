//! Rule registry: record type → ordered rule list.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use vendorbook_core::{DomainError, DomainResult, Record};

use crate::clock::Clock;
use crate::config::ValidationConfig;
use crate::evaluator::evaluate_rules;
use crate::result::ValidationResult;
use crate::rule::{EvalContext, Rule};

struct RuleSet {
    record_type: &'static str,
    len: usize,
    /// `Vec<Rule<R>>` for the record type this entry is keyed by.
    rules: Box<dyn Any + Send + Sync>,
}

/// Holds the rule sets of every registered record type.
///
/// Populate once at startup, then share read-only; `evaluate` takes `&self`
/// so concurrent validations need no locking.
#[derive(Default)]
pub struct Registry {
    config: ValidationConfig,
    rule_sets: HashMap<TypeId, RuleSet>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self {
            config,
            rule_sets: HashMap::new(),
        }
    }

    pub fn config(&self) -> ValidationConfig {
        self.config
    }

    /// Register the rules for `R`, replacing any previously registered set.
    pub fn register<R: Record>(&mut self, rules: Vec<Rule<R>>) -> &mut Self {
        let len = rules.len();
        let previous = self.rule_sets.insert(
            TypeId::of::<R>(),
            RuleSet {
                record_type: R::RECORD_TYPE,
                len,
                rules: Box::new(rules),
            },
        );

        tracing::debug!(
            record_type = R::RECORD_TYPE,
            rules = len,
            replaced = previous.is_some(),
            "registered validation rules"
        );
        self
    }

    pub fn is_registered<R: Record>(&self) -> bool {
        self.rule_sets.contains_key(&TypeId::of::<R>())
    }

    /// Number of rules registered for `R` (0 when unregistered).
    pub fn rule_count<R: Record>(&self) -> usize {
        self.rule_sets
            .get(&TypeId::of::<R>())
            .map_or(0, |set| set.len)
    }

    /// Names of all registered record types, sorted.
    pub fn record_types(&self) -> Vec<&'static str> {
        let mut types: Vec<_> = self.rule_sets.values().map(|s| s.record_type).collect();
        types.sort_unstable();
        types
    }

    fn rules_for<R: Record>(&self) -> Option<&[Rule<R>]> {
        self.rule_sets
            .get(&TypeId::of::<R>())
            .and_then(|set| set.rules.downcast_ref::<Vec<Rule<R>>>())
            .map(Vec::as_slice)
    }

    /// Run every rule registered for `R` against `record`.
    ///
    /// "Now" is read from `clock` once, so all date rules of one call agree.
    /// An unregistered type yields an empty result.
    pub fn evaluate<R: Record>(&self, record: &R, clock: &dyn Clock) -> ValidationResult {
        let Some(rules) = self.rules_for::<R>() else {
            tracing::warn!(record_type = R::RECORD_TYPE, "no validation rules registered");
            return ValidationResult::new();
        };

        let ctx = EvalContext::new(clock.now());
        let result = evaluate_rules(rules, record, &ctx);

        tracing::debug!(
            record_type = R::RECORD_TYPE,
            failures = result.len(),
            "evaluated validation rules"
        );
        result
    }

    /// Evaluate and convert to a domain result.
    ///
    /// In strict mode an unregistered record type is an invariant violation.
    pub fn validate<R: Record>(&self, record: &R, clock: &dyn Clock) -> DomainResult<()> {
        if self.config.strict && !self.is_registered::<R>() {
            return Err(DomainError::invariant(format!(
                "no validation rules registered for `{}`",
                R::RECORD_TYPE
            )));
        }
        self.evaluate(record, clock).into_result()
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("record_types", &self.record_types())
            .finish()
    }
}
