//! Rule evaluator — pure logic, no I/O.

use crate::result::ValidationResult;
use crate::rule::{EvalContext, Rule};

/// Evaluate all rules against a single record.
///
/// Every rule runs regardless of earlier failures; failures are reported in
/// rule order.
pub fn evaluate_rules<R>(rules: &[Rule<R>], record: &R, ctx: &EvalContext) -> ValidationResult {
    let mut result = ValidationResult::new();

    for rule in rules {
        if !rule.check(record, ctx) {
            result.push(rule.field(), rule.message());
        }
    }

    result
}
