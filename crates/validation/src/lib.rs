//! Declarative field-validation engine.
//!
//! Rules are declared per record type with [`RuleBuilder`], stored in a
//! [`Registry`], and evaluated exhaustively: every rule runs and every failure
//! message is kept, in declaration order. [`ValidationResult::into_result`]
//! folds the failures into a single [`vendorbook_core::DomainError`].

pub mod builder;
pub mod clock;
pub mod config;
pub mod evaluator;
pub mod registry;
pub mod result;
pub mod rule;
pub mod validate;

pub use builder::{Accessor, DateField, FieldRules, RuleBuilder, TextValue};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ValidationConfig;
pub use evaluator::evaluate_rules;
pub use registry::Registry;
pub use result::{Failure, ValidationResult};
pub use rule::{EvalContext, Predicate, Rule};
pub use validate::Validate;
