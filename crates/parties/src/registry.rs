//! Process-wide rule registry for party records.

use std::sync::LazyLock;

use vendorbook_core::DomainResult;
use vendorbook_validation::{Registry, ValidationConfig};

use crate::salesperson::salesperson_rules;
use crate::supplier::supplier_rules;

static REGISTRY: LazyLock<DomainResult<Registry>> =
    LazyLock::new(|| build_registry(ValidationConfig::from_env()));

/// Registry with every party record's rules, built on first use and
/// read-only afterwards.
pub fn registry() -> DomainResult<&'static Registry> {
    REGISTRY.as_ref().map_err(Clone::clone)
}

/// Build a fresh registry holding the supplier and salesperson rules.
pub fn build_registry(config: ValidationConfig) -> DomainResult<Registry> {
    let mut registry = Registry::with_config(config);
    registry
        .register(supplier_rules()?)
        .register(salesperson_rules()?);

    tracing::info!(
        record_types = ?registry.record_types(),
        strict = config.strict,
        "party validation rules loaded"
    );
    Ok(registry)
}
