use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendorbook_core::{DomainResult, Record};
use vendorbook_validation::{Clock, Rule, RuleBuilder, Validate};

use crate::registry::registry;
use crate::rules::{ContactFields, contact_rules, name_rules};

/// Length of a CNPJ (Brazilian company tax id) without punctuation.
pub const TAX_ID_LEN: usize = 14;

/// Supplier record as received from a caller.
///
/// Text fields are empty when not provided; dates are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    pub name: String,
    /// CNPJ, digits only.
    pub tax_id: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for Supplier {
    const RECORD_TYPE: &'static str = "parties.supplier";
}

impl Validate for Supplier {
    fn validate_at(&self, clock: &dyn Clock) -> DomainResult<()> {
        registry()?.validate(self, clock)
    }
}

/// Supplier rules, in message order.
pub fn supplier_rules() -> DomainResult<Vec<Rule<Supplier>>> {
    let mut rules = RuleBuilder::<Supplier>::new();

    name_rules(&mut rules, |s| &s.name);

    rules
        .field("taxId", |s: &Supplier| &s.tax_id)
        .not_empty("O CNPJ é obrigatório.")
        .exact_length(TAX_ID_LEN, "O CNPJ deve ter 14 caracteres.")
        // Digits only; the CNPJ check digits are not verified.
        .must("CNPJ inválido.", |v: &String| v.chars().all(|c| c.is_ascii_digit()));

    contact_rules(
        &mut rules,
        ContactFields {
            phone: |s| &s.phone,
            email: |s| &s.email,
            address: |s| &s.address,
            created_at: |s| &s.created_at,
        },
    )?;

    rules.build()
}
