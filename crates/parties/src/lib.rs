//! Parties domain module (suppliers and salespeople).
//!
//! Records and their field rules, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage). Callers validate a record with
//! [`Validate::validate`] before handing it to persistence.

pub mod registry;
pub mod rules;
pub mod salesperson;
pub mod supplier;

pub use registry::{build_registry, registry};
pub use rules::PHONE_PATTERN;
pub use salesperson::{Salesperson, salesperson_rules};
pub use supplier::{Supplier, TAX_ID_LEN, supplier_rules};
pub use vendorbook_validation::Validate;
