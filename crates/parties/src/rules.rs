//! Rules shared by every party record.

use regex::Regex;

use vendorbook_core::{DomainError, DomainResult};
use vendorbook_validation::{Accessor, DateField, RuleBuilder, TextValue};

/// `(NN) NNNN-NNNN` or `(NN) NNNNN-NNNN`.
pub const PHONE_PATTERN: &str = r"^\(\d{2}\)\s\d{4,5}-\d{4}$";

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

pub(crate) fn phone_regex() -> DomainResult<Regex> {
    Regex::new(PHONE_PATTERN).map_err(|e| DomainError::validation(format!("phone pattern: {e}")))
}

pub(crate) fn name_rules<R: 'static, T: TextValue>(rules: &mut RuleBuilder<R>, name: Accessor<R, T>) {
    rules
        .field("name", name)
        .not_empty("O nome é obrigatório.")
        .length(
            NAME_MIN_CHARS,
            NAME_MAX_CHARS,
            "O nome deve ter entre 2 e 100 caracteres.",
        );
}

/// Accessors for the contact block every party carries.
pub(crate) struct ContactFields<R, T> {
    pub phone: Accessor<R, T>,
    pub email: Accessor<R, T>,
    pub address: Accessor<R, T>,
    pub created_at: Accessor<R, DateField>,
}

pub(crate) fn contact_rules<R: 'static, T: TextValue>(
    rules: &mut RuleBuilder<R>,
    fields: ContactFields<R, T>,
) -> DomainResult<()> {
    rules
        .field("phone", fields.phone)
        .not_empty("O telefone é obrigatório.")
        .matches(
            phone_regex()?,
            "Formato de telefone inválido. Ex: (XX) XXXXX-XXXX ou (XX) XXXX-XXXX",
        );

    rules
        .field("email", fields.email)
        .not_empty("O email é obrigatório.")
        .email("Formato de email inválido.");

    rules
        .field("address", fields.address)
        .not_empty("O endereço é obrigatório.");

    rules
        .field("createdAt", fields.created_at)
        .present("A data de criação é obrigatória.")
        .at_most_now("A data de criação não pode ser no futuro.");

    Ok(())
}
