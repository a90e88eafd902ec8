use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendorbook_core::{DomainResult, Record};
use vendorbook_validation::{Clock, Rule, RuleBuilder, Validate};

use crate::registry::registry;
use crate::rules::{ContactFields, contact_rules, name_rules};

/// Salesperson record as received from a caller.
///
/// Omitted text fields are `None`: they only fail their "required" rule, not
/// the length or format checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Salesperson {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub birth_date: Option<DateTime<Utc>>,
    pub hire_date: Option<DateTime<Utc>>,
    /// Commission as a percentage (0–100).
    pub commission_rate: f64,
    pub monthly_quota: f64,
}

impl Record for Salesperson {
    const RECORD_TYPE: &'static str = "parties.salesperson";
}

impl Validate for Salesperson {
    fn validate_at(&self, clock: &dyn Clock) -> DomainResult<()> {
        registry()?.validate(self, clock)
    }
}

/// Salesperson rules, in message order.
pub fn salesperson_rules() -> DomainResult<Vec<Rule<Salesperson>>> {
    let mut rules = RuleBuilder::<Salesperson>::new();

    name_rules(&mut rules, |s| &s.name);

    contact_rules(
        &mut rules,
        ContactFields {
            phone: |s| &s.phone,
            email: |s| &s.email,
            address: |s| &s.address,
            created_at: |s| &s.created_at,
        },
    )?;

    rules
        .field("birthDate", |s: &Salesperson| &s.birth_date)
        .present("A data de nascimento é obrigatória.")
        .before_now("A data de nascimento deve ser uma data passada.");

    rules
        .field("hireDate", |s: &Salesperson| &s.hire_date)
        .present("A data de contratação é obrigatória.")
        .at_most_now("A data de contratação não pode ser no futuro.")
        .after(
            |s: &Salesperson| &s.birth_date,
            "A data de contratação deve ser posterior à data de nascimento.",
        );

    rules
        .field("commissionRate", |s: &Salesperson| &s.commission_rate)
        .between(0.0, 100.0, "O percentual de comissão deve estar entre 0 e 100.");

    rules
        .field("monthlyQuota", |s: &Salesperson| &s.monthly_quota)
        .greater_than(0.0, "A meta mensal deve ser maior que zero.");

    rules.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use vendorbook_validation::FixedClock;

    const ORDERING_MSG: &str = "A data de contratação deve ser posterior à data de nascimento.";
    const COMMISSION_MSG: &str = "O percentual de comissão deve estar entre 0 e 100.";
    const QUOTA_MSG: &str = "A meta mensal deve ser maior que zero.";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock(now())
    }

    fn valid_salesperson() -> Salesperson {
        Salesperson {
            name: Some("Ana Souza".to_string()),
            phone: Some("(21) 3456-7890".to_string()),
            email: Some("ana.souza@example.com".to_string()),
            address: Some("Rua das Flores, 42".to_string()),
            created_at: Some(now() - Duration::days(1)),
            birth_date: Some(Utc.with_ymd_and_hms(1990, 3, 15, 0, 0, 0).unwrap()),
            hire_date: Some(Utc.with_ymd_and_hms(2015, 8, 1, 0, 0, 0).unwrap()),
            commission_rate: 5.5,
            monthly_quota: 25_000.0,
        }
    }

    fn messages(salesperson: &Salesperson) -> Vec<String> {
        match salesperson.validate_at(&clock()) {
            Ok(()) => Vec::new(),
            Err(err) => err.messages().to_vec(),
        }
    }

    #[test]
    fn valid_salesperson_passes() {
        assert_eq!(valid_salesperson().validate_at(&clock()), Ok(()));
    }

    #[test]
    fn rule_count_matches_declarations() {
        assert_eq!(salesperson_rules().unwrap().len(), 16);
    }

    #[test]
    fn hire_before_birth_fails_ordering_only() {
        let salesperson = Salesperson {
            birth_date: Some(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()),
            hire_date: Some(Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap()),
            ..valid_salesperson()
        };
        assert_eq!(messages(&salesperson), [ORDERING_MSG]);
    }

    #[test]
    fn hire_on_birth_instant_fails_ordering() {
        let day = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let salesperson = Salesperson {
            birth_date: Some(day),
            hire_date: Some(day),
            ..valid_salesperson()
        };
        assert_eq!(messages(&salesperson), [ORDERING_MSG]);
    }

    #[test]
    fn birth_date_must_be_strictly_past() {
        let salesperson = Salesperson {
            birth_date: Some(now()),
            hire_date: Some(now()),
            ..valid_salesperson()
        };
        assert_eq!(
            messages(&salesperson),
            [
                "A data de nascimento deve ser uma data passada.",
                ORDERING_MSG,
            ]
        );
    }

    #[test]
    fn hire_date_may_be_now_but_not_later() {
        let today = Salesperson {
            hire_date: Some(now()),
            ..valid_salesperson()
        };
        assert!(messages(&today).is_empty());

        let tomorrow = Salesperson {
            hire_date: Some(now() + Duration::days(1)),
            ..valid_salesperson()
        };
        assert_eq!(
            messages(&tomorrow),
            ["A data de contratação não pode ser no futuro."]
        );
    }

    #[test]
    fn missing_dates_report_required_and_ordering() {
        let salesperson = Salesperson {
            birth_date: None,
            hire_date: None,
            ..valid_salesperson()
        };
        assert_eq!(
            messages(&salesperson),
            [
                "A data de nascimento é obrigatória.",
                "A data de contratação é obrigatória.",
                ORDERING_MSG,
            ]
        );
    }

    #[test]
    fn missing_hire_date_still_fails_ordering() {
        let salesperson = Salesperson {
            hire_date: None,
            ..valid_salesperson()
        };
        assert_eq!(
            messages(&salesperson),
            ["A data de contratação é obrigatória.", ORDERING_MSG]
        );
    }

    #[test]
    fn missing_birth_date_does_not_fail_ordering() {
        let salesperson = Salesperson {
            birth_date: None,
            ..valid_salesperson()
        };
        assert_eq!(
            messages(&salesperson),
            ["A data de nascimento é obrigatória."]
        );
    }

    #[test]
    fn omitted_text_reports_required_only() {
        let salesperson = Salesperson {
            name: None,
            phone: None,
            email: None,
            address: None,
            ..valid_salesperson()
        };
        assert_eq!(
            messages(&salesperson),
            [
                "O nome é obrigatório.",
                "O telefone é obrigatório.",
                "O email é obrigatório.",
                "O endereço é obrigatório.",
            ]
        );
    }

    #[test]
    fn empty_text_also_fails_shape_checks() {
        let salesperson = Salesperson {
            name: Some(String::new()),
            phone: Some(String::new()),
            email: Some(String::new()),
            ..valid_salesperson()
        };
        assert_eq!(
            messages(&salesperson),
            [
                "O nome é obrigatório.",
                "O nome deve ter entre 2 e 100 caracteres.",
                "O telefone é obrigatório.",
                "Formato de telefone inválido. Ex: (XX) XXXXX-XXXX ou (XX) XXXX-XXXX",
                "O email é obrigatório.",
                "Formato de email inválido.",
            ]
        );
    }

    #[test]
    fn commission_bounds_are_inclusive() {
        for rate in [0.0, 100.0] {
            let salesperson = Salesperson {
                commission_rate: rate,
                ..valid_salesperson()
            };
            assert!(messages(&salesperson).is_empty(), "rate {rate} should pass");
        }

        for rate in [-1.0, 101.0, f64::NAN] {
            let salesperson = Salesperson {
                commission_rate: rate,
                ..valid_salesperson()
            };
            assert_eq!(messages(&salesperson), [COMMISSION_MSG], "rate {rate}");
        }
    }

    #[test]
    fn monthly_quota_must_be_positive() {
        for quota in [0.0, -10.0] {
            let salesperson = Salesperson {
                monthly_quota: quota,
                ..valid_salesperson()
            };
            assert_eq!(messages(&salesperson), [QUOTA_MSG], "quota {quota}");
        }

        let smallest = Salesperson {
            monthly_quota: 0.01,
            ..valid_salesperson()
        };
        assert!(messages(&smallest).is_empty());
    }

    #[test]
    fn default_salesperson_reports_every_failure_in_order() {
        assert_eq!(
            messages(&Salesperson::default()),
            [
                "O nome é obrigatório.",
                "O telefone é obrigatório.",
                "O email é obrigatório.",
                "O endereço é obrigatório.",
                "A data de criação é obrigatória.",
                "A data de nascimento é obrigatória.",
                "A data de contratação é obrigatória.",
                ORDERING_MSG,
                QUOTA_MSG,
            ]
        );
    }

    #[test]
    fn binds_from_camel_case_json() {
        let salesperson: Salesperson = serde_json::from_str(
            r#"{
                "name": "Ana Souza",
                "phone": "(21) 93456-7890",
                "email": "ana.souza@example.com",
                "address": "Rua das Flores, 42",
                "createdAt": "2024-05-31T09:00:00Z",
                "birthDate": "1990-03-15T00:00:00Z",
                "hireDate": "2015-08-01T00:00:00Z",
                "commissionRate": 100,
                "monthlyQuota": 1500.5
            }"#,
        )
        .unwrap();

        assert_eq!(salesperson.commission_rate, 100.0);
        assert_eq!(salesperson.validate_at(&clock()), Ok(()));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any commission in [0, 100] passes, anything outside fails.
            #[test]
            fn commission_range(rate in -1_000.0f64..1_000.0f64) {
                let salesperson = Salesperson {
                    commission_rate: rate,
                    ..valid_salesperson()
                };
                let failed = messages(&salesperson).contains(&COMMISSION_MSG.to_string());
                prop_assert_eq!(failed, !(0.0..=100.0).contains(&rate));
            }

            /// Property: failure count equals the number of broken rules
            /// (evaluation never stops at the first failure).
            #[test]
            fn failure_count_is_exhaustive(
                name in prop_oneof![
                    Just((Some("Ana Souza"), 0usize)),
                    Just((Some("A"), 1)),
                    Just((Some(""), 2)),
                    Just((None, 1)),
                ],
                phone in prop_oneof![
                    Just((Some("(11) 91234-5678"), 0usize)),
                    Just((Some("11 91234-5678"), 1)),
                    Just((Some(""), 2)),
                    Just((None, 1)),
                ],
                email in prop_oneof![
                    Just((Some("ana@example.com"), 0usize)),
                    Just((Some("ana.example.com"), 1)),
                    Just((Some(""), 2)),
                    Just((None, 1)),
                ],
                address in prop_oneof![
                    Just((Some("Rua A, 1"), 0usize)),
                    Just((Some(""), 1)),
                    Just((None, 1)),
                ],
                commission in prop_oneof![Just((10.0f64, 0usize)), Just((101.0, 1)), Just((-1.0, 1))],
                quota in prop_oneof![Just((100.0f64, 0usize)), Just((0.0, 1))],
            ) {
                let salesperson = Salesperson {
                    name: name.0.map(str::to_string),
                    phone: phone.0.map(str::to_string),
                    email: email.0.map(str::to_string),
                    address: address.0.map(str::to_string),
                    commission_rate: commission.0,
                    monthly_quota: quota.0,
                    ..valid_salesperson()
                };
                let expected = name.1 + phone.1 + email.1 + address.1 + commission.1 + quota.1;

                prop_assert_eq!(messages(&salesperson).len(), expected);
            }
        }
    }
}
