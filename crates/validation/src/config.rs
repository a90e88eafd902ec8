//! Engine configuration.

use vendorbook_core::{DomainError, DomainResult};

/// Environment variable that toggles strict mode.
pub const STRICT_ENV: &str = "VENDORBOOK_VALIDATION_STRICT";

/// Validation engine configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Reject records whose type has no registered rules instead of treating
    /// them as valid.
    pub strict: bool,
}

impl ValidationConfig {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Load configuration from the process environment.
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let Ok(raw) = std::env::var(STRICT_ENV) else {
            return Self::default();
        };

        match Self::parse_flag(&raw) {
            Ok(strict) => Self { strict },
            Err(err) => {
                tracing::warn!(env = STRICT_ENV, value = %raw, error = %err, "ignoring invalid setting");
                Self::default()
            }
        }
    }

    /// Parse a boolean flag (`true`/`false`/`1`/`0`, case-insensitive).
    pub fn parse_flag(raw: &str) -> DomainResult<bool> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(DomainError::validation(format!(
                "expected true/false/1/0, got `{other}`"
            ))),
        }
    }
}
