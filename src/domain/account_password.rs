use crate::domain::ValidationError;
use secrecy::{ExposeSecret, Secret};

/// A password that satisfied the strength policy. Wrapped in `Secret` so it
/// cannot leak through `Debug` formatting or tracing spans while it is in
/// flight between validation and the store.
#[derive(Debug, Clone)]
pub struct AccountPassword(Secret<String>);

impl AccountPassword {
    /// Enforces the strength policy on the trimmed input: at least 8
    /// characters, with at least one uppercase letter, one lowercase letter
    /// and one decimal digit. Character classes use `char`'s Unicode
    /// classification, never locale rules.
    pub fn parse(s: &str) -> Result<AccountPassword, ValidationError> {
        let trimmed = s.trim();

        let is_long_enough = trimmed.chars().count() >= 8;
        let has_uppercase = trimmed.chars().any(char::is_uppercase);
        let has_lowercase = trimmed.chars().any(char::is_lowercase);
        let has_digit = trimmed.chars().any(|c| c.is_ascii_digit());

        if is_long_enough && has_uppercase && has_lowercase && has_digit {
            Ok(Self(Secret::new(trimmed.to_owned())))
        } else {
            Err(ValidationError::WeakPassword)
        }
    }

    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}
