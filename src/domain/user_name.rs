use crate::domain::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Returns an instance of `UserName` if the input contains anything
    /// beyond whitespace. Leading/trailing whitespace is stripped: the
    /// trimmed form is what ends up in the store, not the raw input.
    ///
    /// There is deliberately no length cap or forbidden-character list
    /// here: any non-blank name is accepted, and duplicates are allowed.
    pub fn parse(s: &str) -> Result<UserName, ValidationError> {
        // `.trim()` returns a view over the input `s` without leading and
        // trailing whitespace-like characters.
        let trimmed = s.trim();

        if trimmed.is_empty() {
            Err(ValidationError::EmptyField)
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

/// The caller gets a shared reference to the inner string. This gives the caller **read-only**
/// access, they have no way to compromise our invariants!
impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
