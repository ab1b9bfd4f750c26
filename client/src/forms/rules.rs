//! Field rules shared by the login and registration schemas.
//!
//! Every rule is a pure function of its input and returns the first
//! violated constraint as a [`FieldError`].

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::sync::LazyLock;

use regex::Regex;

use super::error::FieldError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._\s-]{3,30}$").expect("name pattern is a valid regex"));

/// Length in UTF-16 code units, matching how browsers measure input values.
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Whether `value` has the `local@domain.tld` shape.
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Email rule: fails with `InvalidFormat` unless [`is_email`] holds.
///
/// # Errors
///
/// Returns [`FieldError::InvalidFormat`] for anything that is not an email address.
pub fn check_email(value: &str) -> Result<(), FieldError> {
    if is_email(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidFormat { what: "email address" })
    }
}

/// Single composition predicate: at least one ASCII uppercase letter, one
/// ASCII digit, and one character that is not an ASCII letter or digit.
pub fn has_strong_composition(value: &str) -> bool {
    let mut upper = false;
    let mut digit = false;
    let mut special = false;
    for c in value.chars() {
        upper |= c.is_ascii_uppercase();
        digit |= c.is_ascii_digit();
        special |= !c.is_ascii_alphanumeric();
    }
    upper && digit && special
}

/// Length bounds plus the composition rule for a password field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min: usize,
    pub max: usize,
}

impl PasswordPolicy {
    /// Check `value` against minimum length, maximum length, then composition.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        let len = utf16_len(value);
        if len < self.min {
            return Err(FieldError::TooShort { label: "Password", min: self.min });
        }
        if len > self.max {
            return Err(FieldError::TooLong { label: "Password", max: self.max });
        }
        if !has_strong_composition(value) {
            return Err(FieldError::WeakComposition);
        }
        Ok(())
    }
}

/// Display-name rule: 3 to 30 letters, digits, whitespace, `.`, `_` or `-`.
///
/// # Errors
///
/// Returns [`FieldError::InvalidFormat`] when the length or alphabet is wrong.
pub fn check_name(value: &str) -> Result<(), FieldError> {
    if NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidFormat { what: "name" })
    }
}

/// Terms rule: the checkbox must be ticked.
///
/// # Errors
///
/// Returns [`FieldError::TermsNotAccepted`] when `accepted` is `false`.
pub fn check_terms(accepted: bool) -> Result<(), FieldError> {
    if accepted { Ok(()) } else { Err(FieldError::TermsNotAccepted) }
}
