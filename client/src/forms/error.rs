//! Field-level validation failures.
//!
//! ERROR HANDLING
//! ==============
//! Field errors never leave the form that produced them. Each variant's
//! `Display` output is the message rendered next to the offending input.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

/// A single rule violation for one form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The value does not match the field's grammar.
    #[error("Invalid {what}")]
    InvalidFormat { what: &'static str },

    /// The value is shorter than the field's minimum length.
    #[error("{label} must have at least {min} characters")]
    TooShort { label: &'static str, min: usize },

    /// The value is longer than the field's maximum length.
    #[error("{label} can't have more than {max} characters")]
    TooLong { label: &'static str, max: usize },

    /// The password is missing an uppercase letter, a digit, or a special character.
    #[error("Password must have at least 1 uppercase letter, 1 number and 1 special character")]
    WeakComposition,

    /// The terms checkbox was left unchecked.
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
}

/// Per-field validation failures for one form submission, keyed by field.
///
/// Holds at most one error per field: the first rule that failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, FieldError>,
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self { errors: BTreeMap::new() }
    }

    /// Record `error` for `field` unless the field already has one.
    pub fn insert(&mut self, field: F, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    /// Record the error from a field rule, if any.
    pub fn check(&mut self, field: F, result: Result<(), FieldError>) {
        if let Err(error) = result {
            self.insert(field, error);
        }
    }

    pub fn get(&self, field: F) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// User-facing message for `field`, if it failed.
    pub fn message(&self, field: F) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failed fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.errors.keys().copied()
    }

    /// `Ok(())` when nothing failed, otherwise the collected errors.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl<F: Ord + Copy> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}
