//! Registration form schema.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use serde::{Deserialize, Serialize};

use super::FormSchema;
use super::error::FieldErrors;
use super::rules::{self, PasswordPolicy};

/// Password limits for new accounts.
pub const REGISTER_PASSWORD_POLICY: PasswordPolicy = PasswordPolicy { min: 8, max: 30 };

/// Fields of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    Name,
    Email,
    Password,
    Terms,
}

/// Values captured from the registration form at submit time.
///
/// `terms_accepted` is a client-side gate only and is never serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDetails {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing, default)]
    pub terms_accepted: bool,
}

impl FormSchema for RegistrationDetails {
    type Field = RegisterField;

    fn validate(&self) -> Result<(), FieldErrors<RegisterField>> {
        let mut errors = FieldErrors::new();
        errors.check(RegisterField::Name, rules::check_name(&self.name));
        errors.check(RegisterField::Email, rules::check_email(&self.email));
        errors.check(RegisterField::Password, REGISTER_PASSWORD_POLICY.check(&self.password));
        errors.check(RegisterField::Terms, rules::check_terms(self.terms_accepted));
        errors.into_result()
    }
}
