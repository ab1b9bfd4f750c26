//! Login form schema.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::{Deserialize, Serialize};

use super::FormSchema;
use super::error::FieldErrors;
use super::rules::{self, PasswordPolicy};

/// Password limits for signing in. Deliberately narrower than registration.
pub const LOGIN_PASSWORD_POLICY: PasswordPolicy = PasswordPolicy { min: 8, max: 15 };

/// Fields of the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

/// Values captured from the login form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl FormSchema for LoginCredentials {
    type Field = LoginField;

    fn validate(&self) -> Result<(), FieldErrors<LoginField>> {
        let mut errors = FieldErrors::new();
        errors.check(LoginField::Email, rules::check_email(&self.email));
        errors.check(LoginField::Password, LOGIN_PASSWORD_POLICY.check(&self.password));
        errors.into_result()
    }
}
