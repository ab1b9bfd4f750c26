use super::*;
use crate::forms::error::FieldError;

fn creds(email: &str, password: &str) -> LoginCredentials {
    LoginCredentials::new(email, password)
}

#[test]
fn valid_credentials_pass() {
    assert_eq!(creds("a@b.com", "Abcdef1!").validate(), Ok(()));
}

#[test]
fn malformed_email_is_invalid_format() {
    for email in ["", "a", "a@b", "a@b.", "@b.com", "a@.com"] {
        let errors = creds(email, "Abcdef1!").validate().unwrap_err();
        assert_eq!(
            errors.get(LoginField::Email),
            Some(FieldError::InvalidFormat { what: "email address" }),
            "email {email:?}"
        );
        assert!(!errors.contains(LoginField::Password));
    }
}

#[test]
fn seven_char_password_is_too_short() {
    let errors = creds("a@b.com", "Abcde1!").validate().unwrap_err();
    assert_eq!(errors.get(LoginField::Password), Some(FieldError::TooShort { label: "Password", min: 8 }));
}

#[test]
fn sixteen_char_password_is_too_long() {
    let errors = creds("a@b.com", "Abcdefghijklm12!").validate().unwrap_err();
    assert_eq!(errors.get(LoginField::Password), Some(FieldError::TooLong { label: "Password", max: 15 }));
    assert_eq!(
        errors.message(LoginField::Password).as_deref(),
        Some("Password can't have more than 15 characters")
    );
}

#[test]
fn passwords_without_digit_are_weak_for_every_allowed_length() {
    for len in 8..=15 {
        let password = format!("A!{}", "x".repeat(len - 2));
        let errors = creds("a@b.com", &password).validate().unwrap_err();
        assert_eq!(errors.get(LoginField::Password), Some(FieldError::WeakComposition), "len {len}");
    }
}

#[test]
fn multiple_composition_failures_yield_one_message() {
    let errors = creds("a@b.com", "abcdefgh").validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(LoginField::Password), Some(FieldError::WeakComposition));
}

#[test]
fn both_fields_report_independently() {
    let errors = creds("nope", "short").validate().unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![LoginField::Email, LoginField::Password]);
}

#[test]
fn validation_is_deterministic() {
    let input = creds("bad@", "Abcdefgh");
    assert_eq!(input.validate(), input.validate());
}
