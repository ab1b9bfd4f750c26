use super::*;
use crate::forms::login::{LoginCredentials, LoginField};
use crate::forms::register::{RegisterField, RegistrationDetails};
use futures::executor::block_on;
use std::cell::RefCell;

fn ok_session() -> Result<Session, AuthError> {
    Ok(Session { token: "t".to_owned() })
}

#[test]
fn valid_login_invokes_handler_with_exact_value() {
    let seen = RefCell::new(Vec::new());
    let creds = LoginCredentials::new("a@b.com", "Abcdef1!");

    let outcome = block_on(submit(creds.clone(), |value| {
        seen.borrow_mut().push(value);
        async { ok_session() }
    }));

    assert_eq!(outcome, SubmitOutcome::Accepted(Session { token: "t".to_owned() }));
    assert_eq!(seen.into_inner(), vec![creds]);
}

#[test]
fn invalid_login_never_reaches_handler() {
    let calls = RefCell::new(0);
    let outcome = block_on(submit(LoginCredentials::new("a@b.com", "Abcde1!"), |_| {
        *calls.borrow_mut() += 1;
        async { ok_session() }
    }));

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected validation failure");
    };
    assert!(errors.contains(LoginField::Password));
    assert_eq!(calls.into_inner(), 0);
}

#[test]
fn valid_registration_is_submitted() {
    let details = RegistrationDetails {
        name: "John Doe".to_owned(),
        email: "john@x.com".to_owned(),
        password: "Strong1!".to_owned(),
        terms_accepted: true,
    };
    let outcome = block_on(submit(details, |_| async { ok_session() }));
    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
}

#[test]
fn registration_without_terms_is_invalid() {
    let details = RegistrationDetails {
        name: "John Doe".to_owned(),
        email: "john@x.com".to_owned(),
        password: "Strong1!".to_owned(),
        terms_accepted: false,
    };
    let outcome = block_on(submit(details, |_| async { ok_session() }));
    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![RegisterField::Terms]);
}

#[test]
fn handler_failure_is_rejected() {
    let outcome = block_on(submit(LoginCredentials::new("a@b.com", "Abcdef1!"), |_| async {
        Err(AuthError::InvalidCredentials)
    }));
    assert_eq!(outcome, SubmitOutcome::Rejected(AuthError::InvalidCredentials));
}

// =============================================================
// FormStatus
// =============================================================

#[test]
fn status_defaults_to_idle() {
    let status = FormStatus::default();
    assert_eq!(status, FormStatus::Idle);
    assert!(!status.is_busy());
    assert_eq!(status.message(), None);
}

#[test]
fn submitting_status_is_busy() {
    assert!(FormStatus::Submitting.is_busy());
}

#[test]
fn rejection_becomes_form_level_message() {
    let outcome: SubmitOutcome<LoginField> = SubmitOutcome::Rejected(AuthError::Unavailable);
    let status = FormStatus::after(&outcome);
    assert_eq!(status.message(), Some("Sign-in is not available yet"));
    assert!(!status.is_busy());
}

#[test]
fn field_errors_and_success_leave_form_idle() {
    let invalid: SubmitOutcome<LoginField> = SubmitOutcome::Invalid(crate::forms::error::FieldErrors::new());
    let accepted: SubmitOutcome<LoginField> = SubmitOutcome::Accepted(Session { token: "t".to_owned() });
    assert_eq!(FormStatus::after(&invalid), FormStatus::Idle);
    assert_eq!(FormStatus::after(&accepted), FormStatus::Idle);
}
