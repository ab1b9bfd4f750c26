//! Validate-then-submit pipeline shared by the auth pages.
//!
//! ERROR HANDLING
//! ==============
//! Field errors stay attached to fields. Handler failures become a single
//! form-level message via [`FormStatus::Failed`].

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::future::Future;

use super::FormSchema;
use super::error::FieldErrors;
use crate::net::auth::{AuthError, Session};

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome<F: Ord> {
    /// Validation failed; the handler was not called.
    Invalid(FieldErrors<F>),
    /// The handler rejected the value.
    Rejected(AuthError),
    /// The handler accepted the value.
    Accepted(Session),
}

/// Validate `value` and, only if every field passes, hand it to `handler`.
pub async fn submit<T, H, Fut>(value: T, handler: H) -> SubmitOutcome<T::Field>
where
    T: FormSchema,
    H: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<Session, AuthError>>,
{
    if let Err(errors) = value.validate() {
        return SubmitOutcome::Invalid(errors);
    }
    match handler(value).await {
        Ok(session) => SubmitOutcome::Accepted(session),
        Err(err) => SubmitOutcome::Rejected(err),
    }
}

/// Form-level state shown around the submit button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl FormStatus {
    /// Whether inputs and the submit button should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Form-level message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Status after a finished submit. Field errors leave the form idle
    /// because they render next to their fields.
    pub fn after<F: Ord>(outcome: &SubmitOutcome<F>) -> Self {
        match outcome {
            SubmitOutcome::Rejected(err) => Self::Failed(err.to_string()),
            SubmitOutcome::Invalid(_) | SubmitOutcome::Accepted(_) => Self::Idle,
        }
    }
}
