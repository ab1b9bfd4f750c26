//! Submit bookkeeping shared by the login and register pages.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;

use crate::forms::error::FieldErrors;
use crate::forms::submit::{FormStatus, SubmitOutcome};

/// Per-field messages for one form, reactive.
pub(crate) type ErrorsSignal<F> = RwSignal<Option<FieldErrors<F>>>;

/// Reactive message for `field`, if its last validation failed.
pub(crate) fn field_message<F>(errors: ErrorsSignal<F>, field: F) -> Signal<Option<String>>
where
    F: Ord + Copy + Send + Sync + 'static,
{
    Signal::derive(move || errors.with(|e| e.as_ref().and_then(|e| e.message(field))))
}

/// Claim the form for one submit. Returns `false` while another is in flight.
pub(crate) fn begin_submit(status: RwSignal<FormStatus>) -> bool {
    if status.get_untracked().is_busy() {
        return false;
    }
    status.set(FormStatus::Submitting);
    true
}

/// Push a finished submit into the page signals. Returns `true` on acceptance.
pub(crate) fn settle<F>(outcome: SubmitOutcome<F>, errors: ErrorsSignal<F>, status: RwSignal<FormStatus>) -> bool
where
    F: Ord + Copy + Send + Sync + 'static,
{
    status.set(FormStatus::after(&outcome));
    match outcome {
        SubmitOutcome::Invalid(field_errors) => {
            errors.set(Some(field_errors));
            false
        }
        SubmitOutcome::Rejected(err) => {
            leptos::logging::warn!("auth: submit rejected: {err}");
            errors.set(None);
            false
        }
        SubmitOutcome::Accepted(_) => {
            errors.set(None);
            true
        }
    }
}
