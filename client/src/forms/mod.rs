//! Form schemas, field rules, and the submit pipeline.
//!
//! DESIGN
//! ======
//! Each form is a plain struct built from input values at submit time.
//! `FormSchema::validate` is pure; the only effect of a submission happens
//! in the injected handler passed to [`submit::submit`].

pub mod error;
pub mod login;
pub mod register;
pub mod rules;
pub mod submit;

use error::FieldErrors;

/// A form value with per-field validation rules.
pub trait FormSchema {
    /// Identifies a form field in error reports.
    type Field: Copy + Ord + std::fmt::Debug;

    /// Check every field independently.
    ///
    /// # Errors
    ///
    /// Returns one error per failing field.
    fn validate(&self) -> Result<(), FieldErrors<Self::Field>>;
}
