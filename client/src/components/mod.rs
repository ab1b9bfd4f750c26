//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form inputs. Shared state (the theme)
//! comes from Leptos context; form values are passed in as signals.

pub mod auth_header;
pub mod form_field;
pub mod theme_toggle;
