//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub(crate) mod auth_form;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod register;
