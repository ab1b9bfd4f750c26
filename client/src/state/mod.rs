//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the theme is shared across pages. Form state is page-local and lives
//! in signals owned by each form page.

pub mod theme;
