//! Networking seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` defines the backend contract the auth pages submit through. No
//! transport is bundled yet.

pub mod auth;
