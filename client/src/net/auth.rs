//! Authentication backend seam used by the login and register pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages depend on [`AuthClient`], never on a transport. The only backend
//! shipped here is [`TraceAuthBackend`], which logs the attempt and reports
//! that no authentication service is configured. A real backend plugs in by
//! implementing [`AuthBackend`] and is installed with [`AuthClient::new`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::forms::login::LoginCredentials;
use crate::forms::register::RegistrationDetails;

/// Session issued by an authentication backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
}

/// Form-level failures from an authentication backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The backend rejected the email/password pair.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The request never reached the backend.
    #[error("Network error: {0}")]
    NetworkFailure(String),

    /// The backend answered with a failure status.
    #[error("Server error ({status})")]
    ServerError { status: u16 },

    /// No backend is configured.
    #[error("Sign-in is not available yet")]
    Unavailable,
}

/// Turns validated form values into sessions.
///
/// Futures are not `Send` so browser implementations can hold JS handles.
#[async_trait::async_trait(?Send)]
pub trait AuthBackend: Send + Sync {
    /// Sign in with existing credentials.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the backend rejects or cannot be reached.
    async fn login(&self, credentials: LoginCredentials) -> Result<Session, AuthError>;

    /// Create an account. Only `name`, `email` and `password` leave the client.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the backend rejects or cannot be reached.
    async fn register(&self, details: RegistrationDetails) -> Result<Session, AuthError>;
}

/// Placeholder backend: emits a diagnostic trace and reports `Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceAuthBackend;

#[async_trait::async_trait(?Send)]
impl AuthBackend for TraceAuthBackend {
    async fn login(&self, credentials: LoginCredentials) -> Result<Session, AuthError> {
        leptos::logging::log!("auth: login submitted email={}", credentials.email);
        Err(AuthError::Unavailable)
    }

    async fn register(&self, details: RegistrationDetails) -> Result<Session, AuthError> {
        leptos::logging::log!("auth: register submitted name={} email={}", details.name, details.email);
        Err(AuthError::Unavailable)
    }
}

/// Shared handle to the configured backend, provided through Leptos context.
#[derive(Clone)]
pub struct AuthClient {
    backend: Arc<dyn AuthBackend>,
}

impl AuthClient {
    pub fn new(backend: impl AuthBackend + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// # Errors
    ///
    /// Propagates the backend's [`AuthError`].
    pub async fn login(&self, credentials: LoginCredentials) -> Result<Session, AuthError> {
        self.backend.login(credentials).await
    }

    /// # Errors
    ///
    /// Propagates the backend's [`AuthError`].
    pub async fn register(&self, details: RegistrationDetails) -> Result<Session, AuthError> {
        self.backend.register(details).await
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new(TraceAuthBackend)
    }
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient").finish_non_exhaustive()
    }
}
