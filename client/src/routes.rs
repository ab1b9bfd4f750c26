//! Static route table.
//!
//! Paths match exactly; there are no parameters, guards, or redirects.
//! `/forgot-password` renders the landing page until a reset flow exists.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every path the app knows about, plus the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Login,
    Register,
    ForgotPassword,
    NotFound,
}

/// Page component a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Login,
    Register,
    NotFound,
}

impl AppRoute {
    /// Declared routes, in table order. `NotFound` is the fallback and not listed.
    pub const ALL: [Self; 4] = [Self::Landing, Self::Login, Self::Register, Self::ForgotPassword];

    /// Path segment without the leading slash, as handed to the router.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Landing | Self::NotFound => "",
            Self::Login => "login",
            Self::Register => "register",
            Self::ForgotPassword => "forgot-password",
        }
    }

    /// Absolute path for links.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing | Self::NotFound => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ForgotPassword => "/forgot-password",
        }
    }

    /// Exact-match lookup. Unknown paths resolve to `NotFound`.
    pub fn resolve(path: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or(Self::NotFound)
    }

    pub const fn page(self) -> Page {
        match self {
            Self::Landing | Self::ForgotPassword => Page::Landing,
            Self::Login => Page::Login,
            Self::Register => Page::Register,
            Self::NotFound => Page::NotFound,
        }
    }
}
