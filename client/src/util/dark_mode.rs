//! Browser-backed theme provider.
//!
//! Reads the stored theme from `localStorage`, falling back to the system
//! `prefers-color-scheme` query, and mirrors every change onto the
//! `data-theme` attribute of the `<html>` element.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths report
//! `Theme::Light` and ignore writes so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{Theme, ThemeProvider};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "pomodoro_flow_theme";

/// Theme provider bound to the current browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeProvider;

impl ThemeProvider for BrowserThemeProvider {
    fn get_theme(&self) -> Theme {
        read_preference()
    }

    fn set_theme(&self, theme: Theme) {
        apply(theme);
        persist(theme);
    }
}

/// Read the stored theme, or the system preference when nothing is stored.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::parse(&val) {
                    return theme;
                }
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Write `theme` to `localStorage`.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                    leptos::logging::warn!("theme: could not persist {}", theme.as_str());
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
