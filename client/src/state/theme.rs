//! Process-wide light/dark theme state.
//!
//! DESIGN
//! ======
//! `ThemeStore` is the single writer. Changes are written through to the
//! injected [`ThemeProvider`] first, then broadcast to subscribers in
//! subscription order. Components that only render the theme read the
//! `RwSignal<Theme>` the app subscribes on their behalf.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::sync::Mutex;

use leptos::prelude::*;

/// Two-valued UI appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown strings yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Source of the initial theme and sink for every change.
pub trait ThemeProvider: Send + Sync {
    fn get_theme(&self) -> Theme;
    fn set_theme(&self, theme: Theme);
}

/// Provider that keeps the theme in memory. Used under SSR and in tests.
#[derive(Debug, Default)]
pub struct MemoryThemeProvider {
    theme: Mutex<Theme>,
}

impl MemoryThemeProvider {
    pub fn new(theme: Theme) -> Self {
        Self { theme: Mutex::new(theme) }
    }
}

impl ThemeProvider for MemoryThemeProvider {
    fn get_theme(&self) -> Theme {
        self.theme.lock().map_or(Theme::Light, |t| *t)
    }

    fn set_theme(&self, theme: Theme) {
        if let Ok(mut current) = self.theme.lock() {
            *current = theme;
        }
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(Theme) + Send + Sync>;

/// Single-writer theme store with subscribe/notify.
pub struct ThemeStore {
    theme: Theme,
    provider: Box<dyn ThemeProvider>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ThemeStore {
    /// Create a store seeded from `provider`.
    pub fn new(provider: impl ThemeProvider + 'static) -> Self {
        let theme = provider.get_theme();
        Self { theme, provider: Box::new(provider), listeners: Vec::new(), next_id: 0 }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Register `listener` for every future change.
    pub fn subscribe(&mut self, listener: impl Fn(Theme) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Switch to the opposite theme and return it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set(next);
        next
    }

    /// Set the theme. Setting the current value does nothing.
    pub fn set(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        self.provider.set_theme(theme);
        for (_, listener) in &self.listeners {
            listener(theme);
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .field("subscribers", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Leptos context wrapping the store and the signal it notifies.
///
/// `current` is the reactive read side; only [`ThemeContext::toggle`] writes.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: StoredValue<ThemeStore>,
    current: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn new(provider: impl ThemeProvider + 'static) -> Self {
        let mut store = ThemeStore::new(provider);
        let current = RwSignal::new(store.theme());
        store.subscribe(move |theme| current.set(theme));
        Self { store: StoredValue::new(store), current }
    }

    /// Reactive read of the current theme.
    pub fn theme(&self) -> Theme {
        self.current.get()
    }

    pub fn theme_untracked(&self) -> Theme {
        self.current.get_untracked()
    }

    pub fn toggle(&self) {
        self.store.update_value(|store| {
            store.toggle();
        });
    }
}
