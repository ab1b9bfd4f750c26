//! Light/dark theme toggle button.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemeContext};

/// `aria-pressed` value. Reports `"false"` until mounted, which is what the
/// server renders before the stored theme is known.
pub(crate) fn aria_pressed(mounted: bool, theme: Theme) -> &'static str {
    if mounted && theme == Theme::Dark { "true" } else { "false" }
}

/// Icon button that flips the shared theme on click.
///
/// Both glyphs are always rendered; the stylesheet hides one based on the
/// `data-theme` attribute so server and browser markup agree.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    view! {
        <button
            class="btn btn--icon theme-toggle"
            type="button"
            title="Toggle theme"
            aria-pressed=move || aria_pressed(mounted.get(), theme.theme())
            on:click=move |_| theme.toggle()
        >
            <span class="theme-toggle__sun" aria-hidden="true">"☀"</span>
            <span class="theme-toggle__moon" aria-hidden="true">"☾"</span>
            <span class="sr-only">"Toggle theme"</span>
        </button>
    }
}
