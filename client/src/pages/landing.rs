//! Landing page with entry points into sign-in and sign-up.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::routes::AppRoute;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__bar">
                <a href=AppRoute::Landing.path() class="brand">
                    <span class="brand__icon" aria-hidden="true">"◷"</span>
                    <span class="brand__name">"PomodoroFlow"</span>
                </a>
                <nav class="landing-page__nav">
                    <a href=AppRoute::Login.path() class="btn btn--ghost">"Sign in"</a>
                    <ThemeToggle/>
                </nav>
            </header>
            <main class="landing-page__hero">
                <h1>"Focus in flow"</h1>
                <p class="landing-page__tagline">
                    "Work in focused intervals, take real breaks, and keep track of what got done."
                </p>
                <div class="landing-page__actions">
                    <a href=AppRoute::Register.path() class="btn btn--primary">"Get started"</a>
                    <a href=AppRoute::Login.path() class="btn">"I already have an account"</a>
                </div>
            </main>
        </div>
    }
}
