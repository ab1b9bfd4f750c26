//! Brand bar and heading shared by the auth pages.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::routes::AppRoute;

#[component]
pub fn AuthHeader(#[prop(into)] title: String, #[prop(into)] subtitle: String) -> impl IntoView {
    view! {
        <div class="auth-header">
            <div class="auth-header__bar">
                <a href=AppRoute::Landing.path() class="brand">
                    <span class="brand__icon" aria-hidden="true">"◷"</span>
                    <span class="brand__name">"PomodoroFlow"</span>
                </a>
                <ThemeToggle/>
            </div>
            <h1 class="auth-header__title">{title}</h1>
            <p class="auth-header__subtitle">{subtitle}</p>
        </div>
    }
}
