//! Fallback for paths outside the route table.

use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found."</h1>
            <a href=AppRoute::Landing.path() class="btn">"Back to PomodoroFlow"</a>
        </div>
    }
}
