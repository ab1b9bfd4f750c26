//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::net::auth::AuthClient;
use crate::pages::{landing::LandingPage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage};
use crate::routes::{AppRoute, Page};
use crate::state::theme::ThemeContext;
use crate::util::dark_mode::BrowserThemeProvider;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Component for the page `route` renders.
fn page_view(route: AppRoute) -> AnyView {
    match route.page() {
        Page::Landing => view! { <LandingPage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Register => view! { <RegisterPage/> }.into_any(),
        Page::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

/// Root application component.
///
/// Provides the theme and auth contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeContext::new(BrowserThemeProvider);
    provide_context(theme);
    provide_context(AuthClient::default());

    // Reflect the stored preference once the document exists.
    #[cfg(feature = "hydrate")]
    crate::util::dark_mode::apply(theme.theme_untracked());

    view! {
        <Stylesheet id="leptos" href="/pkg/pomodoro-flow.css"/>
        <Title text="PomodoroFlow"/>

        <Router>
            // One <Route> per entry of AppRoute::ALL, in the same order.
            <Routes fallback=move || page_view(AppRoute::resolve(&use_location().pathname.get_untracked()))>
                <Route path=StaticSegment(AppRoute::Landing.segment()) view=move || page_view(AppRoute::Landing)/>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=move || page_view(AppRoute::Login)/>
                <Route path=StaticSegment(AppRoute::Register.segment()) view=move || page_view(AppRoute::Register)/>
                <Route
                    path=StaticSegment(AppRoute::ForgotPassword.segment())
                    view=move || page_view(AppRoute::ForgotPassword)
                />
            </Routes>
        </Router>
    }
}
