//! Login page: email + password form backed by the injected auth client.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::auth_form::{ErrorsSignal, begin_submit, field_message, settle};
use crate::components::auth_header::AuthHeader;
use crate::components::form_field::FormField;
use crate::forms::login::{LoginCredentials, LoginField};
use crate::forms::submit::{FormStatus, submit};
use crate::net::auth::AuthClient;
use crate::routes::AppRoute;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors: ErrorsSignal<LoginField> = RwSignal::new(None);
    let status = RwSignal::new(FormStatus::Idle);
    let busy = Signal::derive(move || status.get().is_busy());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !begin_submit(status) {
            return;
        }
        let credentials = LoginCredentials::new(email.get_untracked(), password.get_untracked());

        let auth = auth.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit(credentials, |c| async move { auth.login(c).await }).await;
            if settle(outcome, errors, status) {
                navigate(AppRoute::Landing.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <AuthHeader title="Welcome back" subtitle="Enter your credentials to access your account"/>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="name@example.com"
                        value=email
                        error=field_message(errors, LoginField::Email)
                        disabled=busy
                    />
                    <FormField
                        label="Password"
                        name="password"
                        input_type="password"
                        placeholder="••••••••"
                        value=password
                        error=field_message(errors, LoginField::Password)
                        disabled=busy
                    >
                        <a href=AppRoute::ForgotPassword.path() class="auth-form__aside">
                            "Forgot password"
                        </a>
                    </FormField>
                    <Show when=move || status.with(|s| s.message().is_some())>
                        <p class="auth-form__error" role="alert">
                            {move || status.with(|s| s.message().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=AppRoute::Register.path()>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
