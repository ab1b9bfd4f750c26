//! Registration page: name, email, password and terms consent.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::auth_form::{ErrorsSignal, begin_submit, field_message, settle};
use crate::components::auth_header::AuthHeader;
use crate::components::form_field::FormField;
use crate::forms::register::{RegisterField, RegistrationDetails};
use crate::forms::submit::{FormStatus, submit};
use crate::net::auth::AuthClient;
use crate::routes::AppRoute;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthClient>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let terms = RwSignal::new(false);
    let errors: ErrorsSignal<RegisterField> = RwSignal::new(None);
    let status = RwSignal::new(FormStatus::Idle);
    let busy = Signal::derive(move || status.get().is_busy());
    let terms_error = field_message(errors, RegisterField::Terms);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !begin_submit(status) {
            return;
        }
        let details = RegistrationDetails {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            terms_accepted: terms.get_untracked(),
        };

        let auth = auth.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit(details, |d| async move { auth.register(d).await }).await;
            if settle(outcome, errors, status) {
                navigate(AppRoute::Landing.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <AuthHeader title="Create an account" subtitle="Enter your information to get started"/>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField
                        label="Name"
                        name="name"
                        input_type="text"
                        placeholder="John Doe"
                        value=name
                        error=field_message(errors, RegisterField::Name)
                        disabled=busy
                    />
                    <FormField
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="name@example.com"
                        value=email
                        error=field_message(errors, RegisterField::Email)
                        disabled=busy
                    />
                    <FormField
                        label="Password"
                        name="password"
                        input_type="password"
                        placeholder="••••••••"
                        value=password
                        error=field_message(errors, RegisterField::Password)
                        disabled=busy
                    />
                    <div class="form-field form-field--checkbox" class:form-field--invalid=move || terms_error.get().is_some()>
                        <label class="checkbox" for="field-terms">
                            <input
                                id="field-terms"
                                name="terms"
                                type="checkbox"
                                prop:checked=move || terms.get()
                                prop:disabled=move || busy.get()
                                on:change=move |ev| terms.set(event_target_checked(&ev))
                            />
                            "I agree to the "
                            <a href=AppRoute::Landing.path()>"Terms of Service"</a>
                            " and "
                            <a href=AppRoute::Landing.path()>"Privacy Policy"</a>
                        </label>
                        <Show when=move || terms_error.get().is_some()>
                            <p class="form-field__message">{move || terms_error.get().unwrap_or_default()}</p>
                        </Show>
                    </div>
                    <Show when=move || status.with(|s| s.message().is_some())>
                        <p class="auth-form__error" role="alert">
                            {move || status.with(|s| s.message().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=AppRoute::Login.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
