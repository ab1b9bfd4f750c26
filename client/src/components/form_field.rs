//! Labeled text input with an inline validation message.

use leptos::prelude::*;

/// Text input bound to `value`. `error` renders beneath the input when set.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let id = format!("field-{name}");

    view! {
        <div class="form-field" class:form-field--invalid=move || error.get().is_some()>
            <div class="form-field__label-row">
                <label class="form-field__label" for=id.clone()>{label}</label>
                {children.map(|c| c())}
            </div>
            <input
                id=id
                name=name
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="form-field__message">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
