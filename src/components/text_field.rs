//! Labeled form input with an inline field error slot.

use leptos::prelude::*;

/// A labeled text input bound to a string signal, rendering a field-scoped
/// error message beneath it when one is set.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    error: Signal<Option<String>>,
    #[prop(into, default = "text".to_owned())] input_type: String,
    #[prop(into, default = String::new())] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
