//! Branding settings for the tenant site.
//!
//! Saving triggers a full page reload so the bootstrap path re-fetches the
//! tenant and the new branding applies everywhere at once.

use leptos::prelude::*;

use crate::components::host_nav::{HostNav, require_host_session};
use crate::components::text_field::TextField;
use crate::net::api;
use crate::net::types::BrandingSettings;

#[component]
pub fn HostSettingsPage() -> impl IntoView {
    require_host_session();

    let company_name = RwSignal::new(String::new());
    let logo_url = RwSignal::new(String::new());
    let primary_color = RwSignal::new(String::new());
    let loaded = RwSignal::new(false);

    let load_error = RwSignal::new(None::<String>);
    let general_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    // Seed the form once from the current settings.
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_branding().await {
                Ok(branding) => {
                    company_name.set(branding.company_name.unwrap_or_default());
                    logo_url.set(branding.logo_url.unwrap_or_default());
                    primary_color.set(branding.primary_color.unwrap_or_default());
                }
                Err(err) => load_error.set(Some(err.message())),
            }
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        general_error.set(None);
        if saving.get() {
            return;
        }

        saving.set(true);
        leptos::task::spawn_local(async move {
            let non_empty = |value: String| {
                let trimmed = value.trim().to_owned();
                (!trimmed.is_empty()).then_some(trimmed)
            };
            let request = BrandingSettings {
                company_name: non_empty(company_name.get_untracked()),
                logo_url: non_empty(logo_url.get_untracked()),
                primary_color: non_empty(primary_color.get_untracked()),
            };
            match api::update_branding(&request).await {
                Ok(_) => reload_page(),
                Err(err) => {
                    general_error.set(Some(err.message()));
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <HostNav/>
        <main class="page page--narrow">
            <h1>"Settings"</h1>
            <Show when=move || load_error.get().is_some()>
                <p class="page__error">{move || load_error.get().unwrap_or_default()}</p>
            </Show>
            <form class="auth-form" on:submit=on_save>
                <TextField
                    label="Company Name"
                    value=company_name
                    error=Signal::derive(|| None)
                />
                <TextField
                    label="Logo URL"
                    value=logo_url
                    error=Signal::derive(|| None)
                    placeholder="https://..."
                />
                <TextField
                    label="Primary Color"
                    value=primary_color
                    error=Signal::derive(|| None)
                    placeholder="#1A73E8"
                />
                <Show when=move || general_error.get().is_some()>
                    <p class="auth-form__error">{move || general_error.get().unwrap_or_default()}</p>
                </Show>
                <button class="auth-form__submit" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </main>
    }
}

fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
