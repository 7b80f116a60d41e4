//! Host-operator login on the tenant site.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::net::api;
use crate::net::types::HostLoginRequest;
use crate::pages::looks_like_email;
use crate::state::host::HostState;

#[component]
pub fn HostLoginPage() -> impl IntoView {
    let host = expect_context::<RwSignal<HostState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let general_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        email_error.set(None);
        password_error.set(None);
        general_error.set(None);

        let email_value = email.get().trim().to_owned();
        let password_value = password.get();

        let mut valid = true;
        if !looks_like_email(&email_value) {
            email_error.set(Some("Enter a valid email address".to_owned()));
            valid = false;
        }
        if password_value.is_empty() {
            password_error.set(Some("Password is required".to_owned()));
            valid = false;
        }
        if !valid || submitting.get() {
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = HostLoginRequest { email: email_value, password: password_value };
            match api::host_login(&request).await {
                Ok(response) => {
                    host.set(HostState::login(&response));
                    navigate("/host/dashboard", NavigateOptions::default());
                }
                Err(err) => {
                    if err.status() == Some(401) {
                        general_error.set(Some("Invalid email or password".to_owned()));
                    } else {
                        general_error.set(Some(err.message()));
                    }
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <main class="page page--narrow">
            <h1>"Host Login"</h1>
            <p class="page__subtitle">"Manage your giveaway site."</p>
            <form class="auth-form" on:submit=on_submit>
                <TextField label="Email" value=email error=email_error.into() input_type="email"/>
                <TextField
                    label="Password"
                    value=password
                    error=password_error.into()
                    input_type="password"
                />
                <Show when=move || general_error.get().is_some()>
                    <p class="auth-form__error">{move || general_error.get().unwrap_or_default()}</p>
                </Show>
                <button class="auth-form__submit" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Log In" }}
                </button>
            </form>
            <p class="auth-form__alt">
                <a href="/">"Back to the giveaway site"</a>
            </p>
        </main>
    }
}
