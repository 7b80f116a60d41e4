//! Email verification: the user enters the code mailed on signup.
//!
//! The pending address comes from storage (parked by signup or an
//! unverified login); without one the page falls back to asking for it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::navbar::NavBar;
use crate::components::text_field::TextField;
use crate::net::api;
use crate::net::types::{ResendVerificationRequest, VerifyEmailRequest};
use crate::util::storage;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let code_error = RwSignal::new(None::<String>);
    let general_error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Storage is only readable client-side.
    Effect::new(move || {
        if email.get_untracked().is_empty() {
            if let Some(pending) = storage::get(storage::keys::PENDING_EMAIL) {
                email.set(pending);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        code_error.set(None);
        general_error.set(None);
        notice.set(None);

        let code_value = code.get().trim().to_owned();
        if code_value.is_empty() {
            code_error.set(Some("Verification code is required".to_owned()));
            return;
        }
        if submitting.get() {
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = VerifyEmailRequest { email: email.get_untracked(), code: code_value };
            match api::user_verify_email(&request).await {
                Ok(_) => {
                    storage::remove(storage::keys::PENDING_EMAIL);
                    navigate("/login", NavigateOptions::default());
                }
                Err(err) => general_error.set(Some(err.message())),
            }
            submitting.set(false);
        });
    };

    let on_resend = move |_| {
        general_error.set(None);
        notice.set(None);
        leptos::task::spawn_local(async move {
            let request = ResendVerificationRequest { email: email.get_untracked() };
            match api::user_resend_verification(&request).await {
                Ok(response) => notice.set(Some(response.message)),
                Err(err) => general_error.set(Some(err.message())),
            }
        });
    };

    view! {
        <NavBar/>
        <main class="page page--narrow">
            <h1>"Verify Your Email"</h1>
            <p>"We sent a verification code to " <strong>{move || email.get()}</strong></p>
            <form class="auth-form" on:submit=on_submit>
                <Show when=move || email.get().is_empty()>
                    <TextField
                        label="Email"
                        value=email
                        error=Signal::derive(|| None)
                        input_type="email"
                    />
                </Show>
                <TextField label="Verification Code" value=code error=code_error.into()/>
                <Show when=move || notice.get().is_some()>
                    <p class="auth-form__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || general_error.get().is_some()>
                    <p class="auth-form__error">{move || general_error.get().unwrap_or_default()}</p>
                </Show>
                <button class="auth-form__submit" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Verifying..." } else { "Verify" }}
                </button>
            </form>
            <button class="auth-form__link" on:click=on_resend>
                "Resend code"
            </button>
        </main>
        <Footer/>
    }
}
