//! End-user login form.
//!
//! The login endpoint has a two-shape answer: a token body is a real session,
//! an `emailVerified: false` body routes the user to the verification page
//! with their address parked in storage.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::navbar::NavBar;
use crate::components::text_field::TextField;
use crate::net::api;
use crate::net::types::{LoginOutcome, UserLoginRequest};
use crate::pages::looks_like_email;
use crate::state::auth::{AuthState, AuthUser};
use crate::util::storage;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
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
        if email_value.is_empty() {
            email_error.set(Some("Email is required".to_owned()));
            valid = false;
        } else if !looks_like_email(&email_value) {
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
            let request = UserLoginRequest { email: email_value, password: password_value };
            match api::user_login(&request).await {
                Ok(LoginOutcome::Success(success)) => {
                    let user = AuthUser {
                        user_id: success.user_id,
                        email: success.email,
                        first_name: success.first_name,
                        last_name: success.last_name,
                    };
                    auth.set(AuthState::login(user, &success.token));
                    navigate("/", NavigateOptions::default());
                }
                Ok(LoginOutcome::Unverified(unverified)) => {
                    storage::set(storage::keys::PENDING_EMAIL, &unverified.email);
                    navigate("/verify-email", NavigateOptions::default());
                }
                Err(err) => {
                    // Credential failures come back in several dressings;
                    // collapse them into one neutral message.
                    let msg = err.message();
                    let lowered = msg.to_lowercase();
                    if err.status() == Some(401)
                        || lowered.contains("invalid")
                        || lowered.contains("credentials")
                        || lowered.contains("unauthorized")
                    {
                        general_error.set(Some("Invalid email or password".to_owned()));
                    } else if let Some(field_msg) = err.field_error("email") {
                        email_error.set(Some(field_msg));
                    } else {
                        general_error.set(Some(msg));
                    }
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <NavBar/>
        <main class="page page--narrow">
            <h1>"Log In"</h1>
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
                "Don't have an account? " <a href="/signup">"Sign up"</a>
            </p>
        </main>
        <Footer/>
    }
}
