//! End-user registration form.
//!
//! Successful registration does not create a session; the backend mails a
//! verification code and the user continues on the verify-email page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::navbar::NavBar;
use crate::components::text_field::TextField;
use crate::net::api;
use crate::net::types::UserRegisterRequest;
use crate::pages::looks_like_email;
use crate::util::storage;

const MIN_PASSWORD_LEN: usize = 8;

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let email_opt_in = RwSignal::new(true);
    let sms_opt_in = RwSignal::new(false);

    let first_name_error = RwSignal::new(None::<String>);
    let last_name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let phone_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let general_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        for error in [
            first_name_error,
            last_name_error,
            email_error,
            phone_error,
            password_error,
            confirm_error,
            general_error,
        ] {
            error.set(None);
        }

        let email_value = email.get().trim().to_owned();
        let password_value = password.get();

        let mut valid = true;
        if first_name.get().trim().is_empty() {
            first_name_error.set(Some("First name is required".to_owned()));
            valid = false;
        }
        if last_name.get().trim().is_empty() {
            last_name_error.set(Some("Last name is required".to_owned()));
            valid = false;
        }
        if email_value.is_empty() {
            email_error.set(Some("Email is required".to_owned()));
            valid = false;
        } else if !looks_like_email(&email_value) {
            email_error.set(Some("Enter a valid email address".to_owned()));
            valid = false;
        }
        if password_value.len() < MIN_PASSWORD_LEN {
            password_error.set(Some(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
            valid = false;
        }
        if confirm_password.get() != password_value {
            confirm_error.set(Some("Passwords do not match".to_owned()));
            valid = false;
        }
        if !valid || submitting.get() {
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = UserRegisterRequest {
                first_name: first_name.get_untracked().trim().to_owned(),
                last_name: last_name.get_untracked().trim().to_owned(),
                email: email_value.clone(),
                phone_number: phone_number.get_untracked().trim().to_owned(),
                password: password_value,
                email_opt_in: email_opt_in.get_untracked(),
                sms_opt_in: sms_opt_in.get_untracked(),
            };
            match api::user_register(&request).await {
                Ok(_) => {
                    storage::set(storage::keys::PENDING_EMAIL, &email_value);
                    navigate("/verify-email", NavigateOptions::default());
                }
                Err(err) => {
                    let mut any_field = false;
                    for (field, slot) in [
                        ("firstName", first_name_error),
                        ("lastName", last_name_error),
                        ("email", email_error),
                        ("phoneNumber", phone_error),
                        ("password", password_error),
                    ] {
                        if let Some(msg) = err.field_error(field) {
                            slot.set(Some(msg));
                            any_field = true;
                        }
                    }
                    if !any_field {
                        general_error.set(Some(err.message()));
                    }
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <NavBar/>
        <main class="page page--narrow">
            <h1>"Sign Up"</h1>
            <form class="auth-form" on:submit=on_submit>
                <TextField label="First Name" value=first_name error=first_name_error.into()/>
                <TextField label="Last Name" value=last_name error=last_name_error.into()/>
                <TextField label="Email" value=email error=email_error.into() input_type="email"/>
                <TextField
                    label="Phone Number"
                    value=phone_number
                    error=phone_error.into()
                    input_type="tel"
                    placeholder="Optional"
                />
                <TextField
                    label="Password"
                    value=password
                    error=password_error.into()
                    input_type="password"
                />
                <TextField
                    label="Confirm Password"
                    value=confirm_password
                    error=confirm_error.into()
                    input_type="password"
                />
                <label class="auth-form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || email_opt_in.get()
                        on:change=move |ev| email_opt_in.set(event_target_checked(&ev))
                    />
                    "Email me about new giveaways"
                </label>
                <label class="auth-form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || sms_opt_in.get()
                        on:change=move |ev| sms_opt_in.set(event_target_checked(&ev))
                    />
                    "Text me about new giveaways"
                </label>
                <Show when=move || general_error.get().is_some()>
                    <p class="auth-form__error">{move || general_error.get().unwrap_or_default()}</p>
                </Show>
                <button class="auth-form__submit" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>
            <p class="auth-form__alt">
                "Already have an account? " <a href="/login">"Log in"</a>
            </p>
        </main>
        <Footer/>
    }
}
