//! Account page: the user's giveaway entries plus a change-password form.
//! Requires an end-user session; unauthenticated visitors are sent to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::navbar::NavBar;
use crate::components::text_field::TextField;
use crate::net::api;
use crate::net::types::ChangePasswordRequest;
use crate::state::auth::AuthState;

const PAGE_SIZE: i64 = 10;

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let page = RwSignal::new(0i64);
    let entries = LocalResource::new(move || {
        let page = page.get();
        async move { api::fetch_my_entries(page, PAGE_SIZE).await }
    });

    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Hi, {}!", user.first_name))
            .unwrap_or_default()
    };

    view! {
        <NavBar/>
        <main class="page">
            <h1>"My Account"</h1>
            <p class="page__greeting">{greeting}</p>

            <section class="account-entries">
                <h2>"My Entries"</h2>
                <Suspense fallback=move || view! { <p>"Loading entries..."</p> }>
                    {move || {
                        entries.get().map(|result| match result {
                            Ok(batch) => {
                                if batch.data.is_empty() {
                                    return view! {
                                        <p class="page__empty">
                                            "You haven't entered any giveaways yet."
                                        </p>
                                    }
                                    .into_any();
                                }
                                let has_previous = batch.has_previous;
                                let has_next = batch.has_next;
                                view! {
                                    <ul class="entry-list">
                                        {batch
                                            .data
                                            .into_iter()
                                            .map(|entry| {
                                                let href =
                                                    format!("/giveaways/{}", entry.giveaway_id);
                                                view! {
                                                    <li class="entry-list__row">
                                                        <a href=href>{entry.giveaway_title}</a>
                                                        <span class="entry-list__meta">
                                                            {entry
                                                                .points
                                                                .map(|p| format!("{p} points"))
                                                                .unwrap_or_default()}
                                                            {entry
                                                                .status
                                                                .map(|s| format!(" · {s}"))
                                                                .unwrap_or_default()}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                    <div class="pager">
                                        <button
                                            disabled=!has_previous
                                            on:click=move |_| page.update(|p| *p -= 1)
                                        >
                                            "Previous"
                                        </button>
                                        <span>{format!(
                                            "Page {} of {}",
                                            batch.current_page + 1,
                                            batch.total_pages.max(1),
                                        )}</span>
                                        <button
                                            disabled=!has_next
                                            on:click=move |_| page.update(|p| *p += 1)
                                        >
                                            "Next"
                                        </button>
                                    </div>
                                }
                                .into_any()
                            }
                            Err(err) => {
                                view! { <p class="page__error">{err.message()}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>

            <ChangePasswordForm/>
        </main>
        <Footer/>
    }
}

#[component]
fn ChangePasswordForm() -> impl IntoView {
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let current_error = RwSignal::new(None::<String>);
    let new_error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let general_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        current_error.set(None);
        new_error.set(None);
        notice.set(None);
        general_error.set(None);

        let current = current_password.get();
        let new = new_password.get();
        let mut valid = true;
        if current.is_empty() {
            current_error.set(Some("Current password is required".to_owned()));
            valid = false;
        }
        if new.len() < 8 {
            new_error.set(Some("New password must be at least 8 characters".to_owned()));
            valid = false;
        }
        if !valid || submitting.get() {
            return;
        }

        submitting.set(true);
        leptos::task::spawn_local(async move {
            let request = ChangePasswordRequest { current_password: current, new_password: new };
            match api::change_password(&request).await {
                Ok(response) => {
                    notice.set(Some(response.message));
                    current_password.set(String::new());
                    new_password.set(String::new());
                }
                Err(err) => {
                    if let Some(msg) = err.field_error("currentPassword") {
                        current_error.set(Some(msg));
                    } else if let Some(msg) = err.field_error("newPassword") {
                        new_error.set(Some(msg));
                    } else {
                        general_error.set(Some(err.message()));
                    }
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <section class="account-password">
            <h2>"Change Password"</h2>
            <form class="auth-form" on:submit=on_submit>
                <TextField
                    label="Current Password"
                    value=current_password
                    error=current_error.into()
                    input_type="password"
                />
                <TextField
                    label="New Password"
                    value=new_password
                    error=new_error.into()
                    input_type="password"
                />
                <Show when=move || notice.get().is_some()>
                    <p class="auth-form__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || general_error.get().is_some()>
                    <p class="auth-form__error">{move || general_error.get().unwrap_or_default()}</p>
                </Show>
                <button class="auth-form__submit" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Update Password" }}
                </button>
            </form>
        </section>
    }
}
