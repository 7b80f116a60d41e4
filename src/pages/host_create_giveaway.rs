//! Create-giveaway form for hosts.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::host_nav::{HostNav, require_host_session};
use crate::components::text_field::TextField;
use crate::net::api;
use crate::net::types::CreateGiveawayRequest;

#[component]
pub fn HostCreateGiveawayPage() -> impl IntoView {
    require_host_session();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());

    let title_error = RwSignal::new(None::<String>);
    let description_error = RwSignal::new(None::<String>);
    let end_date_error = RwSignal::new(None::<String>);
    let general_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        title_error.set(None);
        description_error.set(None);
        end_date_error.set(None);
        general_error.set(None);

        let mut valid = true;
        if title.get().trim().is_empty() {
            title_error.set(Some("Title is required".to_owned()));
            valid = false;
        }
        if description.get().trim().is_empty() {
            description_error.set(Some("Description is required".to_owned()));
            valid = false;
        }
        if end_date.get().trim().is_empty() {
            end_date_error.set(Some("End date is required".to_owned()));
            valid = false;
        }
        if !valid || submitting.get() {
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let image = image_url.get_untracked().trim().to_owned();
            let request = CreateGiveawayRequest {
                title: title.get_untracked().trim().to_owned(),
                description: description.get_untracked().trim().to_owned(),
                image_url: (!image.is_empty()).then_some(image),
                end_date: end_date.get_untracked().trim().to_owned(),
            };
            match api::create_giveaway(&request).await {
                Ok(created) => {
                    navigate(
                        &format!("/host/giveaways/{}", created.id),
                        NavigateOptions::default(),
                    );
                }
                Err(err) => {
                    let mut any_field = false;
                    for (field, slot) in [
                        ("title", title_error),
                        ("description", description_error),
                        ("endDate", end_date_error),
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
        <HostNav/>
        <main class="page page--narrow">
            <h1>"New Giveaway"</h1>
            <form class="auth-form" on:submit=on_submit>
                <TextField label="Title" value=title error=title_error.into()/>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea
                        class="field__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || description_error.get().is_some()>
                        <span class="field__error">
                            {move || description_error.get().unwrap_or_default()}
                        </span>
                    </Show>
                </label>
                <TextField
                    label="Image URL"
                    value=image_url
                    error=Signal::derive(|| None)
                    placeholder="Optional"
                />
                <TextField
                    label="End Date"
                    value=end_date
                    error=end_date_error.into()
                    input_type="datetime-local"
                />
                <Show when=move || general_error.get().is_some()>
                    <p class="auth-form__error">{move || general_error.get().unwrap_or_default()}</p>
                </Show>
                <button class="auth-form__submit" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "Create Giveaway" }}
                </button>
            </form>
        </main>
    }
}
