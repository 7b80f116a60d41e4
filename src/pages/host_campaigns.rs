//! Campaign history plus the send form for email and SMS blasts.

use leptos::prelude::*;

use crate::components::host_nav::{HostNav, require_host_session};
use crate::components::text_field::TextField;
use crate::net::api;
use crate::net::types::SendCampaignRequest;

#[component]
pub fn HostCampaignsPage() -> impl IntoView {
    require_host_session();

    let campaigns = LocalResource::new(|| api::fetch_campaigns());

    let name = RwSignal::new(String::new());
    let kind = RwSignal::new("EMAIL".to_owned());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let verified_only = RwSignal::new(true);

    let name_error = RwSignal::new(None::<String>);
    let message_error = RwSignal::new(None::<String>);
    let general_error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        name_error.set(None);
        message_error.set(None);
        general_error.set(None);
        notice.set(None);

        let mut valid = true;
        if name.get().trim().is_empty() {
            name_error.set(Some("Campaign name is required".to_owned()));
            valid = false;
        }
        if message.get().trim().is_empty() {
            message_error.set(Some("Message is required".to_owned()));
            valid = false;
        }
        if !valid || sending.get() {
            return;
        }

        sending.set(true);
        leptos::task::spawn_local(async move {
            let is_email = kind.get_untracked() == "EMAIL";
            let subject_value = subject.get_untracked().trim().to_owned();
            let request = SendCampaignRequest {
                name: name.get_untracked().trim().to_owned(),
                kind: kind.get_untracked(),
                subject: (is_email && !subject_value.is_empty()).then_some(subject_value),
                message: message.get_untracked(),
                giveaway_id: None,
                email_verified: verified_only.get_untracked().then_some(true),
                email_opt_in: is_email.then_some(true),
                sms_opt_in: (!is_email).then_some(true),
            };
            match api::send_campaign(&request).await {
                Ok(response) => {
                    let sent = response.total_sent.unwrap_or(0);
                    let recipients = response.total_recipients.unwrap_or(sent);
                    notice.set(Some(format!("Sent to {sent} of {recipients} recipients")));
                    name.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                    campaigns.refetch();
                }
                Err(err) => general_error.set(Some(err.message())),
            }
            sending.set(false);
        });
    };

    view! {
        <HostNav/>
        <main class="page">
            <h1>"Campaigns"</h1>

            <section class="campaign-form">
                <h2>"New Campaign"</h2>
                <form class="auth-form" on:submit=on_send>
                    <TextField label="Name" value=name error=name_error.into()/>
                    <label class="field">
                        <span class="field__label">"Type"</span>
                        <select
                            class="field__input"
                            on:change=move |ev| kind.set(event_target_value(&ev))
                        >
                            <option value="EMAIL" selected=move || kind.get() == "EMAIL">
                                "Email"
                            </option>
                            <option value="SMS" selected=move || kind.get() == "SMS">
                                "SMS"
                            </option>
                        </select>
                    </label>
                    <Show when=move || kind.get() == "EMAIL">
                        <TextField label="Subject" value=subject error=Signal::derive(|| None)/>
                    </Show>
                    <label class="field">
                        <span class="field__label">"Message"</span>
                        <textarea
                            class="field__input"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                        <Show when=move || message_error.get().is_some()>
                            <span class="field__error">
                                {move || message_error.get().unwrap_or_default()}
                            </span>
                        </Show>
                    </label>
                    <label class="auth-form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || verified_only.get()
                            on:change=move |ev| verified_only.set(event_target_checked(&ev))
                        />
                        "Verified users only"
                    </label>
                    <Show when=move || notice.get().is_some()>
                        <p class="auth-form__notice">{move || notice.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || general_error.get().is_some()>
                        <p class="auth-form__error">
                            {move || general_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="auth-form__submit" type="submit" disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Send Campaign" }}
                    </button>
                </form>
            </section>

            <section class="campaign-history">
                <h2>"History"</h2>
                <Suspense fallback=move || view! { <p>"Loading campaigns..."</p> }>
                    {move || {
                        campaigns.get().map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    return view! {
                                        <p class="page__empty">"No campaigns sent yet."</p>
                                    }
                                    .into_any();
                                }
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Type"</th>
                                                <th>"Status"</th>
                                                <th>"Sent"</th>
                                                <th>"Failed"</th>
                                                <th>"Date"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|c| {
                                                    let href = format!("/host/campaigns/{}", c.id);
                                                    view! {
                                                        <tr>
                                                            <td>
                                                                <a href=href>{c.name}</a>
                                                            </td>
                                                            <td>{c.kind}</td>
                                                            <td>{c.status}</td>
                                                            <td>{c.total_sent.unwrap_or(0)}</td>
                                                            <td>{c.total_failed.unwrap_or(0)}</td>
                                                            <td>{c.sent_at.unwrap_or_default()}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
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
        </main>
    }
}
