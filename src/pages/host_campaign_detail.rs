//! One sent campaign: delivery totals, the audience filters used, and the
//! per-recipient log.

#[cfg(test)]
#[path = "host_campaign_detail_test.rs"]
mod host_campaign_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::host_nav::{HostNav, require_host_session};
use crate::net::api;
use crate::net::types::CampaignRecipient;

#[component]
pub fn HostCampaignDetailPage() -> impl IntoView {
    require_host_session();
    let params = use_params_map();

    let id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let campaign = LocalResource::new(move || async move {
        match id.get() {
            Some(id) => api::fetch_campaign(id).await.map(Some),
            None => Ok(None),
        }
    });

    view! {
        <HostNav/>
        <main class="page">
            <Suspense fallback=move || view! { <p>"Loading campaign..."</p> }>
                {move || {
                    campaign.get().map(|result| match result {
                        Ok(Some(details)) => {
                            let sent = details.total_sent.unwrap_or(0);
                            let failed = details.total_failed.unwrap_or(0);
                            let recipients = details.total_recipients.unwrap_or(0);
                            let filters = details
                                .filters_json
                                .as_deref()
                                .map(filter_chips)
                                .unwrap_or_default();
                            view! {
                                <div class="page__header">
                                    <h1>{details.name}</h1>
                                    <span class="page__badge">{details.status}</span>
                                </div>
                                <p class="campaign-detail__meta">
                                    {details.kind}
                                    {details
                                        .sent_at
                                        .map(|at| format!(" · sent {at}"))
                                        .unwrap_or_default()}
                                </p>
                                {details
                                    .subject
                                    .map(|subject| {
                                        view! {
                                            <p class="campaign-detail__subject">
                                                <strong>"Subject: "</strong> {subject}
                                            </p>
                                        }
                                    })}
                                {details
                                    .message
                                    .map(|message| {
                                        view! { <p class="campaign-detail__message">{message}</p> }
                                    })}
                                <Show when={
                                    let has_filters = !filters.is_empty();
                                    move || has_filters
                                }>
                                    <div class="campaign-detail__filters">
                                        {filters
                                            .iter()
                                            .map(|chip| {
                                                view! {
                                                    <span class="campaign-detail__chip">
                                                        {chip.clone()}
                                                    </span>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </Show>
                                <dl class="stat-grid">
                                    <div>
                                        <dt>"Recipients"</dt>
                                        <dd>{recipients}</dd>
                                    </div>
                                    <div>
                                        <dt>"Sent"</dt>
                                        <dd>{sent}</dd>
                                    </div>
                                    <div>
                                        <dt>"Failed"</dt>
                                        <dd>{failed}</dd>
                                    </div>
                                </dl>
                                <section class="campaign-recipients">
                                    <h2>"Recipients"</h2>
                                    {if details.recipients.is_empty() {
                                        view! {
                                            <p class="page__empty">"No recipient log recorded."</p>
                                        }
                                        .into_any()
                                    } else {
                                        view! { <RecipientTable rows=details.recipients/> }
                                            .into_any()
                                    }}
                                </section>
                            }
                            .into_any()
                        }
                        Ok(None) => view! { <p class="page__error">"Campaign not found."</p> }.into_any(),
                        Err(err) => view! { <p class="page__error">{err.message()}</p> }.into_any(),
                    })
                }}
            </Suspense>
            <p>
                <a href="/host/campaigns">"Back to campaigns"</a>
            </p>
        </main>
    }
}

#[component]
fn RecipientTable(rows: Vec<CampaignRecipient>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Status"</th>
                    <th>"Sent"</th>
                    <th>"Error"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let name = format!(
                            "{} {}",
                            row.first_name.unwrap_or_default(),
                            row.last_name.unwrap_or_default(),
                        );
                        view! {
                            <tr>
                                <td>{name.trim().to_owned()}</td>
                                <td>{row.email.unwrap_or_default()}</td>
                                <td>{row.status}</td>
                                <td>{row.sent_at.unwrap_or_default()}</td>
                                <td>{row.error_message.unwrap_or_default()}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Human-readable chips for the recorded audience filters. Unparseable or
/// unknown content yields no chips rather than an error.
fn filter_chips(filters_json: &str) -> Vec<String> {
    let Ok(filters) = serde_json::from_str::<serde_json::Value>(filters_json) else {
        return Vec::new();
    };

    let mut chips = Vec::new();
    if let Some(flag) = filters.get("emailVerified").and_then(serde_json::Value::as_bool) {
        chips.push(if flag { "Email Verified" } else { "Email Unverified" }.to_owned());
    }
    if let Some(flag) = filters.get("emailOptIn").and_then(serde_json::Value::as_bool) {
        chips.push(if flag { "Email Opt-In" } else { "Email Opt-Out" }.to_owned());
    }
    if let Some(flag) = filters.get("smsOptIn").and_then(serde_json::Value::as_bool) {
        chips.push(if flag { "SMS Opt-In" } else { "SMS Opt-Out" }.to_owned());
    }
    if let Some(id) = filters.get("giveawayId").and_then(serde_json::Value::as_i64) {
        chips.push(format!("Giveaway ID: {id}"));
    }
    chips
}
