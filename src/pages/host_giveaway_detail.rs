//! Host view of one giveaway: stats, the entry leaderboard, and winner
//! selection. The draw itself happens server-side; this page only shows the
//! result.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::host_nav::{HostNav, require_host_session};
use crate::net::api;
use crate::net::types::LeaderboardEntry;

#[component]
pub fn HostGiveawayDetailPage() -> impl IntoView {
    require_host_session();
    let params = use_params_map();

    let id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let giveaway = LocalResource::new(move || async move {
        match id.get() {
            Some(id) => api::fetch_host_giveaway(id).await.map(Some),
            None => Ok(None),
        }
    });
    let stats = LocalResource::new(move || async move {
        match id.get() {
            Some(id) => api::fetch_giveaway_stats(id).await.map(Some),
            None => Ok(None),
        }
    });
    let entries = LocalResource::new(move || async move {
        match id.get() {
            Some(id) => api::fetch_giveaway_entries(id).await,
            None => Ok(Vec::new()),
        }
    });

    let draw_error = RwSignal::new(None::<String>);
    let drawing = RwSignal::new(false);

    let on_select_winner = move |_| {
        let Some(id) = id.get() else { return };
        if drawing.get() {
            return;
        }
        draw_error.set(None);
        drawing.set(true);
        leptos::task::spawn_local(async move {
            match api::select_winner(id).await {
                Ok(_) => giveaway.refetch(),
                Err(err) => draw_error.set(Some(err.message())),
            }
            drawing.set(false);
        });
    };

    view! {
        <HostNav/>
        <main class="page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    giveaway.get().map(|result| match result {
                        Ok(Some(details)) => {
                            let ended = details.status != "ACTIVE";
                            let undrawn = details.winner_id.is_none();
                            view! {
                                <div class="page__header">
                                    <h1>{details.title}</h1>
                                    <span class="page__badge">{details.status}</span>
                                </div>
                                {details
                                    .winner_name
                                    .map(|name| {
                                        view! {
                                            <p class="giveaway-detail__winner">"Winner: " {name}</p>
                                        }
                                    })}
                                <Show when=move || ended && undrawn>
                                    <button
                                        class="page__action"
                                        disabled=move || drawing.get()
                                        on:click=on_select_winner
                                    >
                                        {move || {
                                            if drawing.get() { "Drawing..." } else { "Select Winner" }
                                        }}
                                    </button>
                                </Show>
                                <Show when=move || draw_error.get().is_some()>
                                    <p class="page__error">
                                        {move || draw_error.get().unwrap_or_default()}
                                    </p>
                                </Show>
                            }
                            .into_any()
                        }
                        Ok(None) => view! { <p class="page__error">"Giveaway not found."</p> }.into_any(),
                        Err(err) => view! { <p class="page__error">{err.message()}</p> }.into_any(),
                    })
                }}
            </Suspense>

            <section class="giveaway-stats">
                <h2>"Stats"</h2>
                <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                    {move || {
                        stats.get().map(|result| match result {
                            Ok(Some(stats)) => view! {
                                <dl class="stat-grid">
                                    <div>
                                        <dt>"Total Entries"</dt>
                                        <dd>{stats.total_entries}</dd>
                                    </div>
                                    <div>
                                        <dt>"Total Points"</dt>
                                        <dd>{stats.total_points}</dd>
                                    </div>
                                    <div>
                                        <dt>"Unique Users"</dt>
                                        <dd>{stats.unique_users}</dd>
                                    </div>
                                </dl>
                            }
                            .into_any(),
                            Ok(None) => ().into_any(),
                            Err(err) => {
                                view! { <p class="page__error">{err.message()}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>

            <section class="giveaway-entries">
                <h2>"Leaderboard"</h2>
                <Suspense fallback=move || view! { <p>"Loading entries..."</p> }>
                    {move || {
                        entries.get().map(|result| match result {
                            Ok(rows) => {
                                if rows.is_empty() {
                                    return view! { <p class="page__empty">"No entries yet."</p> }
                                        .into_any();
                                }
                                view! { <LeaderboardTable rows=rows/> }.into_any()
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

#[component]
fn LeaderboardTable(rows: Vec<LeaderboardEntry>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Points"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .enumerate()
                    .map(|(rank, row)| {
                        let name = match (row.first_name, row.last_name) {
                            (Some(first), Some(last)) => format!("{first} {last}"),
                            (Some(first), None) => first,
                            (None, Some(last)) => last,
                            (None, None) => String::new(),
                        };
                        view! {
                            <tr>
                                <td>{rank + 1}</td>
                                <td>{name}</td>
                                <td>{row.email.unwrap_or_default()}</td>
                                <td>{row.points}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
