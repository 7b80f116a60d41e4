//! Host giveaway listing with create and delete actions.

use leptos::prelude::*;

use crate::components::host_nav::{HostNav, require_host_session};
use crate::net::api;

#[component]
pub fn HostGiveawaysPage() -> impl IntoView {
    require_host_session();

    let giveaways = LocalResource::new(|| api::fetch_host_giveaways());
    let action_error = RwSignal::new(None::<String>);

    let on_delete = move |id: i64| {
        action_error.set(None);
        leptos::task::spawn_local(async move {
            match api::delete_giveaway(id).await {
                Ok(()) => giveaways.refetch(),
                Err(err) => action_error.set(Some(err.message())),
            }
        });
    };

    view! {
        <HostNav/>
        <main class="page">
            <div class="page__header">
                <h1>"Giveaways"</h1>
                <a class="page__action" href="/host/giveaways/new">"New Giveaway"</a>
            </div>
            <Show when=move || action_error.get().is_some()>
                <p class="page__error">{move || action_error.get().unwrap_or_default()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    giveaways.get().map(|result| match result {
                        Ok(list) => {
                            if list.is_empty() {
                                return view! {
                                    <p class="page__empty">"No giveaways yet. Create your first one."</p>
                                }
                                .into_any();
                            }
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Title"</th>
                                            <th>"Status"</th>
                                            <th>"Entries"</th>
                                            <th>"Ends"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|g| {
                                                let href = format!("/host/giveaways/{}", g.id);
                                                let id = g.id;
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <a href=href>{g.title}</a>
                                                        </td>
                                                        <td>{g.status}</td>
                                                        <td>{g.total_entries.unwrap_or(0)}</td>
                                                        <td>{g.end_date.unwrap_or_default()}</td>
                                                        <td>
                                                            <button
                                                                class="data-table__delete"
                                                                on:click=move |_| on_delete(id)
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        }
                        Err(err) => view! { <p class="page__error">{err.message()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </main>
    }
}
