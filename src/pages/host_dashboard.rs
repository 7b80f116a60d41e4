//! Host dashboard landing: the running giveaway at a glance plus shortcuts.

use leptos::prelude::*;

use crate::components::host_nav::{HostNav, require_host_session};
use crate::net::api;

#[component]
pub fn HostDashboardPage() -> impl IntoView {
    require_host_session();

    let active = LocalResource::new(|| api::fetch_active_giveaway());

    view! {
        <HostNav/>
        <main class="page">
            <h1>"Dashboard"</h1>

            <section class="dashboard-active">
                <h2>"Active Giveaway"</h2>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        active.get().map(|result| match result {
                            Ok(giveaway) => {
                                let href = format!("/host/giveaways/{}", giveaway.id);
                                let entries = giveaway.total_entries.unwrap_or(0);
                                view! {
                                    <div class="dashboard-active__card">
                                        <a href=href>
                                            <strong>{giveaway.title}</strong>
                                        </a>
                                        <p>{format!("{entries} entries")}</p>
                                        {giveaway
                                            .end_date
                                            .map(|end| view! { <p>{format!("Ends {end}")}</p> })}
                                    </div>
                                }
                                .into_any()
                            }
                            // 404 just means nothing is running right now.
                            Err(err) if err.status() == Some(404) => view! {
                                <p class="page__empty">
                                    "No active giveaway. "
                                    <a href="/host/giveaways/new">"Start one"</a>
                                </p>
                            }
                            .into_any(),
                            Err(err) => {
                                view! { <p class="page__error">{err.message()}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-links">
                <a class="dashboard-links__card" href="/host/giveaways">
                    <strong>"Giveaways"</strong>
                    <span>"Create, review, and draw winners"</span>
                </a>
                <a class="dashboard-links__card" href="/host/crm">
                    <strong>"Users"</strong>
                    <span>"Browse and search your audience"</span>
                </a>
                <a class="dashboard-links__card" href="/host/campaigns">
                    <strong>"Campaigns"</strong>
                    <span>"Email and SMS blasts"</span>
                </a>
                <a class="dashboard-links__card" href="/host/settings">
                    <strong>"Settings"</strong>
                    <span>"Branding and site setup"</span>
                </a>
            </section>
        </main>
    }
}
