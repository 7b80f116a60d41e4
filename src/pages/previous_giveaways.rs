//! Archive of the tenant's finished giveaways.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::NavBar;
use crate::net::types::GiveawaySummary;

#[component]
pub fn PreviousGiveawaysPage() -> impl IntoView {
    let giveaways = LocalResource::new(|| crate::net::api::fetch_public_giveaways());

    view! {
        <NavBar/>
        <main class="page">
            <h1>"Previous Giveaways"</h1>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    giveaways.get().map(|result| match result {
                        Ok(list) => {
                            let finished: Vec<GiveawaySummary> = list
                                .into_iter()
                                .filter(|g| g.status != "ACTIVE")
                                .collect();
                            if finished.is_empty() {
                                view! { <p class="page__empty">"No previous giveaways yet."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="giveaway-list">
                                        {finished
                                            .into_iter()
                                            .map(|g| {
                                                let href = format!("/giveaways/{}", g.id);
                                                let entries = g.total_entries.unwrap_or(0);
                                                view! {
                                                    <li class="giveaway-list__row">
                                                        <a href=href>{g.title}</a>
                                                        <span class="giveaway-list__meta">
                                                            {g.end_date
                                                                .map(|end| format!("ended {end} · "))
                                                                .unwrap_or_default()}
                                                            {format!("{entries} entries")}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                .into_any()
                            }
                        }
                        Err(err) => view! { <p class="page__error">{err.message()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </main>
        <Footer/>
    }
}
