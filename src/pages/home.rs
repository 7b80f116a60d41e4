//! Public landing page: the tenant's active giveaways.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::NavBar;
use crate::net::types::GiveawaySummary;

#[component]
pub fn HomePage() -> impl IntoView {
    let giveaways = LocalResource::new(|| crate::net::api::fetch_public_giveaways());

    view! {
        <NavBar/>
        <main class="page">
            <h1>"Active Giveaways"</h1>
            <Suspense fallback=move || view! { <p>"Loading giveaways..."</p> }>
                {move || {
                    giveaways.get().map(|result| match result {
                        Ok(list) => {
                            let active: Vec<GiveawaySummary> = list
                                .into_iter()
                                .filter(|g| g.status == "ACTIVE")
                                .collect();
                            if active.is_empty() {
                                view! { <p class="page__empty">"No active giveaways right now. Check back soon!"</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="giveaway-grid">
                                        {active
                                            .into_iter()
                                            .map(|g| view! { <GiveawayCard giveaway=g/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                .into_any()
                            }
                        }
                        Err(err) => {
                            view! { <p class="page__error">{err.message()}</p> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </main>
        <Footer/>
    }
}

/// A clickable card for one giveaway in the public list.
#[component]
pub fn GiveawayCard(giveaway: GiveawaySummary) -> impl IntoView {
    let href = format!("/giveaways/{}", giveaway.id);
    let entries = giveaway.total_entries.unwrap_or(0);

    view! {
        <a class="giveaway-card" href=href>
            {giveaway.image_url.map(|url| view! { <img class="giveaway-card__image" src=url alt=""/> })}
            <span class="giveaway-card__title">{giveaway.title}</span>
            <span class="giveaway-card__meta">
                {format!("{entries} {}", if entries == 1 { "entry" } else { "entries" })}
            </span>
        </a>
    }
}
