//! Public giveaway detail page with the entry action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::footer::Footer;
use crate::components::navbar::NavBar;
use crate::net::api;
use crate::state::auth::AuthState;

#[component]
pub fn GiveawayDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let giveaway = LocalResource::new(move || async move {
        match id.get() {
            Some(id) => api::fetch_public_giveaway(id).await.map(Some),
            None => Ok(None),
        }
    });

    let entry_message = RwSignal::new(None::<String>);
    let entry_error = RwSignal::new(None::<String>);
    let entering = RwSignal::new(false);

    let on_enter = move |_| {
        entry_message.set(None);
        entry_error.set(None);

        if !auth.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
            return;
        }
        let Some(id) = id.get() else { return };
        if entering.get() {
            return;
        }

        entering.set(true);
        leptos::task::spawn_local(async move {
            match api::enter_giveaway(id).await {
                Ok(result) => {
                    entry_message
                        .set(Some(result.message.unwrap_or_else(|| "You're in!".to_owned())));
                    giveaway.refetch();
                }
                Err(err) => entry_error.set(Some(err.message())),
            }
            entering.set(false);
        });
    };

    view! {
        <NavBar/>
        <main class="page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    let on_enter = on_enter.clone();
                    giveaway.get().map(|result| match result {
                        Ok(Some(details)) => {
                            let active = details.status == "ACTIVE";
                            let entries = details.total_entries.unwrap_or(0);
                            view! {
                                <article class="giveaway-detail">
                                    {details
                                        .image_url
                                        .map(|url| {
                                            view! { <img class="giveaway-detail__image" src=url alt=""/> }
                                        })}
                                    <h1>{details.title}</h1>
                                    <p class="giveaway-detail__description">
                                        {details.description.unwrap_or_default()}
                                    </p>
                                    <p class="giveaway-detail__meta">
                                        {format!("{entries} entries")}
                                        {details
                                            .end_date
                                            .map(|end| format!(" · ends {end}"))
                                            .unwrap_or_default()}
                                    </p>
                                    {details
                                        .winner_name
                                        .map(|name| {
                                            view! {
                                                <p class="giveaway-detail__winner">
                                                    "Winner: " {name}
                                                </p>
                                            }
                                        })}
                                    <Show when=move || active>
                                        <button
                                            class="giveaway-detail__enter"
                                            disabled=move || entering.get()
                                            on:click=on_enter.clone()
                                        >
                                            {move || if entering.get() { "Entering..." } else { "Enter Giveaway" }}
                                        </button>
                                    </Show>
                                    <Show when=move || entry_message.get().is_some()>
                                        <p class="giveaway-detail__notice">
                                            {move || entry_message.get().unwrap_or_default()}
                                        </p>
                                    </Show>
                                    <Show when=move || entry_error.get().is_some()>
                                        <p class="page__error">
                                            {move || entry_error.get().unwrap_or_default()}
                                        </p>
                                    </Show>
                                </article>
                            }
                            .into_any()
                        }
                        Ok(None) => view! { <p class="page__error">"Giveaway not found."</p> }.into_any(),
                        Err(err) => view! { <p class="page__error">{err.message()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </main>
        <Footer/>
    }
}
