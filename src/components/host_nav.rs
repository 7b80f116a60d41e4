//! Navigation bar for the `/host/*` dashboard pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::host::HostState;

#[component]
pub fn HostNav() -> impl IntoView {
    let host = expect_context::<RwSignal<HostState>>();
    let navigate = use_navigate();

    let company = move || {
        host.get()
            .session
            .map(|s| s.company_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Host Dashboard".to_owned())
    };

    let on_logout = move |_| {
        host.set(HostState::logout());
        navigate("/host/login", NavigateOptions::default());
    };

    view! {
        <nav class="host-nav">
            <a class="host-nav__brand" href="/host/dashboard">
                {company}
            </a>
            <div class="host-nav__links">
                <a href="/host/giveaways">"Giveaways"</a>
                <a href="/host/crm">"Users"</a>
                <a href="/host/campaigns">"Campaigns"</a>
                <a href="/host/settings">"Settings"</a>
                <a href="/" target="_blank">"View Site"</a>
                <button class="host-nav__logout" on:click=on_logout>
                    "Log Out"
                </button>
            </div>
        </nav>
    }
}

/// Redirect to the host login page once hydration shows no host session.
/// Call from every `/host/*` page except the login page itself.
pub fn require_host_session() {
    let host = expect_context::<RwSignal<HostState>>();
    let navigate = use_navigate();
    Effect::new(move || {
        let state = host.get();
        if !state.loading && state.session.is_none() {
            navigate("/host/login", NavigateOptions::default());
        }
    });
}
