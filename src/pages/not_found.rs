//! Terminal view for an unresolved tenant subdomain.

use leptos::prelude::*;

/// Rendered instead of the app when the subdomain does not map to a live,
/// verified host. Nothing else mounts alongside this page.
#[component]
pub fn SubdomainNotFoundPage(subdomain: String) -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"404"</h1>
            <h2>"Site Not Found"</h2>
            <p>
                "The subdomain " <strong>{format!("\"{subdomain}\"")}</strong>
                " doesn't exist or hasn't been set up yet."
            </p>
            <p class="not-found__hint">"Please check the URL and try again."</p>
        </main>
    }
}
