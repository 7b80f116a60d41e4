//! Top navigation bar for the tenant site.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::tenant::TenantSession;

/// Branding-aware navigation: shows the tenant's display name (accent-colored
/// when a custom brand color is set) and auth-dependent links.
#[component]
pub fn NavBar() -> impl IntoView {
    let tenant = expect_context::<TenantSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let display_name = if tenant.company_name.is_empty() {
        tenant.subdomain.clone()
    } else {
        tenant.company_name.clone()
    };
    let brand_style = if tenant.is_white_label() {
        format!("color: {}", tenant.primary_color)
    } else {
        String::new()
    };

    let logged_in = move || auth.get().is_authenticated();

    let on_logout = move |_| {
        auth.set(AuthState::logout());
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/" style=brand_style>
                {display_name}
            </a>
            <div class="navbar__links">
                <a href="/">"Giveaways"</a>
                <a href="/previous">"Previous"</a>
                <Show
                    when=logged_in
                    fallback=|| {
                        view! {
                            <a href="/login">"Log In"</a>
                            <a class="navbar__cta" href="/signup">"Sign Up"</a>
                        }
                    }
                >
                    <a href="/account">"Account"</a>
                    <button class="navbar__logout" on:click=on_logout.clone()>
                        "Log Out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
