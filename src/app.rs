//! Root application component: tenant bootstrap sequencing, context
//! provision, and routing.
//!
//! The bootstrap gate is strict: while the tenant is being validated only a
//! loading shell renders, and a failed resolution renders only the terminal
//! not-found page. Session contexts and the route tree mount exclusively
//! once the tenant is confirmed live, so no tenant-scoped UI can issue
//! authenticated calls against an unconfirmed tenant.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::account::AccountPage;
use crate::pages::giveaway_detail::GiveawayDetailPage;
use crate::pages::home::HomePage;
use crate::pages::host_campaign_detail::HostCampaignDetailPage;
use crate::pages::host_campaigns::HostCampaignsPage;
use crate::pages::host_create_giveaway::HostCreateGiveawayPage;
use crate::pages::host_crm::HostCrmPage;
use crate::pages::host_dashboard::HostDashboardPage;
use crate::pages::host_giveaway_detail::HostGiveawayDetailPage;
use crate::pages::host_giveaways::HostGiveawaysPage;
use crate::pages::host_login::HostLoginPage;
use crate::pages::host_settings::HostSettingsPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::SubdomainNotFoundPage;
use crate::pages::previous_giveaways::PreviousGiveawaysPage;
use crate::pages::signup::SignupPage;
use crate::pages::verify_email::VerifyEmailPage;
use crate::state::auth::AuthState;
use crate::state::host::HostState;
use crate::state::tenant::{TenantResolution, TenantSession};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component: the bootstrap sequencer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let subdomain = crate::util::subdomain::current_subdomain();

    // Development hosts skip validation and go straight to a placeholder
    // tenant; everything else starts in `Validating`.
    let resolution = RwSignal::new(if TenantResolution::skip_validation(&subdomain) {
        TenantResolution::Ok(TenantSession::placeholder(&subdomain))
    } else {
        TenantResolution::Validating
    });

    // One validator round-trip per page load; the outcome is terminal. A
    // failed call is treated as a permanent not-found for this load.
    #[cfg(feature = "hydrate")]
    if resolution.get_untracked() == TenantResolution::Validating {
        let subdomain = subdomain.clone();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::validate_subdomain().await;
            resolution.set(TenantResolution::from_validation(&subdomain, outcome));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/sweepgoat-tenant.css"/>

        {move || match resolution.get() {
            TenantResolution::Validating => view! {
                <main class="boot-screen">
                    <p>"Loading..."</p>
                </main>
            }
            .into_any(),
            TenantResolution::NotFound { subdomain } => {
                view! { <SubdomainNotFoundPage subdomain=subdomain/> }.into_any()
            }
            TenantResolution::Ok(session) => view! { <TenantApp session=session/> }.into_any(),
        }}
    }
}

/// Mounted only once the tenant is confirmed live. Provides the immutable
/// branding value and both session signals, then renders the route tree.
#[component]
fn TenantApp(session: TenantSession) -> impl IntoView {
    let auth = RwSignal::new(AuthState::default());
    let host = RwSignal::new(HostState::default());

    provide_context(session.clone());
    provide_context(auth);
    provide_context(host);

    // Hydrate persisted sessions after mount; effects do not run during SSR,
    // so `loading` stays true until the browser takes over.
    Effect::new(move || {
        auth.set(AuthState::hydrate_from_storage());
        host.set(HostState::hydrate_from_storage());
    });

    let title = if session.company_name.is_empty() {
        "SweepGoat".to_owned()
    } else {
        session.company_name.clone()
    };

    view! {
        <Title text=title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("giveaways"), ParamSegment("id")) view=GiveawayDetailPage/>
                <Route path=StaticSegment("previous") view=PreviousGiveawaysPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route path=StaticSegment("account") view=AccountPage/>
                <Route path=(StaticSegment("host"), StaticSegment("login")) view=HostLoginPage/>
                <Route path=(StaticSegment("host"), StaticSegment("dashboard")) view=HostDashboardPage/>
                <Route path=(StaticSegment("host"), StaticSegment("giveaways")) view=HostGiveawaysPage/>
                <Route
                    path=(StaticSegment("host"), StaticSegment("giveaways"), StaticSegment("new"))
                    view=HostCreateGiveawayPage
                />
                <Route
                    path=(StaticSegment("host"), StaticSegment("giveaways"), ParamSegment("id"))
                    view=HostGiveawayDetailPage
                />
                <Route path=(StaticSegment("host"), StaticSegment("crm")) view=HostCrmPage/>
                <Route path=(StaticSegment("host"), StaticSegment("campaigns")) view=HostCampaignsPage/>
                <Route
                    path=(StaticSegment("host"), StaticSegment("campaigns"), ParamSegment("id"))
                    view=HostCampaignDetailPage
                />
                <Route path=(StaticSegment("host"), StaticSegment("settings")) view=HostSettingsPage/>
            </Routes>
        </Router>
    }
}
