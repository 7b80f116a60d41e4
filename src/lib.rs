//! # sweepgoat-tenant
//!
//! Leptos + WASM frontend for a white-labeled giveaway tenant site. Each
//! host company is addressed by subdomain; on load the app resolves the
//! subdomain to a tenant, applies the tenant's branding, and only then
//! mounts the route tree. End-users enter giveaways; host operators manage
//! giveaways, CRM, and campaigns from the `/host/*` dashboard.
//!
//! All business rules (entry accounting, winner selection, campaign
//! delivery) live in the backend REST API; this crate owns the tenant
//! bootstrap, session handling, and the pages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: called once the WASM bundle loads in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::hydrate_body(app::App);
}
