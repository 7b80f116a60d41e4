//! Tenant identifier extraction from the browser hostname.
//!
//! Examples:
//! - `acme.sweepgoat.com` -> `acme`
//! - `test.localhost` -> `test`
//! - `localhost` / `127.0.0.1` -> development fallback
//! - `sweepgoat.com` (bare apex) -> development fallback; the root marketing
//!   domain never resolves to a real tenant.

#[cfg(test)]
#[path = "subdomain_test.rs"]
mod subdomain_test;

use crate::util::config;

/// Extract the tenant identifier from a hostname.
///
/// Pure and deterministic: a subdomain is the first label when the hostname
/// has at least three labels, or exactly two labels ending in `localhost`
/// (e.g. `test.localhost`). Everything else yields `fallback`.
pub fn extract_subdomain(hostname: &str, fallback: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        return fallback.to_owned();
    }

    let parts: Vec<&str> = hostname.split('.').collect();
    if parts.len() >= 2 {
        let is_localhost = parts[parts.len() - 1] == "localhost";
        if parts.len() >= 3 || is_localhost {
            return parts[0].to_owned();
        }
    }

    fallback.to_owned()
}

/// The tenant identifier for the current page load.
///
/// Reads `window.location.hostname` in the browser; outside of one (SSR,
/// tests) the configured development fallback is returned.
pub fn current_subdomain() -> String {
    #[cfg(feature = "hydrate")]
    {
        let hostname = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        extract_subdomain(&hostname, config::dev_subdomain())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        config::dev_subdomain().to_owned()
    }
}
