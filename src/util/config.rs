//! Compile-time environment configuration.
//!
//! Deployments set these through build-environment variables; `option_env!`
//! bakes them in without any runtime I/O.

/// Subdomain assumed when running on plain `localhost` with no env override.
pub const DEFAULT_DEV_SUBDOMAIN: &str = "demo";

/// Backend base URL used when no env override is present.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";

/// The development fallback tenant identifier.
pub fn dev_subdomain() -> &'static str {
    option_env!("SWEEPGOAT_DEV_SUBDOMAIN").unwrap_or(DEFAULT_DEV_SUBDOMAIN)
}

/// Base URL of the backend REST API.
pub fn api_base_url() -> &'static str {
    option_env!("SWEEPGOAT_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Join an API path onto the configured base URL.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base_url())
}
