//! HTTP client wrapper.
//!
//! Every request carries the tenant `X-Subdomain` header and, depending on an
//! explicit [`RequestAuth`] capability tag chosen at the call site, a bearer
//! token from the matching stored session. Auth-failure handling is split
//! into a pure decision function ([`auth_failure_action`]) and an effect
//! runner ([`run_auth_failure`]) so the policy is testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, decode, and non-2xx outcomes are all surfaced as [`ApiError`];
//! pages render them inline instead of panicking.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use thiserror::Error;

use crate::net::types::ErrorBody;
use crate::util::storage;

/// Which session, if any, a request acts on. Chosen explicitly at each call
/// site rather than inferred from the URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestAuth {
    /// No credentials attached.
    Public,
    /// End-user session (`userToken`).
    User,
    /// Host-operator session (`hostToken`).
    Host,
}

/// Failure surface of an API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("request failed with status {status}")]
    Status { status: u16, body: ErrorBody },
}

impl ApiError {
    /// Stub error for endpoints invoked outside the browser.
    pub fn unavailable() -> Self {
        Self::Network("not available on server".to_owned())
    }

    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Best human-readable message for inline display.
    pub fn message(&self) -> String {
        match self {
            Self::Network(msg) | Self::Decode(msg) => msg.clone(),
            Self::Status { status, body } => body
                .message
                .clone()
                .or_else(|| body.error.clone())
                .unwrap_or_else(|| format!("Request failed ({status})")),
        }
    }

    /// Per-field validation messages, when the backend sent any.
    pub fn field_error(&self, field: &str) -> Option<String> {
        match self {
            Self::Status { body, .. } => {
                body.field_errors.as_ref().and_then(|map| map.get(field).cloned())
            }
            _ => None,
        }
    }
}

/// Pages where a `401`/`403` must pass through so the in-page form can render
/// field-level errors instead of triggering a redirect loop. Any new public
/// auth page must be added here.
pub fn is_public_auth_path(path: &str) -> bool {
    path == "/login"
        || path == "/signup"
        || path == "/verify-email"
        || path.starts_with("/host/login")
}

/// What the shell should do after an authorization failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthFailureAction {
    /// Route to land on after clearing both session tokens.
    pub redirect_to: &'static str,
}

/// Classify a response status into an auth-failure intent.
///
/// - `403` on an authenticated (`User`/`Host`) call means "access denied for
///   the current identity or tenant mismatch": clear both tokens, go to `/`.
/// - `401` means "session expired": clear both tokens, go to `/login`.
/// - Either status while already on a public auth page is passed through
///   unmodified.
pub fn auth_failure_action(
    status: u16,
    auth: RequestAuth,
    current_path: &str,
) -> Option<AuthFailureAction> {
    if is_public_auth_path(current_path) {
        return None;
    }
    match (status, auth) {
        (403, RequestAuth::User | RequestAuth::Host) => {
            Some(AuthFailureAction { redirect_to: "/" })
        }
        (401, _) => Some(AuthFailureAction { redirect_to: "/login" }),
        _ => None,
    }
}

/// Execute an auth-failure intent: drop both session tokens, then navigate.
/// The navigation itself only happens in the browser.
pub fn run_auth_failure(action: &AuthFailureAction) {
    storage::remove(storage::keys::USER_TOKEN);
    storage::remove(storage::keys::HOST_TOKEN);
    redirect(action.redirect_to);
}

/// Token attached for a given capability tag. `Host` never borrows the user
/// token and vice versa, even when both are present.
pub fn bearer_token(auth: RequestAuth) -> Option<String> {
    match auth {
        RequestAuth::Public => None,
        RequestAuth::User => storage::get(storage::keys::USER_TOKEN),
        RequestAuth::Host => storage::get(storage::keys::HOST_TOKEN),
    }
}

/// Current route path, `/` outside the browser.
pub fn current_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "/".to_owned()
    }
}

fn redirect(to: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(to);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = to;
    }
}

/// Issue a request with the tenant header and the tag-selected bearer token,
/// and apply auth-failure classification to the response before returning it.
#[cfg(feature = "hydrate")]
pub async fn send(
    method: gloo_net::http::Method,
    path: &str,
    auth: RequestAuth,
    body: Option<serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::RequestBuilder;

    let url = crate::util::config::api_url(path);
    let mut builder = RequestBuilder::new(&url)
        .method(method)
        .header("X-Subdomain", &crate::util::subdomain::current_subdomain());

    if let Some(token) = bearer_token(auth) {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .json(&json)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if let Some(action) = auth_failure_action(response.status(), auth, &current_path()) {
        run_auth_failure(&action);
    }

    Ok(response)
}

/// `send` plus JSON decoding of the success body, with backend error bodies
/// mapped into [`ApiError::Status`].
#[cfg(feature = "hydrate")]
pub async fn request_json<T: serde::de::DeserializeOwned>(
    method: gloo_net::http::Method,
    path: &str,
    auth: RequestAuth,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let response = send(method, path, auth, body).await?;
    let status = response.status();

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}
