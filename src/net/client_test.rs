use std::collections::HashMap;

use super::*;
use crate::util::storage;

// =============================================================
// Token selection
// =============================================================

#[test]
fn host_requests_use_the_host_token_even_when_both_are_present() {
    storage::set(storage::keys::USER_TOKEN, "user-tok");
    storage::set(storage::keys::HOST_TOKEN, "host-tok");

    assert_eq!(bearer_token(RequestAuth::Host), Some("host-tok".to_owned()));
    assert_eq!(bearer_token(RequestAuth::User), Some("user-tok".to_owned()));
    assert_eq!(bearer_token(RequestAuth::Public), None);
}

#[test]
fn missing_token_yields_no_credentials() {
    storage::remove(storage::keys::USER_TOKEN);
    assert_eq!(bearer_token(RequestAuth::User), None);
}

// =============================================================
// Auth-failure classification
// =============================================================

#[test]
fn forbidden_on_authenticated_call_clears_and_redirects_to_root() {
    let action = auth_failure_action(403, RequestAuth::User, "/account").expect("action");
    assert_eq!(action.redirect_to, "/");

    let action = auth_failure_action(403, RequestAuth::Host, "/host/giveaways").expect("action");
    assert_eq!(action.redirect_to, "/");
}

#[test]
fn forbidden_on_public_call_passes_through() {
    assert_eq!(auth_failure_action(403, RequestAuth::Public, "/"), None);
}

#[test]
fn unauthorized_outside_auth_pages_redirects_to_login() {
    let action = auth_failure_action(401, RequestAuth::User, "/account").expect("action");
    assert_eq!(action.redirect_to, "/login");

    let action = auth_failure_action(401, RequestAuth::Public, "/giveaways/3").expect("action");
    assert_eq!(action.redirect_to, "/login");
}

#[test]
fn statuses_on_public_auth_pages_pass_through() {
    assert_eq!(auth_failure_action(401, RequestAuth::User, "/login"), None);
    assert_eq!(auth_failure_action(403, RequestAuth::User, "/login"), None);
    assert_eq!(auth_failure_action(401, RequestAuth::User, "/signup"), None);
    assert_eq!(auth_failure_action(401, RequestAuth::User, "/verify-email"), None);
    assert_eq!(auth_failure_action(401, RequestAuth::Host, "/host/login"), None);
}

#[test]
fn success_statuses_never_classify() {
    assert_eq!(auth_failure_action(200, RequestAuth::User, "/account"), None);
    assert_eq!(auth_failure_action(404, RequestAuth::User, "/account"), None);
    assert_eq!(auth_failure_action(500, RequestAuth::Host, "/host/crm"), None);
}

#[test]
fn run_auth_failure_clears_both_tokens() {
    storage::set(storage::keys::USER_TOKEN, "user-tok");
    storage::set(storage::keys::HOST_TOKEN, "host-tok");

    run_auth_failure(&AuthFailureAction { redirect_to: "/" });

    assert_eq!(storage::get(storage::keys::USER_TOKEN), None);
    assert_eq!(storage::get(storage::keys::HOST_TOKEN), None);
}

// =============================================================
// Error surface
// =============================================================

#[test]
fn status_error_message_prefers_message_then_error() {
    let err = ApiError::Status {
        status: 400,
        body: ErrorBody {
            error: Some("e".to_owned()),
            message: Some("m".to_owned()),
            field_errors: None,
        },
    };
    assert_eq!(err.message(), "m");

    let err = ApiError::Status {
        status: 400,
        body: ErrorBody { error: Some("e".to_owned()), message: None, field_errors: None },
    };
    assert_eq!(err.message(), "e");

    let err = ApiError::Status { status: 502, body: ErrorBody::default() };
    assert_eq!(err.message(), "Request failed (502)");
}

#[test]
fn field_errors_are_exposed_per_field() {
    let mut field_errors = HashMap::new();
    field_errors.insert("email".to_owned(), "Email is required".to_owned());
    let err = ApiError::Status {
        status: 400,
        body: ErrorBody { error: None, message: None, field_errors: Some(field_errors) },
    };

    assert_eq!(err.field_error("email").as_deref(), Some("Email is required"));
    assert_eq!(err.field_error("password"), None);
    assert_eq!(ApiError::unavailable().field_error("email"), None);
}
