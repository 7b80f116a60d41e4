use super::*;

fn login_response() -> HostLoginResponse {
    HostLoginResponse {
        token: "host-tok".to_owned(),
        id: 3,
        email: "owner@acme.com".to_owned(),
        subdomain: "acme".to_owned(),
        company_name: "Acme".to_owned(),
    }
}

#[test]
fn default_state_is_loading_and_logged_out() {
    let state = HostState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn login_then_hydrate_restores_the_session() {
    HostState::login(&login_response());

    let state = HostState::hydrate_from_storage();
    assert!(state.is_authenticated());
    let session = state.session.expect("session");
    assert_eq!(session.token, "host-tok");
    assert_eq!(session.subdomain, "acme");
    assert_eq!(session.company_name, "Acme");
}

#[test]
fn host_and_user_sessions_are_independent() {
    HostState::login(&login_response());
    assert_eq!(storage::get(storage::keys::USER_TOKEN), None);

    // Dropping the host session must not touch end-user keys.
    storage::set(storage::keys::USER_TOKEN, "user-tok");
    HostState::logout();
    assert_eq!(storage::get(storage::keys::USER_TOKEN), Some("user-tok".to_owned()));
}

#[test]
fn logout_clears_the_persisted_session() {
    HostState::login(&login_response());
    let state = HostState::logout();

    assert!(!state.is_authenticated());
    assert_eq!(storage::get(storage::keys::HOST_TOKEN), None);
    assert!(!HostState::hydrate_from_storage().is_authenticated());
}
