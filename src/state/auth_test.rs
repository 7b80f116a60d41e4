use super::*;

fn user() -> AuthUser {
    AuthUser {
        user_id: 7,
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_loading_and_logged_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Login / remount hydration
// =============================================================

#[test]
fn login_then_hydrate_restores_the_same_user() {
    let logged_in = AuthState::login(user(), "tok-1");
    assert!(logged_in.is_authenticated());

    // Simulated remount: a fresh hydration from persisted storage.
    let rehydrated = AuthState::hydrate_from_storage();
    assert!(!rehydrated.loading);
    assert!(rehydrated.is_authenticated());
    assert_eq!(rehydrated.user, Some(user()));
}

#[test]
fn hydrate_without_a_session_is_logged_out() {
    let state = AuthState::hydrate_from_storage();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn token_without_user_record_does_not_authenticate() {
    storage::set(storage::keys::USER_TOKEN, "tok-1");
    let state = AuthState::hydrate_from_storage();
    assert!(!state.is_authenticated());
}

// =============================================================
// Malformed persisted data
// =============================================================

#[test]
fn corrupt_user_record_resets_and_clears_all_session_keys() {
    AuthState::login(user(), "tok-1");
    storage::set(storage::keys::USER_DATA, "{not json");

    let state = AuthState::hydrate_from_storage();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(storage::get(storage::keys::USER_DATA), None);
    assert_eq!(storage::get(storage::keys::USER_TOKEN), None);
    assert_eq!(storage::get(storage::keys::USER_TYPE), None);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_persisted_state() {
    AuthState::login(user(), "tok-1");
    let state = AuthState::logout();

    assert!(!state.is_authenticated());
    assert_eq!(storage::get(storage::keys::USER_TOKEN), None);
    assert_eq!(storage::get(storage::keys::USER_DATA), None);
    assert_eq!(storage::get(storage::keys::USER_TYPE), None);

    let rehydrated = AuthState::hydrate_from_storage();
    assert!(!rehydrated.is_authenticated());
}
