//! End-user authentication state, backed by persisted storage.
//!
//! Hydration is synchronous and local; `loading` is only observed `true`
//! before the first hydration attempt completes (modeled this way so a
//! future remote session check can slot in without changing consumers).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// The authenticated end-user record persisted under `userData`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Authentication state tracking the current user and hydration status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Attempt to restore a session from persisted storage.
    ///
    /// A token without a parseable user record counts as no session: the
    /// related keys are cleared and the state resets to logged-out. This is
    /// never surfaced as an error.
    pub fn hydrate_from_storage() -> Self {
        let token = storage::get(storage::keys::USER_TOKEN);
        let data = storage::get(storage::keys::USER_DATA);

        let user = match token.zip(data) {
            Some((_token, data)) => match serde_json::from_str::<AuthUser>(&data) {
                Ok(user) => Some(user),
                Err(err) => {
                    leptos::logging::warn!("discarding malformed user record: {err}");
                    storage::remove_all(&[
                        storage::keys::USER_DATA,
                        storage::keys::USER_TOKEN,
                        storage::keys::USER_TYPE,
                    ]);
                    None
                }
            },
            None => None,
        };

        Self { user, loading: false }
    }

    /// Persist a fresh session and return the logged-in state.
    pub fn login(user: AuthUser, token: &str) -> Self {
        storage::set(storage::keys::USER_TOKEN, token);
        storage::set(storage::keys::USER_TYPE, "USER");
        if let Ok(json) = serde_json::to_string(&user) {
            storage::set(storage::keys::USER_DATA, &json);
        }
        Self { user: Some(user), loading: false }
    }

    /// Clear the persisted session and return the logged-out state.
    pub fn logout() -> Self {
        storage::remove_all(&[
            storage::keys::USER_TOKEN,
            storage::keys::USER_TYPE,
            storage::keys::USER_DATA,
        ]);
        Self { user: None, loading: false }
    }
}
