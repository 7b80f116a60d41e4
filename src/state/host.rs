//! Host-operator session state, parallel to the end-user session but stored
//! under its own key and with an independent lifecycle. Gates the `/host/*`
//! dashboard routes.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use crate::net::types::HostLoginResponse;
use crate::util::storage;

/// A logged-in host operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostSession {
    pub token: String,
    pub subdomain: String,
    pub company_name: String,
}

/// Host auth state tracking the current operator and hydration status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostState {
    pub session: Option<HostSession>,
    pub loading: bool,
}

impl Default for HostState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl HostState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Restore a host session from persisted storage. Only the token is
    /// required; subdomain and company name are display conveniences.
    pub fn hydrate_from_storage() -> Self {
        let session = storage::get(storage::keys::HOST_TOKEN).map(|token| HostSession {
            token,
            subdomain: storage::get(storage::keys::SUBDOMAIN).unwrap_or_default(),
            company_name: storage::get(storage::keys::COMPANY_NAME).unwrap_or_default(),
        });
        Self { session, loading: false }
    }

    /// Persist a fresh host session from a login response.
    pub fn login(response: &HostLoginResponse) -> Self {
        storage::set(storage::keys::HOST_TOKEN, &response.token);
        storage::set(storage::keys::SUBDOMAIN, &response.subdomain);
        storage::set(storage::keys::COMPANY_NAME, &response.company_name);
        Self {
            session: Some(HostSession {
                token: response.token.clone(),
                subdomain: response.subdomain.clone(),
                company_name: response.company_name.clone(),
            }),
            loading: false,
        }
    }

    /// Clear the persisted host session.
    pub fn logout() -> Self {
        storage::remove_all(&[
            storage::keys::HOST_TOKEN,
            storage::keys::SUBDOMAIN,
            storage::keys::COMPANY_NAME,
        ]);
        Self { session: None, loading: false }
    }
}
