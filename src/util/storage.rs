//! Persisted client key-value storage.
//!
//! Browser builds read and write `localStorage`. Non-browser builds (SSR and
//! unit tests) fall back to a thread-local in-memory map so that session
//! hydration logic stays exercisable without a browser environment.
//!
//! Keys are intentionally not namespaced per tenant: two tenant subdomains in
//! the same browser profile share one storage scope. Existing deployments
//! rely on this layout, so it is preserved as-is.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Fixed storage key names shared with the backend-driven auth flows.
pub mod keys {
    pub const PENDING_EMAIL: &str = "pendingEmail";
    pub const USER_TOKEN: &str = "userToken";
    pub const USER_DATA: &str = "userData";
    pub const USER_TYPE: &str = "userType";
    pub const HOST_TOKEN: &str = "hostToken";
    pub const SUBDOMAIN: &str = "subdomain";
    pub const COMPANY_NAME: &str = "companyName";
}

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static MEMORY: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Read a value. Returns `None` when the key is absent or storage is
/// unavailable.
pub fn get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY.with(|m| m.borrow().get(key).cloned())
    }
}

/// Write a value. Last write wins; failures (quota, disabled storage) are
/// silently dropped.
pub fn set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY.with(|m| {
            m.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }
}

/// Remove a single key.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY.with(|m| {
            m.borrow_mut().remove(key);
        });
    }
}

/// Remove several keys at once.
pub fn remove_all(keys: &[&str]) {
    for key in keys {
        remove(key);
    }
}
