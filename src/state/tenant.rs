//! Tenant resolution state and the resolved branding session.
//!
//! The bootstrap sequence is a one-way tri-state: `Validating` on mount,
//! then exactly one of `Ok` or `NotFound` for the remainder of the page
//! load. Route rendering is gated on this state so no tenant-scoped UI (and
//! no authenticated API call) can happen before the tenant is confirmed
//! live.

#[cfg(test)]
#[path = "tenant_test.rs"]
mod tenant_test;

use crate::net::client::ApiError;
use crate::net::types::SubdomainValidation;

/// Sentinel meaning "no custom brand color". Consumers compare against this
/// exact value to decide whether to apply white-label styling.
pub const DEFAULT_PRIMARY_COLOR: &str = "#FFFFFF";

/// The resolved tenant: display name, accent color, identifier. Read-only
/// for the lifetime of a page load; branding edits force a full reload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TenantSession {
    pub company_name: String,
    pub primary_color: String,
    pub subdomain: String,
}

impl TenantSession {
    /// Placeholder session for development hosts that skip validation.
    pub fn placeholder(subdomain: &str) -> Self {
        Self {
            company_name: String::new(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_owned(),
            subdomain: subdomain.to_owned(),
        }
    }

    /// Whether the tenant configured a custom brand color.
    pub fn is_white_label(&self) -> bool {
        self.primary_color != DEFAULT_PRIMARY_COLOR
    }
}

/// Bootstrap state machine: `Validating` -> `Ok` | `NotFound`, terminal
/// within one page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TenantResolution {
    #[default]
    Validating,
    Ok(TenantSession),
    NotFound {
        subdomain: String,
    },
}

impl TenantResolution {
    /// Development hosts bypass the validator entirely.
    pub fn skip_validation(subdomain: &str) -> bool {
        subdomain.is_empty() || subdomain == "localhost"
    }

    /// Fold a validator answer into the terminal state.
    ///
    /// `exists: true` populates the session from the response, falling back
    /// to the defaults for absent branding fields. `exists: false` and any
    /// transport or server error both resolve to `NotFound` (fail closed).
    pub fn from_validation(
        subdomain: &str,
        outcome: Result<SubdomainValidation, ApiError>,
    ) -> Self {
        match outcome {
            Ok(validation) if validation.exists => {
                let primary_color = validation
                    .branding
                    .and_then(|b| b.primary_color)
                    .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_owned());
                Self::Ok(TenantSession {
                    company_name: validation.company_name.unwrap_or_default(),
                    primary_color,
                    subdomain: validation
                        .subdomain
                        .unwrap_or_else(|| subdomain.to_owned()),
                })
            }
            Ok(_) | Err(_) => Self::NotFound { subdomain: subdomain.to_owned() },
        }
    }
}
