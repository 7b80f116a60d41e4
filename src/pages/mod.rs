//! Tenant-facing pages: public giveaway views, end-user auth and account,
//! and the host dashboard.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

pub mod account;
pub mod giveaway_detail;
pub mod home;
pub mod host_campaign_detail;
pub mod host_campaigns;
pub mod host_create_giveaway;
pub mod host_crm;
pub mod host_dashboard;
pub mod host_giveaway_detail;
pub mod host_giveaways;
pub mod host_login;
pub mod host_settings;
pub mod login;
pub mod not_found;
pub mod previous_giveaways;
pub mod signup;
pub mod verify_email;

/// Loose email shape check for the auth forms; the backend re-validates.
pub(crate) fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
