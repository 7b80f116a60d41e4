//! Wire types mirroring the backend DTOs.
//!
//! Field names are camelCase on the wire; everything here is a passive shape
//! with no behavior beyond parsing helpers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Subdomain validation
// ---------------------------------------------------------------------------

/// Branding fields returned by the subdomain validator and branding endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingFields {
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
}

/// Answer to `GET /api/public/subdomain/validate`.
///
/// `exists: false` is a valid negative answer, also delivered with a non-2xx
/// status carrying this same body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubdomainValidation {
    pub exists: bool,
    pub subdomain: Option<String>,
    pub company_name: Option<String>,
    pub is_main_domain: Option<bool>,
    pub branding: Option<BrandingFields>,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub email_opt_in: bool,
    pub sms_opt_in: bool,
}

/// Successful end-user login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLoginSuccess {
    pub token: String,
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Login attempt against an unverified email address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnverifiedLogin {
    pub email_verified: bool,
    pub email: String,
    pub message: Option<String>,
}

/// The login endpoint returns one of two shapes; a successful body always
/// carries `token`, an unverified one carries `emailVerified: false`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LoginOutcome {
    Success(UserLoginSuccess),
    Unverified(UnverifiedLogin),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendVerificationRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostLoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful host-operator login on the tenant site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostLoginResponse {
    pub token: String,
    pub id: i64,
    pub email: String,
    pub subdomain: String,
    pub company_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Giveaways
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveawaySummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
    pub total_entries: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayDetails {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
    pub host_id: Option<i64>,
    pub subdomain: Option<String>,
    pub total_entries: Option<i64>,
    pub created_at: Option<String>,
    pub winner_id: Option<i64>,
    pub winner_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGiveawayRequest {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub end_date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayStats {
    pub giveaway_id: i64,
    pub title: Option<String>,
    pub total_entries: i64,
    pub total_points: i64,
    pub unique_users: i64,
}

/// One leaderboard row from `GET /api/host/giveaways/{id}/entries`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub entry_id: i64,
    pub points: i64,
    pub free_entry_claimed: Option<bool>,
    pub entered_at: Option<String>,
    pub user_id: i64,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerSelection {
    pub giveaway_id: i64,
    pub giveaway_title: Option<String>,
    pub winner_id: i64,
    pub winner_email: Option<String>,
    pub winner_first_name: Option<String>,
    pub winner_last_name: Option<String>,
    pub winner_points: Option<i64>,
    pub selected_at: Option<String>,
    pub total_entries: Option<i64>,
}

/// Result of an end-user entering a giveaway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayEntryResult {
    pub success: Option<bool>,
    pub message: Option<String>,
}

/// One of the current user's entries, as listed on the account page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntry {
    pub giveaway_id: i64,
    pub giveaway_title: String,
    pub giveaway_image_url: Option<String>,
    pub giveaway_end_date: Option<String>,
    pub points: Option<i64>,
    pub status: Option<String>,
    pub free_entry_claimed: Option<bool>,
}

// ---------------------------------------------------------------------------
// CRM and campaigns
// ---------------------------------------------------------------------------

/// Pagination envelope used by the CRM and entry listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub page_size: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One CRM row from `GET /api/host/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmUser {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email_verified: Option<bool>,
    pub email_opt_in: Option<bool>,
    pub sms_opt_in: Option<bool>,
    pub created_at: Option<String>,
    pub last_login_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: Option<String>,
    pub status: String,
    pub total_recipients: Option<i64>,
    pub total_sent: Option<i64>,
    pub total_failed: Option<i64>,
    pub sent_at: Option<String>,
    pub created_at: Option<String>,
}

/// One recipient row from `GET /api/host/campaigns/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRecipient {
    pub user_id: i64,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: String,
    pub sent_at: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDetails {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub total_recipients: Option<i64>,
    pub total_sent: Option<i64>,
    pub total_failed: Option<i64>,
    pub sent_at: Option<String>,
    pub created_at: Option<String>,
    /// JSON-encoded audience filters recorded at send time.
    pub filters_json: Option<String>,
    #[serde(default)]
    pub recipients: Vec<CampaignRecipient>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCampaignRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: Option<String>,
    pub message: String,
    pub giveaway_id: Option<i64>,
    pub email_verified: Option<bool>,
    pub email_opt_in: Option<bool>,
    pub sms_opt_in: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCampaignResponse {
    pub campaign_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub total_recipients: Option<i64>,
    pub total_sent: Option<i64>,
    pub total_failed: Option<i64>,
    pub sent_at: Option<String>,
    pub status: String,
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Branding management
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingSettings {
    pub company_name: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
}

// ---------------------------------------------------------------------------
// Common
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body shape shared by all backend failure responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
    pub field_errors: Option<HashMap<String, String>>,
}
