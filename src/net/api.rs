//! REST endpoint functions.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` through
//! [`crate::net::client`]. Server-side (SSR): stubs returning
//! [`ApiError::unavailable`], since these endpoints are only meaningful in
//! the browser.

#![allow(clippy::unused_async)]

use crate::net::client::ApiError;
use crate::net::types::*;

#[cfg(feature = "hydrate")]
use crate::net::client::{RequestAuth, request_json, send};
#[cfg(feature = "hydrate")]
use gloo_net::http::Method;

#[cfg(feature = "hydrate")]
fn encode<B: serde::Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// Ask the backend whether the ambient tenant identifier maps to a live,
/// verified host.
///
/// A `404` carrying the same body shape is a valid negative answer
/// (`exists: false`) and is returned as `Ok`; any other failure is an error
/// that callers must treat as not-found for UI purposes.
pub async fn validate_subdomain() -> Result<SubdomainValidation, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = send(
            Method::GET,
            "/api/public/subdomain/validate",
            RequestAuth::Public,
            None,
        )
        .await?;

        if response.ok() {
            return response
                .json::<SubdomainValidation>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()));
        }

        let status = response.status();
        if status == 404 {
            if let Ok(body) = response.json::<SubdomainValidation>().await {
                return Ok(body);
            }
        }
        Err(ApiError::Status { status, body: ErrorBody::default() })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// List the tenant's giveaways for the public site.
pub async fn fetch_public_giveaways() -> Result<Vec<GiveawaySummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Method::GET, "/api/public/giveaways", RequestAuth::Public, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch one giveaway for the public detail page.
pub async fn fetch_public_giveaway(id: i64) -> Result<GiveawayDetails, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(
            Method::GET,
            &format!("/api/public/giveaways/{id}"),
            RequestAuth::Public,
            None,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

// ---------------------------------------------------------------------------
// End-user auth
// ---------------------------------------------------------------------------

pub async fn user_login(request: &UserLoginRequest) -> Result<LoginOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(request)?;
        request_json(Method::POST, "/api/auth/user/login", RequestAuth::Public, Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

pub async fn user_register(request: &UserRegisterRequest) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(request)?;
        request_json(Method::POST, "/api/auth/user/register", RequestAuth::Public, Some(body))
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

pub async fn user_verify_email(request: &VerifyEmailRequest) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(request)?;
        request_json(
            Method::POST,
            "/api/auth/user/verify-email",
            RequestAuth::Public,
            Some(body),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

pub async fn user_resend_verification(
    request: &ResendVerificationRequest,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(request)?;
        request_json(
            Method::POST,
            "/api/auth/user/resend-verification",
            RequestAuth::Public,
            Some(body),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

// ---------------------------------------------------------------------------
// Host auth (tenant-side host login)
// ---------------------------------------------------------------------------

pub async fn host_login(request: &HostLoginRequest) -> Result<HostLoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(request)?;
        request_json(Method::POST, "/api/auth/host/login", RequestAuth::Public, Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

// ---------------------------------------------------------------------------
// End-user (authenticated)
// ---------------------------------------------------------------------------

/// The current user's giveaway entries, newest first.
pub async fn fetch_my_entries(page: i64, size: i64) -> Result<Paginated<UserEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(
            Method::GET,
            &format!("/api/user/my-giveaway-entries?page={page}&size={size}"),
            RequestAuth::User,
            None,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, size);
        Err(ApiError::unavailable())
    }
}

pub async fn change_password(request: &ChangePasswordRequest) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(request)?;
        request_json(Method::POST, "/api/user/change-password", RequestAuth::User, Some(body))
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

/// Enter a giveaway as the current user.
pub async fn enter_giveaway(id: i64) -> Result<GiveawayEntryResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(
            Method::POST,
            &format!("/api/user/giveaways/{id}/enter"),
            RequestAuth::User,
            None,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

// ---------------------------------------------------------------------------
// Host dashboard
// ---------------------------------------------------------------------------

pub async fn fetch_host_giveaways() -> Result<Vec<GiveawaySummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Method::GET, "/api/host/giveaways", RequestAuth::Host, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// The currently running giveaway, if any.
pub async fn fetch_active_giveaway() -> Result<GiveawayDetails, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Method::GET, "/api/host/giveaways/active", RequestAuth::Host, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

pub async fn fetch_host_giveaway(id: i64) -> Result<GiveawayDetails, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(
            Method::GET,
            &format!("/api/host/giveaways/{id}"),
            RequestAuth::Host,
            None,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

pub async fn create_giveaway(request: &CreateGiveawayRequest) -> Result<GiveawayDetails, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(request)?;
        request_json(Method::POST, "/api/host/giveaways", RequestAuth::Host, Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

pub async fn delete_giveaway(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = send(
            Method::DELETE,
            &format!("/api/host/giveaways/{id}"),
            RequestAuth::Host,
            None,
        )
        .await?;
        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            Err(ApiError::Status { status, body })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

pub async fn fetch_giveaway_stats(id: i64) -> Result<GiveawayStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(
            Method::GET,
            &format!("/api/host/giveaways/{id}/stats"),
            RequestAuth::Host,
            None,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Leaderboard rows for one giveaway.
pub async fn fetch_giveaway_entries(id: i64) -> Result<Vec<LeaderboardEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(
            Method::GET,
            &format!("/api/host/giveaways/{id}/entries"),
            RequestAuth::Host,
            None,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Draw a winner for an ended giveaway. Selection happens server-side.
pub async fn select_winner(id: i64) -> Result<WinnerSelection, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(
            Method::POST,
            &format!("/api/host/giveaways/{id}/select-winner"),
            RequestAuth::Host,
            None,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// CRM listing with pagination, search, and sort.
pub async fn fetch_host_users(
    page: i64,
    size: i64,
    search: &str,
    sort_by: &str,
    sort_order: &str,
) -> Result<Paginated<CrmUser>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut path =
            format!("/api/host/users?page={page}&size={size}&sortBy={sort_by}&sortOrder={sort_order}");
        if !search.is_empty() {
            path.push_str(&format!("&search={search}"));
        }
        request_json(Method::GET, &path, RequestAuth::Host, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, size, search, sort_by, sort_order);
        Err(ApiError::unavailable())
    }
}

pub async fn fetch_campaigns() -> Result<Vec<CampaignSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Method::GET, "/api/host/campaigns", RequestAuth::Host, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// One campaign with its per-recipient delivery log.
pub async fn fetch_campaign(id: i64) -> Result<CampaignDetails, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(
            Method::GET,
            &format!("/api/host/campaigns/{id}"),
            RequestAuth::Host,
            None,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

pub async fn send_campaign(request: &SendCampaignRequest) -> Result<SendCampaignResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(request)?;
        request_json(Method::POST, "/api/host/campaigns/send", RequestAuth::Host, Some(body))
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}

pub async fn fetch_branding() -> Result<BrandingSettings, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Method::GET, "/api/host/branding", RequestAuth::Host, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

pub async fn update_branding(request: &BrandingSettings) -> Result<BrandingSettings, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(request)?;
        request_json(Method::PATCH, "/api/host/branding", RequestAuth::Host, Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::unavailable())
    }
}
