use super::*;

#[test]
fn validation_body_parses_with_branding() {
    let body: SubdomainValidation = serde_json::from_value(serde_json::json!({
        "exists": true,
        "subdomain": "acme",
        "companyName": "Acme",
        "branding": { "logoUrl": null, "primaryColor": "#112233" }
    }))
    .expect("validation body");

    assert!(body.exists);
    assert_eq!(body.company_name.as_deref(), Some("Acme"));
    let branding = body.branding.expect("branding");
    assert_eq!(branding.primary_color.as_deref(), Some("#112233"));
    assert_eq!(branding.logo_url, None);
}

#[test]
fn validation_body_parses_negative_answer() {
    let body: SubdomainValidation =
        serde_json::from_value(serde_json::json!({ "exists": false })).expect("negative body");
    assert!(!body.exists);
    assert_eq!(body.branding, None);
}

#[test]
fn login_outcome_with_token_is_success() {
    let outcome: LoginOutcome = serde_json::from_value(serde_json::json!({
        "token": "tok-1",
        "userId": 7,
        "email": "a@b.com",
        "firstName": "Ada",
        "lastName": "Lovelace"
    }))
    .expect("login outcome");

    match outcome {
        LoginOutcome::Success(success) => {
            assert_eq!(success.token, "tok-1");
            assert_eq!(success.user_id, 7);
        }
        LoginOutcome::Unverified(_) => panic!("expected success"),
    }
}

#[test]
fn login_outcome_without_token_is_unverified() {
    let outcome: LoginOutcome = serde_json::from_value(serde_json::json!({
        "emailVerified": false,
        "email": "a@b.com",
        "message": "Please verify your email"
    }))
    .expect("login outcome");

    match outcome {
        LoginOutcome::Unverified(unverified) => {
            assert!(!unverified.email_verified);
            assert_eq!(unverified.email, "a@b.com");
        }
        LoginOutcome::Success(_) => panic!("expected unverified"),
    }
}

#[test]
fn paginated_envelope_parses() {
    let page: Paginated<UserEntry> = serde_json::from_value(serde_json::json!({
        "data": [{
            "giveawayId": 3,
            "giveawayTitle": "Summer Draw",
            "points": 12,
            "status": "ACTIVE"
        }],
        "currentPage": 0,
        "totalPages": 2,
        "totalItems": 6,
        "pageSize": 5,
        "hasNext": true,
        "hasPrevious": false
    }))
    .expect("paginated body");

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].giveaway_title, "Summer Draw");
    assert!(page.has_next);
}

#[test]
fn error_body_field_errors_parse() {
    let body: ErrorBody = serde_json::from_value(serde_json::json!({
        "error": "Validation failed",
        "fieldErrors": { "email": "Email is required" }
    }))
    .expect("error body");

    let field_errors = body.field_errors.expect("field errors");
    assert_eq!(field_errors.get("email").map(String::as_str), Some("Email is required"));
}

#[test]
fn campaign_detail_parses_with_recipient_log() {
    let details: CampaignDetails = serde_json::from_value(serde_json::json!({
        "id": 4,
        "name": "Launch blast",
        "type": "EMAIL",
        "subject": "We're live",
        "message": "Come enter!",
        "status": "SENT",
        "totalRecipients": 2,
        "totalSent": 1,
        "totalFailed": 1,
        "filtersJson": "{\"emailOptIn\":true}",
        "recipients": [
            { "userId": 9, "email": "a@b.com", "status": "SENT" },
            { "userId": 10, "email": "c@d.com", "status": "FAILED", "errorMessage": "bounce" }
        ]
    }))
    .expect("campaign detail");

    assert_eq!(details.kind, "EMAIL");
    assert_eq!(details.recipients.len(), 2);
    assert_eq!(details.recipients[1].error_message.as_deref(), Some("bounce"));
}

#[test]
fn campaign_detail_parses_without_recipients() {
    let details: CampaignDetails = serde_json::from_value(serde_json::json!({
        "id": 4,
        "name": "Draft",
        "type": "SMS",
        "status": "DRAFT"
    }))
    .expect("campaign detail");
    assert!(details.recipients.is_empty());
}

#[test]
fn campaign_type_field_maps_to_kind() {
    let campaign: CampaignSummary = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Launch blast",
        "type": "EMAIL",
        "status": "SENT"
    }))
    .expect("campaign");
    assert_eq!(campaign.kind, "EMAIL");
}
