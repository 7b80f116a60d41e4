use super::*;
use crate::net::types::BrandingFields;

fn validation(exists: bool) -> SubdomainValidation {
    SubdomainValidation { exists, ..SubdomainValidation::default() }
}

// =============================================================
// Resolution transitions
// =============================================================

#[test]
fn initial_state_is_validating() {
    assert_eq!(TenantResolution::default(), TenantResolution::Validating);
}

#[test]
fn exists_true_resolves_ok_with_branding() {
    let outcome = Ok(SubdomainValidation {
        exists: true,
        subdomain: Some("acme".to_owned()),
        company_name: Some("Acme".to_owned()),
        is_main_domain: None,
        branding: Some(BrandingFields {
            logo_url: None,
            primary_color: Some("#112233".to_owned()),
        }),
    });

    match TenantResolution::from_validation("acme", outcome) {
        TenantResolution::Ok(session) => {
            assert_eq!(session.company_name, "Acme");
            assert_eq!(session.primary_color, "#112233");
            assert_eq!(session.subdomain, "acme");
        }
        other => panic!("expected Ok, got {other:?}"),
    }
}

#[test]
fn absent_branding_fields_fall_back_to_defaults() {
    let outcome = Ok(SubdomainValidation { exists: true, ..SubdomainValidation::default() });

    match TenantResolution::from_validation("acme", outcome) {
        TenantResolution::Ok(session) => {
            assert_eq!(session.company_name, "");
            assert_eq!(session.primary_color, DEFAULT_PRIMARY_COLOR);
            assert_eq!(session.subdomain, "acme");
        }
        other => panic!("expected Ok, got {other:?}"),
    }
}

#[test]
fn exists_false_resolves_not_found() {
    let resolved = TenantResolution::from_validation("ghost", Ok(validation(false)));
    assert_eq!(resolved, TenantResolution::NotFound { subdomain: "ghost".to_owned() });
}

#[test]
fn validator_error_resolves_not_found() {
    let resolved = TenantResolution::from_validation("acme", Err(ApiError::unavailable()));
    assert_eq!(resolved, TenantResolution::NotFound { subdomain: "acme".to_owned() });
}

// =============================================================
// Development bypass
// =============================================================

#[test]
fn localhost_and_empty_identifiers_skip_validation() {
    assert!(TenantResolution::skip_validation("localhost"));
    assert!(TenantResolution::skip_validation(""));
    assert!(!TenantResolution::skip_validation("acme"));
}

// =============================================================
// White-label sentinel
// =============================================================

#[test]
fn placeholder_session_uses_the_white_sentinel() {
    let session = TenantSession::placeholder("demo");
    assert_eq!(session.primary_color, DEFAULT_PRIMARY_COLOR);
    assert!(!session.is_white_label());
    assert_eq!(session.subdomain, "demo");
}

#[test]
fn custom_color_enables_white_label_styling() {
    let mut session = TenantSession::placeholder("demo");
    session.primary_color = "#112233".to_owned();
    assert!(session.is_white_label());
}
