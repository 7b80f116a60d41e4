use super::*;

#[test]
fn three_label_hostname_returns_first_label() {
    assert_eq!(extract_subdomain("acme.sweepgoat.com", "demo"), "acme");
    assert_eq!(extract_subdomain("acme.sweepgoat.local", "demo"), "acme");
    assert_eq!(extract_subdomain("a.b.c.d", "demo"), "a");
}

#[test]
fn two_labels_ending_in_localhost_is_a_subdomain() {
    assert_eq!(extract_subdomain("test.localhost", "demo"), "test");
}

#[test]
fn plain_localhost_returns_fallback() {
    assert_eq!(extract_subdomain("localhost", "demo"), "demo");
    assert_eq!(extract_subdomain("127.0.0.1", "demo"), "demo");
    assert_eq!(extract_subdomain("localhost", "acme"), "acme");
}

#[test]
fn bare_apex_domain_returns_fallback_not_first_label() {
    assert_eq!(extract_subdomain("sweepgoat.com", "demo"), "demo");
}

#[test]
fn extraction_is_idempotent_within_a_page_load() {
    let first = extract_subdomain("acme.sweepgoat.com", "demo");
    let second = extract_subdomain("acme.sweepgoat.com", "demo");
    assert_eq!(first, second);
}
