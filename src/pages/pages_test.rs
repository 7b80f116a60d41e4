use super::*;

#[test]
fn accepts_ordinary_addresses() {
    assert!(looks_like_email("user@example.com"));
    assert!(looks_like_email("first.last@mail.co.uk"));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!looks_like_email(""));
    assert!(!looks_like_email("no-at-sign"));
    assert!(!looks_like_email("@example.com"));
    assert!(!looks_like_email("user@nodot"));
    assert!(!looks_like_email("user@.com"));
    assert!(!looks_like_email("user@example."));
}
