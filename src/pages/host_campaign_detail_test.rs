use super::*;

#[test]
fn known_filters_become_chips() {
    let chips = filter_chips(r#"{"emailVerified":true,"emailOptIn":true,"giveawayId":7}"#);
    assert_eq!(chips, vec!["Email Verified", "Email Opt-In", "Giveaway ID: 7"]);
}

#[test]
fn negative_flags_read_as_opt_out() {
    let chips = filter_chips(r#"{"smsOptIn":false}"#);
    assert_eq!(chips, vec!["SMS Opt-Out"]);
}

#[test]
fn malformed_or_empty_filters_yield_no_chips() {
    assert!(filter_chips("{not json").is_empty());
    assert!(filter_chips("{}").is_empty());
}
