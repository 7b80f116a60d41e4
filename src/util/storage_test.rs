use super::*;

#[test]
fn set_then_get_roundtrips() {
    set("storage-test-key", "value-1");
    assert_eq!(get("storage-test-key"), Some("value-1".to_owned()));
}

#[test]
fn last_write_wins() {
    set("storage-test-lww", "first");
    set("storage-test-lww", "second");
    assert_eq!(get("storage-test-lww"), Some("second".to_owned()));
}

#[test]
fn remove_clears_the_key() {
    set("storage-test-rm", "x");
    remove("storage-test-rm");
    assert_eq!(get("storage-test-rm"), None);
}

#[test]
fn remove_all_clears_every_listed_key() {
    set(keys::USER_TOKEN, "tok");
    set(keys::USER_DATA, "{}");
    set(keys::USER_TYPE, "USER");
    remove_all(&[keys::USER_TOKEN, keys::USER_DATA, keys::USER_TYPE]);
    assert_eq!(get(keys::USER_TOKEN), None);
    assert_eq!(get(keys::USER_DATA), None);
    assert_eq!(get(keys::USER_TYPE), None);
}
