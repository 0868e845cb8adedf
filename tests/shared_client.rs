//! The process-wide shared client. Kept in its own test binary so no other
//! test can initialize it first.

use clockify_client::{ClientConfig, Clockify};

#[test]
fn shared_client_first_call_wins() {
    assert!(Clockify::shared_instance().is_none());

    let first = Clockify::shared(ClientConfig::new("apikey123", "baz.co/")).unwrap();
    assert_eq!(first.api_key(), "apikey123");
    assert_eq!(first.global_transport().base_url(), "https://global.baz.co");

    let second = Clockify::shared(ClientConfig::new("otherkey", "other.example")).unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.api_key(), "apikey123");
    assert_eq!(second.config().host, "baz.co/");

    let again = Clockify::shared_instance().unwrap();
    assert!(std::ptr::eq(first, again));

    // Fresh instances stay independent of the shared one.
    let fresh = Clockify::new("otherkey", "other.example").unwrap();
    assert_eq!(fresh.api_key(), "otherkey");
    assert_eq!(first.api_key(), "apikey123");
}
