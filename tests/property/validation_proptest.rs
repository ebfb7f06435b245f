//! Property-based tests for field validation

use proptest::prelude::*;
use resto_api::shared::restaurant::food::truncate_price;
use resto_api::shared::validation::{require_object_id, valid_email};

proptest! {
    #[test]
    fn test_truncated_price_never_rounds_up(price in 0.01f64..100_000.0) {
        let truncated = truncate_price(price);
        prop_assert!(truncated <= price + 1e-9);
        prop_assert!(price - truncated < 0.01 + 1e-9);
    }

    #[test]
    fn test_truncated_price_has_two_decimals(price in 0.01f64..100_000.0) {
        let cents = truncate_price(price) * 100.0;
        prop_assert!((cents - cents.round()).abs() < 1e-6);
    }

    #[test]
    fn test_generated_emails_are_valid(local in "[a-z0-9.]{1,20}", domain in "[a-z]{1,12}", tld in "[a-z]{2,6}") {
        let email = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(valid_email(&email));
    }

    #[test]
    fn test_whitespace_emails_are_invalid(local in "[a-z]{1,10}", domain in "[a-z]{1,10}") {
        let email = format!("{} x@{}.com", local, domain);
        prop_assert!(!valid_email(&email));
    }

    #[test]
    fn test_hex_ids_accepted(id in "[0-9a-f]{24}") {
        prop_assert!(require_object_id("menu_id", &id).is_ok());
    }

    #[test]
    fn test_wrong_length_ids_rejected(id in "[0-9a-f]{0,23}") {
        prop_assert!(require_object_id("menu_id", &id).is_err());
    }
}
