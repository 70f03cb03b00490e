//! Property-based tests for invite validation
//!
//! Uses proptest to generate codes and near-miss inputs

#![cfg(not(target_arch = "wasm32"))]

use community_join::shared::invite::{validate_invite, INVITE_BASE_URL};
use proptest::prelude::*;

const CODE: &str = "[a-zA-Z0-9-]{2,32}";

fn validated(input: &str) -> Option<String> {
    validate_invite(input).map(String::from)
}

proptest! {
    #[test]
    fn test_valid_code_is_returned_unchanged(code in CODE) {
        prop_assert_eq!(validated(&code), Some(code));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored(
        code in CODE,
        left in "[ \t\n]{0,4}",
        right in "[ \t\n]{0,4}",
    ) {
        prop_assert_eq!(validated(&format!("{left}{code}{right}")), Some(code));
    }

    #[test]
    fn test_too_long_code_is_rejected(code in "[a-zA-Z0-9-]{33,64}") {
        prop_assert_eq!(validated(&code), None);
    }

    #[test]
    fn test_code_with_forbidden_character_is_rejected(
        head in "[a-z0-9]{1,5}",
        bad in "[!@#$%^&*/ ._?=+]",
        tail in "[a-z0-9]{1,5}",
    ) {
        prop_assert_eq!(validated(&format!("{head}{bad}{tail}")), None);
    }

    #[test]
    fn test_gg_link_yields_code(code in CODE) {
        prop_assert_eq!(validated(&format!("https://discord.gg/{code}")), Some(code));
    }

    #[test]
    fn test_invite_link_yields_code(code in CODE, path in "(/[a-z]{0,8})?") {
        let link = format!("https://discord.com/invite/{code}{path}");
        prop_assert_eq!(validated(&link), Some(code));
    }

    #[test]
    fn test_result_always_matches_strict_pattern(input in "\\PC{0,48}") {
        if let Some(code) = validated(&input) {
            prop_assert!((2..=32).contains(&code.len()));
            prop_assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
        }
    }

    #[test]
    fn test_join_url_round_trips_code(code in CODE) {
        let invite = validate_invite(&code).unwrap();
        let url = invite.join_url().unwrap();
        prop_assert_eq!(url.as_str(), format!("{INVITE_BASE_URL}{code}"));
    }

    #[test]
    fn test_validation_is_deterministic(input in "\\PC{0,48}") {
        prop_assert_eq!(validated(&input), validated(&input));
    }
}
