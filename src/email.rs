//! Canonical email-address check shared by the sign-in and recovery flows.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anchored platform-wide email pattern: an unquoted local part without
/// separator characters (or any quoted string), then a dotted domain with
/// a 2+ letter TLD or a bracketed IPv4 literal.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("envbase: email pattern must compile")
});

/// Whether `input` matches the canonical email pattern.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_addresses_match() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@mail.example.co"));
        assert!(is_valid_email("user-tag@sub.example-host.com"));
    }

    #[test]
    fn quoted_local_part_matches() {
        assert!(is_valid_email(r#""john doe"@example.com"#));
    }

    #[test]
    fn bracketed_ipv4_domain_matches() {
        assert!(is_valid_email("user@[192.168.0.1]"));
    }

    #[test]
    fn empty_and_partial_inputs_do_not_match() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn domain_needs_a_dotted_tld() {
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example.c"));
    }

    #[test]
    fn separator_characters_in_local_part_do_not_match() {
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user;name@example.com"));
        assert!(!is_valid_email("a..b@example.com"));
    }

    #[test]
    fn match_is_anchored() {
        assert!(!is_valid_email("see user@example.com for details"));
        assert!(!is_valid_email("user@example.com\ntrailing"));
    }
}
