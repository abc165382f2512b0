//! Ukraine: RNOKPP.
//!
//! The check digit here is an approximation of the registry's rule and is
//! not authoritative: a weighted sum of the first nine digits, taken mod 11
//! and then mod 10. Numbers it rejects may still have been issued.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// The 10-digit individual taxpayer number.
pub struct Ukraine;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{10}"));

const TYPES: &[TinType] = &[TinType::new(
    "RNOKPP",
    "Registration number of the taxpayer's account card",
)];

const WEIGHTS: [i64; 9] = [-1, 5, 7, 9, 4, 6, 10, 5, 7];

impl CountryHandler for Ukraine {
    fn country_code(&self) -> &'static str {
        "UA"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["9999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let sum: i64 = WEIGHTS
            .iter()
            .enumerate()
            .map(|(i, w)| w * i64::from(tin.digit(i)))
            .sum();
        sum.rem_euclid(11) % 10 == i64::from(tin.digit(9))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn approximate_check_digit() {
        assert!(is_valid(&Ukraine, "1234567899"));
        assert!(is_valid(&Ukraine, "2876543211"));
    }

    #[test]
    fn approximate_check_wraps_negative_sums() {
        // -3 mod 11 is 8
        assert!(is_valid(&Ukraine, "3000000008"));
    }

    #[test]
    fn invalid() {
        assert_eq!(rejected_at(&Ukraine, "1234567890"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Ukraine, "123456789"), Some(Stage::Length));
    }
}
