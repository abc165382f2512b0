//! Saudi Arabia.
//!
//! National ID and Iqama numbers carry a Luhn check digit, the published
//! rule for both, rather than a weighted mod-11 one. The VAT number has no
//! check digit and is validated by shape alone.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::luhn_valid;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Saudi Arabia: national ID (citizens, leading `1`), Iqama (residents,
/// leading `2`), and the 15-digit VAT registration number.
pub struct SaudiArabia;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"[12]\d{9}|3\d{13}3"));

const TYPES: &[TinType] = &[
    TinType::new("NID", "National ID"),
    TinType::new("IQAMA", "Resident Identity (Iqama)"),
    TinType::new("VAT", "VAT Registration Number"),
];

impl CountryHandler for SaudiArabia {
    fn country_code(&self) -> &'static str {
        "SA"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["9999999999", "999999999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10, 15])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        if tin.len() == 15 {
            return Some(2);
        }
        if !luhn_valid(&tin.digits(0..10)) {
            return None;
        }
        match tin.digit(0) {
            1 => Some(0),
            2 => Some(1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at, scheme};
    use crate::core::Stage;

    #[test]
    fn national_id_and_iqama() {
        assert!(is_valid(&SaudiArabia, "1012345672"));
        assert!(is_valid(&SaudiArabia, "2012345670"));
        assert_eq!(scheme(&SaudiArabia, "1012345672"), Some("NID"));
        assert_eq!(scheme(&SaudiArabia, "2012345670"), Some("IQAMA"));
        assert_eq!(rejected_at(&SaudiArabia, "1012345673"), Some(Stage::Rule));
        assert_eq!(rejected_at(&SaudiArabia, "3012345672"), Some(Stage::Pattern));
    }

    #[test]
    fn national_id_check_is_luhn_not_mod_11() {
        // the Luhn digit for 100000000 is 8; no other digit is accepted
        assert!(is_valid(&SaudiArabia, "1000000008"));
        for check in ['0', '1', '2', '3', '4', '5', '6', '7', '9'] {
            let tin = format!("100000000{check}");
            assert_eq!(rejected_at(&SaudiArabia, &tin), Some(Stage::Rule));
        }
    }

    #[test]
    fn vat() {
        assert!(is_valid(&SaudiArabia, "300000000000003"));
        assert_eq!(scheme(&SaudiArabia, "300000000000003"), Some("VAT"));
        assert_eq!(rejected_at(&SaudiArabia, "300000000000004"), Some(Stage::Pattern));
    }
}
