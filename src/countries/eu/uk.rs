//! United Kingdom: Unique Taxpayer Reference and National Insurance number.
//!
//! Registered as `UK`; `GB` resolves here through the registry alias.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

pub struct UnitedKingdom;

static UTR: Lazy<Regex> = Lazy::new(|| anchored(r"\d{10}"));

/// NINO, right-padded to nine characters: the suffix letter is optional.
static NINO: Lazy<Regex> =
    Lazy::new(|| anchored(r"[A-CEGHJ-PR-TW-Z][A-CEGHJ-NPR-TW-Z]\d{6}[A-D ]"));

const TYPES: &[TinType] = &[
    TinType::new("UTR", "Unique Taxpayer Reference"),
    TinType::new("NINO", "National Insurance Number"),
];

const UTR_WEIGHTS: [u32; 9] = [6, 7, 8, 9, 10, 5, 4, 3, 2];

/// Leading check digit indexed by the weighted remainder.
const UTR_CHECK: [u32; 11] = [2, 1, 9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Prefixes never allocated as NINOs.
const NINO_BLOCKED: [&str; 7] = ["BG", "GB", "KN", "NK", "NT", "TN", "ZZ"];

fn utr_valid(tin: &TinBody<'_>) -> bool {
    let sum: u32 = (0..9).map(|i| tin.digit(i + 1) * UTR_WEIGHTS[i]).sum();
    UTR_CHECK[(sum % 11) as usize] == tin.digit(0)
}

fn nino_valid(tin: &TinBody<'_>) -> bool {
    let prefix = tin.substring(0..2);
    !NINO_BLOCKED.contains(&prefix.as_str())
}

impl CountryHandler for UnitedKingdom {
    fn country_code(&self) -> &'static str {
        "UK"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99999 99999", "AA 99 99 99 A", "AA 99 99 99"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[8, 9, 10])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        UTR.is_match(tin) || NINO.is_match(&format!("{tin:<9}"))
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        if tin.len() == 10 {
            utr_valid(tin).then_some(0)
        } else {
            nino_valid(tin).then_some(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at, scheme};
    use crate::core::Stage;

    #[test]
    fn utr() {
        assert!(is_valid(&UnitedKingdom, "2234567890"));
        assert!(is_valid(&UnitedKingdom, "9987654321"));
        assert_eq!(scheme(&UnitedKingdom, "2234567890"), Some("UTR"));
        assert_eq!(rejected_at(&UnitedKingdom, "1234567890"), Some(Stage::Rule));
    }

    #[test]
    fn nino() {
        assert!(is_valid(&UnitedKingdom, "AB123456C"));
        assert!(is_valid(&UnitedKingdom, "AB123456"));
        assert_eq!(scheme(&UnitedKingdom, "AB123456C"), Some("NINO"));
    }

    #[test]
    fn nino_rejections() {
        assert_eq!(rejected_at(&UnitedKingdom, "GB123456A"), Some(Stage::Rule));
        assert_eq!(rejected_at(&UnitedKingdom, "DA123456A"), Some(Stage::Pattern));
        assert_eq!(rejected_at(&UnitedKingdom, "AO123456A"), Some(Stage::Pattern));
        assert_eq!(rejected_at(&UnitedKingdom, "AB123456E"), Some(Stage::Pattern));
    }

    #[test]
    fn masks_follow_length() {
        assert_eq!(UnitedKingdom.format_input("2234567890"), "22345 67890");
        assert_eq!(UnitedKingdom.format_input("ab123456c"), "AB 12 34 56 C");
        assert_eq!(UnitedKingdom.format_input("AB123456"), "AB 12 34 56");
    }
}
