//! Germany: steuerliche Identifikationsnummer (IdNr) and the 13-digit
//! ELSTER form of the Steuernummer (StNr).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::iso7064_mod_11_10;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

pub struct Germany;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"[1-9]\d{10}|\d{13}"));

const TYPES: &[TinType] = &[
    TinType::described(
        "IdNr",
        "Steuerliche Identifikationsnummer",
        "Personal tax ID, issued once for life",
    ),
    TinType::described("StNr", "Steuernummer", "ELSTER 13-digit tax number"),
];

/// Bundesland prefixes of the unified 13-digit Steuernummer (NRW uses 5x).
const STNR_PREFIXES: [u64; 14] = [10, 11, 21, 22, 23, 24, 26, 27, 28, 30, 31, 32, 40, 41];

/// In the first ten digits exactly one digit occurs more than once (twice
/// or three times); the eleventh is the ISO 7064 MOD 11,10 check digit.
fn idnr_valid(tin: &TinBody<'_>) -> bool {
    let digits = tin.digits(0..10);
    let mut counts = [0u8; 10];
    for &d in &digits {
        counts[d as usize] += 1;
    }
    let mut repeated = counts.iter().copied().filter(|&c| c > 1);
    let single_repeat = matches!(
        (repeated.next(), repeated.next()),
        (Some(2 | 3), None)
    );
    single_repeat && iso7064_mod_11_10(&digits) == tin.digit(10)
}

fn stnr_valid(tin: &TinBody<'_>) -> bool {
    let prefix = tin.number(0..2);
    STNR_PREFIXES.contains(&prefix) || (50..=60).contains(&prefix)
}

impl CountryHandler for Germany {
    fn country_code(&self) -> &'static str {
        "DE"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99 999 999 999", "9999 9999 99999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[11, 13])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        match tin.len() {
            11 if idnr_valid(tin) => Some(0),
            13 if stnr_valid(tin) => Some(1),
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
    fn idnr() {
        for tin in [
            "36574261809",
            "86095742719",
            "65929970489",
            "12345678995",
            "26954371827",
        ] {
            assert!(is_valid(&Germany, tin), "{tin}");
            assert_eq!(scheme(&Germany, tin), Some("IdNr"));
        }
    }

    #[test]
    fn idnr_check_digit() {
        assert_eq!(rejected_at(&Germany, "12345678990"), Some(Stage::Rule));
    }

    #[test]
    fn idnr_needs_exactly_one_repeated_digit() {
        // all ten leading digits distinct
        assert_eq!(rejected_at(&Germany, "12345678901"), Some(Stage::Rule));
    }

    #[test]
    fn idnr_no_leading_zero() {
        assert_eq!(rejected_at(&Germany, "02345678995"), Some(Stage::Pattern));
    }

    #[test]
    fn stnr() {
        assert!(is_valid(&Germany, "2181508150123"));
        assert!(is_valid(&Germany, "5133081508159"));
        assert_eq!(scheme(&Germany, "2181508150123"), Some("StNr"));
        assert_eq!(rejected_at(&Germany, "9981508150123"), Some(Stage::Rule));
    }

    #[test]
    fn masks_follow_scheme_length() {
        assert_eq!(Germany.format_input("36574261809"), "36 574 261 809");
        assert_eq!(Germany.format_input("2181508150123"), "2181 5081 50123");
    }
}
