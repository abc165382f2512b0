//! Switzerland: AHV/AVS social security number and the enterprise UID.
//!
//! UIDs registered for VAT are often written with a trailing `MWST`, `TVA`,
//! `IVA` or `TPV`; normalization drops it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::{ean13_check_digit, weighted_sum};
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length, normalize};

pub struct Switzerland;

static AVS: Lazy<Regex> = Lazy::new(|| anchored(r"756\d{10}"));
static UID: Lazy<Regex> = Lazy::new(|| anchored(r"CHE\d{9}"));

const TYPES: &[TinType] = &[
    TinType::described(
        "AVS",
        "Numéro AVS / AHV-Nummer",
        "13-digit social security number, country prefix 756",
    ),
    TinType::described(
        "UID",
        "Unternehmens-Identifikationsnummer",
        "Enterprise identification number, CHE prefix",
    ),
];

const VAT_SUFFIXES: [&str; 4] = ["MWST", "TVA", "IVA", "TPV"];
const UID_WEIGHTS: [u32; 8] = [5, 4, 3, 2, 7, 6, 5, 4];

fn avs_valid(tin: &TinBody<'_>) -> bool {
    ean13_check_digit(&tin.digits(0..12)) == tin.digit(12)
}

/// A computed check of 10 is never issued.
fn uid_valid(tin: &TinBody<'_>) -> bool {
    match 11 - weighted_sum(&tin.digits(3..11), &UID_WEIGHTS) % 11 {
        10 => false,
        11 => tin.digit(11) == 0,
        check => tin.digit(11) == check,
    }
}

impl CountryHandler for Switzerland {
    fn country_code(&self) -> &'static str {
        "CH"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999.9999.9999.99", "AAA-999.999.999"]
    }

    fn normalize(&self, raw: &str) -> String {
        let tin = normalize(raw);
        if tin.starts_with("CHE") {
            if let Some(stripped) = VAT_SUFFIXES.iter().find_map(|s| tin.strip_suffix(s)) {
                return stripped.to_string();
            }
        }
        tin
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[12, 13])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        AVS.is_match(tin) || UID.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        match tin.len() {
            13 if avs_valid(tin) => Some(0),
            12 if uid_valid(tin) => Some(1),
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
    fn avs() {
        assert!(is_valid(&Switzerland, "7561234567897"));
        assert_eq!(scheme(&Switzerland, "756.1234.5678.97"), Some("AVS"));
        assert_eq!(rejected_at(&Switzerland, "7561234567890"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Switzerland, "7569999999999"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Switzerland, "7551234567897"), Some(Stage::Pattern));
    }

    #[test]
    fn uid() {
        assert!(is_valid(&Switzerland, "CHE109515742"));
        assert!(is_valid(&Switzerland, "CHE123456788"));
        assert_eq!(scheme(&Switzerland, "CHE-109.515.742"), Some("UID"));
        assert_eq!(rejected_at(&Switzerland, "CHE109515743"), Some(Stage::Rule));
    }

    #[test]
    fn vat_suffix_is_stripped() {
        assert_eq!(Switzerland.normalize("CHE-109.515.742 MWST"), "CHE109515742");
        assert_eq!(Switzerland.normalize("che-109.515.742 tva"), "CHE109515742");
        assert_eq!(scheme(&Switzerland, "CHE-109.515.742 IVA"), Some("UID"));
        // only UIDs carry the suffix
        assert_eq!(Switzerland.normalize("756.1234.5678.97"), "7561234567897");
    }

    #[test]
    fn formatting() {
        assert_eq!(Switzerland.format_input("7561234567897"), "756.1234.5678.97");
        assert_eq!(Switzerland.format_input("CHE109515742 MWST"), "CHE-109.515.742");
    }
}
