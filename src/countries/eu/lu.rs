use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::{luhn_valid, verhoeff_valid};
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_date};

/// Luxembourg: matricule (national identification number).
///
/// `YYYYMMDD`, a 3-digit serial, then two check digits: Luhn over the first
/// eleven digits, and Verhoeff over the same eleven.
pub struct Luxembourg;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"(1[89]|2\d)\d{2}[01]\d[0-3]\d{6}"));

const TYPES: &[TinType] = &[TinType::new("NIN", "Numéro d'identification national")];

impl CountryHandler for Luxembourg {
    fn country_code(&self) -> &'static str {
        "LU"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["9999 9999 99999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[13])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        is_valid_date(
            tin.number(0..4) as i32,
            tin.number(4..6) as u32,
            tin.number(6..8) as u32,
        )
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let mut luhn = tin.digits(0..11);
        let mut verhoeff = luhn.clone();
        luhn.push(tin.digit(11));
        verhoeff.push(tin.digit(12));
        luhn_valid(&luhn) && verhoeff_valid(&verhoeff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn valid() {
        assert!(is_valid(&Luxembourg, "1983010212367"));
        assert!(is_valid(&Luxembourg, "1893010145601"));
    }

    #[test]
    fn invalid() {
        // Luhn digit fine, Verhoeff digit wrong
        assert_eq!(rejected_at(&Luxembourg, "1983010212368"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Luxembourg, "1983023012367"), Some(Stage::Date));
        assert_eq!(rejected_at(&Luxembourg, "1783010212367"), Some(Stage::Pattern));
    }
}
