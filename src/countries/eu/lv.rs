//! Latvia: personas kods.
//!
//! Old format: `DDMMYY`, a century digit (`0` 1800s, `1` 1900s, `2`
//! 2000s), a serial and a check digit. Codes issued since 2017 start with
//! `32` and carry neither a birth date nor a checksum.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::weighted_sum;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_date};

pub struct Latvia;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"[0-3]\d[0-1]\d{3}[0-2]\d{4}|32\d{9}"));

const TYPES: &[TinType] = &[TinType::new("PK", "Personas kods")];

const WEIGHTS: [u32; 10] = [1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

fn is_new_format(tin: &TinBody<'_>) -> bool {
    tin.starts_with("32")
}

impl CountryHandler for Latvia {
    fn country_code(&self) -> &'static str {
        "LV"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999999-99999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[11])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        if is_new_format(tin) {
            return true;
        }
        let century = 1800 + 100 * tin.digit(6) as i32;
        is_valid_date(
            century + tin.number(4..6) as i32,
            tin.number(2..4) as u32,
            tin.number(0..2) as u32,
        )
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        if is_new_format(tin) {
            return true;
        }
        let sum = weighted_sum(&tin.digits(0..10), &WEIGHTS);
        (1101 - sum) % 11 % 10 == tin.digit(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn old_format() {
        assert!(is_valid(&Latvia, "01019912347"));
        assert!(is_valid(&Latvia, "12128521234"));
    }

    #[test]
    fn new_format_skips_date_and_checksum() {
        assert!(is_valid(&Latvia, "32123456789"));
    }

    #[test]
    fn invalid() {
        assert_eq!(rejected_at(&Latvia, "01019912348"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Latvia, "31029912347"), Some(Stage::Date));
        assert_eq!(rejected_at(&Latvia, "01019932347"), Some(Stage::Pattern));
    }
}
