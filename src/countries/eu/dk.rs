use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::weighted_sum;
use crate::core::{
    Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_in_any_century,
};

/// Denmark: CPR-nummer, `DDMMYY` followed by a 4-digit serial.
pub struct Denmark;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"[0-3]\d[0-1]\d{7}"));

const TYPES: &[TinType] = &[TinType::new("CPR", "Personnummer")];

const WEIGHTS: [u32; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

impl CountryHandler for Denmark {
    fn country_code(&self) -> &'static str {
        "DK"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999999-9999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let day = tin.number(0..2) as u32;
        let month = tin.number(2..4) as u32;
        let yy = tin.number(4..6) as u32;
        is_valid_in_any_century(yy, month, day, &[1900, 2000])
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let check = tin.digit(9);
        match weighted_sum(&tin.digits(0..9), &WEIGHTS) % 11 {
            1 => false,
            0 => check == 0,
            r => check == 11 - r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn valid() {
        assert!(is_valid(&Denmark, "0101111237"));
        assert!(is_valid(&Denmark, "3112971237"));
    }

    #[test]
    fn invalid() {
        assert_eq!(rejected_at(&Denmark, "0101111238"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Denmark, "3102971237"), Some(Stage::Date));
        assert_eq!(rejected_at(&Denmark, "4101111237"), Some(Stage::Pattern));
    }

    #[test]
    fn formatting() {
        assert_eq!(Denmark.format_input("010111-1237"), "010111-1237");
    }
}
