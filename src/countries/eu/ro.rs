//! Romania: Cod Numeric Personal.
//!
//! The first digit encodes sex and century: `1`/`2` 1900s, `3`/`4` 1800s,
//! `5`/`6` 2000s, `7`/`8` foreign residents. Birth years may not lie after
//! the reference year.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::weighted_sum;
use crate::core::{
    Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_date,
};

pub struct Romania;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"[1-8]\d{2}[0-1]\d[0-3]\d{7}"));

const TYPES: &[TinType] = &[TinType::new("CNP", "Cod Numeric Personal")];

const WEIGHTS: [u32; 12] = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

impl CountryHandler for Romania {
    fn country_code(&self) -> &'static str {
        "RO"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["9999999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[13])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        let yy = tin.number(1..3) as i32;
        let year = match tin.digit(0) {
            1 | 2 => 1900 + yy,
            3 | 4 => 1800 + yy,
            5 | 6 => 2000 + yy,
            // residents: the latest century that is not in the future
            _ if 2000 + yy <= ctx.current_year() => 2000 + yy,
            _ => 1900 + yy,
        };
        year <= ctx.current_year()
            && is_valid_date(year, tin.number(3..5) as u32, tin.number(5..7) as u32)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let check = match weighted_sum(&tin.digits(0..12), &WEIGHTS) % 11 {
            10 => 1,
            r => r,
        };
        check == tin.digit(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn valid() {
        assert!(is_valid(&Romania, "1970612412340"));
        assert!(is_valid(&Romania, "5030101123451"));
        // resident born in 1998
        assert!(is_valid(&Romania, "7980101123453"));
    }

    #[test]
    fn born_in_the_future() {
        // 2025 is after the 2024-06-15 reference date
        assert_eq!(rejected_at(&Romania, "5250101123450"), Some(Stage::Date));
    }

    #[test]
    fn birth_later_in_the_current_year() {
        // 2024-12-01 is ahead of the reference date but within its year
        assert!(is_valid(&Romania, "6241201123459"));
        assert_eq!(rejected_at(&Romania, "6241201123450"), Some(Stage::Rule));
    }

    #[test]
    fn invalid() {
        assert_eq!(rejected_at(&Romania, "1970612412341"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Romania, "1970230412340"), Some(Stage::Date));
        assert_eq!(rejected_at(&Romania, "9970612412340"), Some(Stage::Pattern));
    }
}
