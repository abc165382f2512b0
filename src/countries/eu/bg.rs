use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::weighted_sum;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_date};

/// Bulgaria: EGN (Edinen grazhdanski nomer).
///
/// The month field carries the century: `+20` for the 1800s, `+40` for
/// the 2000s.
pub struct Bulgaria;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{2}[0-5]\d[0-3]\d{5}"));

const TYPES: &[TinType] = &[TinType::new("EGN", "Unified Civil Number")];

const WEIGHTS: [u32; 9] = [2, 4, 8, 5, 10, 9, 7, 3, 6];

impl CountryHandler for Bulgaria {
    fn country_code(&self) -> &'static str {
        "BG"
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

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let yy = tin.number(0..2) as i32;
        let month = tin.number(2..4) as u32;
        let day = tin.number(4..6) as u32;
        let (year, month) = match month {
            41.. => (2000 + yy, month - 40),
            21.. => (1800 + yy, month - 20),
            _ => (1900 + yy, month),
        };
        is_valid_date(year, month, day)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let check = match weighted_sum(&tin.digits(0..9), &WEIGHTS) % 11 {
            10 => 0,
            r => r,
        };
        check == tin.digit(9)
    }
}
