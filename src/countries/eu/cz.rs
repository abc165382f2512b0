//! Czech Republic: rodné číslo (birth number).
//!
//! Women have 50 added to the month; 20 is added when a day's serial range
//! runs out (70 for women). Numbers issued before 1954 have nine digits and
//! no check digit.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_date};

pub struct CzechRepublic;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{2}[0-35-8]\d[0-3]\d{4,5}"));

const TYPES: &[TinType] = &[TinType::new("RC", "Rodné číslo")];

/// Check digit of a 10-digit birth number; 9-digit numbers carry none.
///
/// Shared with Slovakia, which issues the same format.
pub(super) fn birth_number_check(tin: &TinBody<'_>) -> bool {
    if tin.len() == 9 {
        return true;
    }
    tin.number(0..9) % 11 % 10 == u64::from(tin.digit(9))
}

impl CountryHandler for CzechRepublic {
    fn country_code(&self) -> &'static str {
        "CZ"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999999/9999", "999999/999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[9, 10])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let yy = tin.number(0..2) as i32;
        let month = match tin.number(2..4) as u32 {
            m if m > 70 => m - 70,
            m if m > 50 => m - 50,
            m if m > 20 => m - 20,
            m => m,
        };
        let day = tin.number(4..6) as u32;
        let year = match (tin.len(), yy) {
            (9, yy) if yy < 54 => 1900 + yy,
            (9, _) => return false,
            (_, yy) if yy < 54 => 2000 + yy,
            (_, yy) => 1900 + yy,
        };
        is_valid_date(year, month, day)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        birth_number_check(tin)
    }
}
