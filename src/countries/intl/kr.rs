//! South Korea: Resident Registration Number and Business Registration
//! Number.
//!
//! The seventh RRN digit encodes sex and century: `1`, `2`, `5`, `6` for the
//! 1900s, `3`, `4`, `7`, `8` for the 2000s, `9` and `0` for the 1800s.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::weighted_sum;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_date};

pub struct SouthKorea;

static RRN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{2}[01]\d[0-3]\d{8}"));
static BRN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{10}"));

const TYPES: &[TinType] = &[
    TinType::new("RRN", "Resident Registration Number"),
    TinType::new("BRN", "Business Registration Number"),
];

const RRN_WEIGHTS: [u32; 12] = [2, 3, 4, 5, 6, 7, 8, 9, 2, 3, 4, 5];
const BRN_WEIGHTS: [u32; 9] = [1, 3, 7, 1, 3, 7, 1, 3, 5];

fn rrn_valid(tin: &TinBody<'_>) -> bool {
    (11 - weighted_sum(&tin.digits(0..12), &RRN_WEIGHTS) % 11) % 10 == tin.digit(12)
}

/// The ninth digit is weighted by 5 and its carry added once more.
fn brn_valid(tin: &TinBody<'_>) -> bool {
    let sum = weighted_sum(&tin.digits(0..9), &BRN_WEIGHTS) + tin.digit(8) * 5 / 10;
    (10 - sum % 10) % 10 == tin.digit(9)
}

impl CountryHandler for SouthKorea {
    fn country_code(&self) -> &'static str {
        "KR"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999999-9999999", "999-99-99999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10, 13])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        RRN.is_match(tin) || BRN.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        if tin.len() != 13 {
            return true;
        }
        let century = match tin.digit(6) {
            1 | 2 | 5 | 6 => 1900,
            3 | 4 | 7 | 8 => 2000,
            _ => 1800,
        };
        is_valid_date(
            century + tin.number(0..2) as i32,
            tin.number(2..4) as u32,
            tin.number(4..6) as u32,
        )
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        match tin.len() {
            13 if rrn_valid(tin) => Some(0),
            10 if brn_valid(tin) => Some(1),
            _ => None,
        }
    }
}
