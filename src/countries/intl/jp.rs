use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Japan: Individual Number ("My Number", 12 digits) and Corporate Number
/// (13 digits, check digit first).
pub struct Japan;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{12}|[1-9]\d{12}"));

const TYPES: &[TinType] = &[
    TinType::new("MN", "Individual Number"),
    TinType::new("CN", "Corporate Number"),
];

/// Weights run from the right: 2–7 for the first six digits, then 2–6.
fn my_number_valid(tin: &TinBody<'_>) -> bool {
    let sum: u32 = (1..=11u32)
        .map(|n| {
            let weight = if n <= 6 { n + 1 } else { n - 5 };
            tin.digit(11 - n as usize) * weight
        })
        .sum();
    let check = match sum % 11 {
        0 | 1 => 0,
        r => 11 - r,
    };
    check == tin.digit(11)
}

/// Weights alternate 1, 2 from the right over the last twelve digits.
fn corporate_number_valid(tin: &TinBody<'_>) -> bool {
    let sum: u32 = (1..=12u32)
        .map(|n| tin.digit(13 - n as usize) * if n % 2 == 1 { 1 } else { 2 })
        .sum();
    9 - sum % 9 == tin.digit(0)
}

impl CountryHandler for Japan {
    fn country_code(&self) -> &'static str {
        "JP"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["9999 9999 9999", "9-9999-9999-9999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[12, 13])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        match tin.len() {
            12 if my_number_valid(tin) => Some(0),
            13 if corporate_number_valid(tin) => Some(1),
            _ => None,
        }
    }
}
