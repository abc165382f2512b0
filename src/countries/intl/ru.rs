//! Russia: INN (taxpayer identification number).
//!
//! Individuals have 12 digits with two check digits; organisations have 10
//! digits with one.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::weighted_sum;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

pub struct Russia;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{10}|\d{12}"));

const TYPES: &[TinType] = &[
    TinType::new("INN-FL", "INN of an individual"),
    TinType::new("INN-UL", "INN of a legal entity"),
];

const LEGAL_WEIGHTS: [u32; 9] = [2, 4, 10, 3, 5, 9, 4, 6, 8];
const PERSON_FIRST: [u32; 10] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8];
const PERSON_SECOND: [u32; 11] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

fn check(tin: &TinBody<'_>, weights: &[u32]) -> u32 {
    weighted_sum(&tin.digits(0..weights.len()), weights) % 11 % 10
}

impl CountryHandler for Russia {
    fn country_code(&self) -> &'static str {
        "RU"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999999999999", "9999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10, 12])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        match tin.len() {
            12 if check(tin, &PERSON_FIRST) == tin.digit(10)
                && check(tin, &PERSON_SECOND) == tin.digit(11) =>
            {
                Some(0)
            }
            10 if check(tin, &LEGAL_WEIGHTS) == tin.digit(9) => Some(1),
            _ => None,
        }
    }
}
