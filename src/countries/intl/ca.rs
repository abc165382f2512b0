//! Canada: Social Insurance Number and Business Number.
//!
//! A bare 9-digit value may be either; the SIN is tried first. The
//! 15-character BN appends a program identifier (`RC`, `RM`, `RP`, `RR`,
//! `RT`, `RZ`) and a 4-digit reference.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::luhn_valid;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

pub struct Canada;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{9}|\d{9}R[CMPRTZ]\d{4}"));

const TYPES: &[TinType] = &[
    TinType::new("SIN", "Social Insurance Number"),
    TinType::new("BN", "Business Number"),
];

/// SINs starting with 0 or 8 are never issued to individuals.
fn sin_valid(tin: &TinBody<'_>) -> bool {
    tin.len() == 9 && !matches!(tin.digit(0), 0 | 8) && luhn_valid(&tin.digits(0..9))
}

fn bn_valid(tin: &TinBody<'_>) -> bool {
    luhn_valid(&tin.digits(0..9))
}

impl CountryHandler for Canada {
    fn country_code(&self) -> &'static str {
        "CA"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999 999 999", "999999999 AA 9999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[9, 15])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        if sin_valid(tin) {
            Some(0)
        } else if bn_valid(tin) {
            Some(1)
        } else {
            None
        }
    }
}
