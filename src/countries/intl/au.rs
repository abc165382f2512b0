//! Australia: Tax File Number (8 or 9 digits) and Australian Business
//! Number (11 digits).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::weighted_sum;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

pub struct Australia;

static TFN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{8,9}"));
static ABN: Lazy<Regex> = Lazy::new(|| anchored(r"[1-9]\d{10}"));

const TYPES: &[TinType] = &[
    TinType::new("TFN", "Tax File Number"),
    TinType::new("ABN", "Australian Business Number"),
];

const TFN_WEIGHTS: [u32; 9] = [1, 4, 3, 7, 5, 8, 6, 9, 10];
const TFN_SHORT_WEIGHTS: [u32; 8] = [10, 7, 8, 4, 6, 3, 5, 1];
const ABN_WEIGHTS: [u32; 11] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

fn tfn_valid(tin: &TinBody<'_>) -> bool {
    let weights: &[u32] = if tin.len() == 9 { &TFN_WEIGHTS } else { &TFN_SHORT_WEIGHTS };
    weighted_sum(&tin.digits(0..tin.len()), weights) % 11 == 0
}

/// One is subtracted from the leading digit before weighting.
fn abn_valid(tin: &TinBody<'_>) -> bool {
    let mut digits = tin.digits(0..11);
    digits[0] -= 1;
    weighted_sum(&digits, &ABN_WEIGHTS) % 89 == 0
}

impl CountryHandler for Australia {
    fn country_code(&self) -> &'static str {
        "AU"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999 999 999", "99 999 999 999", "99 999 999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[8, 9, 11])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        TFN.is_match(tin) || ABN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        match tin.len() {
            8 | 9 if tfn_valid(tin) => Some(0),
            11 if abn_valid(tin) => Some(1),
            _ => None,
        }
    }
}
