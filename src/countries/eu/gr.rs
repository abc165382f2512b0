use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Greece: AFM (Arithmós Forologikoú Mitróou). Also reachable as `EL`.
pub struct Greece;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{9}"));

const TYPES: &[TinType] = &[TinType::new("AFM", "Arithmós Forologikoú Mitróou")];

impl CountryHandler for Greece {
    fn country_code(&self) -> &'static str {
        "GR"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[9])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        // weights are descending powers of two, 2^8 down to 2^1
        let sum: u32 = (0..8).map(|i| tin.digit(i) << (8 - i)).sum();
        sum % 11 % 10 == tin.digit(8)
    }
}
