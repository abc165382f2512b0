use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Netherlands: Burgerservicenummer (11-proof).
pub struct Netherlands;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{9}"));

const TYPES: &[TinType] = &[TinType::new("BSN", "Burgerservicenummer")];

impl CountryHandler for Netherlands {
    fn country_code(&self) -> &'static str {
        "NL"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["9999.99.999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[9])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let sum: u32 = (0..8).map(|i| tin.digit(i) * (9 - i as u32)).sum();
        sum % 11 == tin.digit(8)
    }
}
