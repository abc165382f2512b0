use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::luhn_valid;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// South Africa: SARS income tax reference number, Luhn-checked.
pub struct SouthAfrica;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"[01239]\d{9}"));

const TYPES: &[TinType] = &[TinType::new("TRN", "Income Tax Reference Number")];

impl CountryHandler for SouthAfrica {
    fn country_code(&self) -> &'static str {
        "ZA"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["9999/999/99/9"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        !tin.is_repeated_char() && luhn_valid(&tin.digits(0..10))
    }
}
