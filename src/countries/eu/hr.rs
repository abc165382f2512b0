use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::iso7064_mod_11_10;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Croatia: OIB (Osobni identifikacijski broj), ISO 7064 MOD 11,10.
pub struct Croatia;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{11}"));

const TYPES: &[TinType] = &[TinType::new("OIB", "Osobni identifikacijski broj")];

impl CountryHandler for Croatia {
    fn country_code(&self) -> &'static str {
        "HR"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[11])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        iso7064_mod_11_10(&tin.digits(0..10)) == tin.digit(10)
    }
}
