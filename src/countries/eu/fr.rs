use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// France: numéro fiscal de référence (SPI).
pub struct France;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"[0-3]\d{12}"));

const TYPES: &[TinType] = &[TinType::new("SPI", "Numéro fiscal de référence")];

impl CountryHandler for France {
    fn country_code(&self) -> &'static str {
        "FR"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99 99 999 999 999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[13])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        // the remainder is compared against as many trailing digits as it has
        let remainder = tin.number(0..10) % 511;
        let check = match remainder {
            0..=9 => tin.number(12..13),
            10..=99 => tin.number(11..13),
            _ => tin.number(10..13),
        };
        check == remainder
    }
}
