use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::letter_at;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Cyprus: Tax Identification Code, eight digits and a check letter.
pub struct Cyprus;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"[013459]\d{7}[A-Z]"));

const TYPES: &[TinType] = &[TinType::new("TIC", "Tax Identification Code")];

fn recode(d: u32) -> u32 {
    match d {
        0 => 1,
        1 => 0,
        2 => 5,
        3 => 7,
        4 => 9,
        d => d * 2 + 3,
    }
}

impl CountryHandler for Cyprus {
    fn country_code(&self) -> &'static str {
        "CY"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99999999A"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[9])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let sum: u32 = (0..8)
            .map(|i| if i % 2 == 0 { recode(tin.digit(i)) } else { tin.digit(i) })
            .sum();
        letter_at(sum % 26 + 1) == Some(tin.char_at(8))
    }
}
