use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Slovenia: davčna številka.
pub struct Slovenia;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"[1-9]\d{7}"));

const TYPES: &[TinType] = &[TinType::new("DS", "Davčna številka")];

impl CountryHandler for Slovenia {
    fn country_code(&self) -> &'static str {
        "SI"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[8])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let sum: u32 = (0..7).map(|i| tin.digit(i) * (8 - i as u32)).sum();
        // a remainder of 0 would need check digit 11 and is never issued
        let check = match 11 - sum % 11 {
            10 => 0,
            c => c,
        };
        check == tin.digit(7)
    }
}
