use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Malta: identity card number (seven digits and a letter) or the 9-digit
/// TIN issued to non-residents.
pub struct Malta;

static ID_CARD: Lazy<Regex> = Lazy::new(|| anchored(r"\d{7}[MGAPLHBZ]"));
static TIN: Lazy<Regex> = Lazy::new(|| anchored(r"[1-8]{2}\d{7}"));

const TYPES: &[TinType] = &[
    TinType::new("ID", "Identity Card Number"),
    TinType::new("TIN", "Tax Identification Number"),
];

impl CountryHandler for Malta {
    fn country_code(&self) -> &'static str {
        "MT"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["9999999A", "999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[8, 9])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        ID_CARD.is_match(tin) || TIN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        match tin.len() {
            8 => Some(0),
            // the two leading digits of a TIN are the same
            9 if tin.digit(0) == tin.digit(1) => Some(1),
            _ => None,
        }
    }
}
