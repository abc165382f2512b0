//! Sweden: personnummer and samordningsnummer.
//!
//! Coordination numbers add 60 to the day. The 12-digit form spells out the
//! full birth year; the Luhn check always covers the last ten digits.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::luhn_valid;
use crate::core::{
    Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_date,
    is_valid_in_any_century,
};

pub struct Sweden;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{10}|(18|19|20)\d{10}"));

const TYPES: &[TinType] = &[TinType::new("PN", "Personnummer")];

impl CountryHandler for Sweden {
    fn country_code(&self) -> &'static str {
        "SE"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999999-9999", "99999999-9999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10, 12])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let offset = tin.len() - 10;
        let month = tin.number(offset + 2..offset + 4) as u32;
        let day = match tin.number(offset + 4..offset + 6) as u32 {
            d if d > 60 => d - 60,
            d => d,
        };
        if offset == 0 {
            is_valid_in_any_century(tin.number(0..2) as u32, month, day, &[1800, 1900, 2000])
        } else {
            is_valid_date(tin.number(0..4) as i32, month, day)
        }
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        luhn_valid(&tin.digits(tin.len() - 10..tin.len()))
    }
}
