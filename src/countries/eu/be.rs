//! Belgium: national register number (Rijksregisternummer / numéro national).
//!
//! `YYMMDD` birth date, a 3-digit serial, and a mod-97 check. People born
//! from 2000 on have the check computed over `2` followed by the first nine
//! digits. Month or day `00` marks an unknown birth date and is accepted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_date};

pub struct Belgium;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{2}[0-1]\d[0-3]\d{6}"));

const TYPES: &[TinType] = &[TinType::new("NN", "National Number")];

/// Whether the embedded date is admissible for people born in `century`.
fn date_in(tin: &TinBody<'_>, century: i32) -> bool {
    let (yy, month, day) = (tin.number(0..2), tin.number(2..4), tin.number(4..6));
    month == 0 || day == 0 || is_valid_date(century + yy as i32, month as u32, day as u32)
}

impl CountryHandler for Belgium {
    fn country_code(&self) -> &'static str {
        "BE"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99.99.99-999.99"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[11])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        date_in(tin, 1900) || date_in(tin, 2000)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let base = tin.number(0..9);
        let check = tin.number(9..11);
        let born_1900s = 97 - base % 97 == check && date_in(tin, 1900);
        let born_2000s = 97 - (2_000_000_000 + base) % 97 == check && date_in(tin, 2000);
        born_1900s || born_2000s
    }
}
