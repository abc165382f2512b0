//! Poland: NIP (tax number) and PESEL (population register number).
//!
//! The PESEL month field encodes the century: `+80` for the 1800s, none for
//! the 1900s, then `+20`, `+40`, `+60` for each century from 2000 on.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::weighted_sum;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_date};

pub struct Poland;

static NIP: Lazy<Regex> = Lazy::new(|| anchored(r"\d{10}"));
static PESEL: Lazy<Regex> = Lazy::new(|| anchored(r"\d{4}[0-3]\d{6}"));

const TYPES: &[TinType] = &[
    TinType::new("NIP", "Numer Identyfikacji Podatkowej"),
    TinType::new("PESEL", "Powszechny Elektroniczny System Ewidencji Ludności"),
];

const NIP_WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];
const PESEL_WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

fn nip_valid(tin: &TinBody<'_>) -> bool {
    weighted_sum(&tin.digits(0..9), &NIP_WEIGHTS) % 11 == tin.digit(9)
}

fn pesel_valid(tin: &TinBody<'_>) -> bool {
    (10 - weighted_sum(&tin.digits(0..10), &PESEL_WEIGHTS) % 10) % 10 == tin.digit(10)
}

impl CountryHandler for Poland {
    fn country_code(&self) -> &'static str {
        "PL"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999-999-99-99", "99999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10, 11])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        NIP.is_match(tin) || PESEL.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        if tin.len() != 11 {
            return true;
        }
        let yy = tin.number(0..2) as i32;
        let (century, month) = match tin.number(2..4) as u32 {
            m @ 81..=92 => (1800, m - 80),
            m @ 61..=72 => (2200, m - 60),
            m @ 41..=52 => (2100, m - 40),
            m @ 21..=32 => (2000, m - 20),
            m => (1900, m),
        };
        is_valid_date(century + yy, month, tin.number(4..6) as u32)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        match tin.len() {
            10 if nip_valid(tin) => Some(0),
            11 if pesel_valid(tin) => Some(1),
            _ => None,
        }
    }
}
