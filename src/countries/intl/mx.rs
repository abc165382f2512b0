//! Mexico: RFC for individuals (13 characters) and companies (12), and the
//! CURP population register key (18).
//!
//! `&` and `Ñ` are legal RFC letters, so normalization keeps `&`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{
    Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_in_any_century,
    normalize_keeping,
};

pub struct Mexico;

static RFC_PERSON: Lazy<Regex> = Lazy::new(|| anchored(r"[A-ZÑ&]{4}\d{6}[A-Z0-9]{2}[0-9A]"));
static RFC_COMPANY: Lazy<Regex> = Lazy::new(|| anchored(r"[A-ZÑ&]{3}\d{6}[A-Z0-9]{2}[0-9A]"));
static CURP: Lazy<Regex> = Lazy::new(|| {
    anchored(r"[A-Z]{4}\d{6}[HMX][A-Z]{2}[B-DF-HJ-NP-TV-Z]{3}[0-9A-Z]\d")
});

const TYPES: &[TinType] = &[
    TinType::new("RFC-PF", "Registro Federal de Contribuyentes (persona física)"),
    TinType::new("RFC-PM", "Registro Federal de Contribuyentes (persona moral)"),
    TinType::new("CURP", "Clave Única de Registro de Población"),
];

/// RFC check alphabet; a company RFC is left-padded with the space.
const RFC_CHARS: &str = "0123456789ABCDEFGHIJKLMN&OPQRSTUVWXYZ Ñ";
const CURP_CHARS: &str = "0123456789ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

fn char_value(alphabet: &str, c: char) -> Option<u32> {
    alphabet.chars().position(|a| a == c).map(|idx| idx as u32)
}

fn rfc_valid(tin: &TinBody<'_>) -> bool {
    let padded: Vec<char> = std::iter::repeat_n(' ', 13 - tin.len())
        .chain((0..tin.len()).map(|i| tin.char_at(i)))
        .collect();
    let mut sum = 0;
    for (i, &c) in padded[..12].iter().enumerate() {
        let Some(value) = char_value(RFC_CHARS, c) else {
            return false;
        };
        sum += value * (13 - i as u32);
    }
    let expected = match sum % 11 {
        0 => '0',
        1 => 'A',
        r => char::from_digit(11 - r, 10).unwrap_or('0'),
    };
    expected == padded[12]
}

fn curp_valid(tin: &TinBody<'_>) -> bool {
    let mut sum = 0;
    for i in 0..17 {
        let Some(value) = char_value(CURP_CHARS, tin.char_at(i)) else {
            return false;
        };
        sum += value * (18 - i as u32);
    }
    (10 - sum % 10) % 10 == tin.digit(17)
}

impl CountryHandler for Mexico {
    fn country_code(&self) -> &'static str {
        "MX"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["AAAA-999999-AAA", "AAA-999999-AAA", "AAAA999999AAAAAA99"]
    }

    fn normalize(&self, raw: &str) -> String {
        normalize_keeping(raw, &['&'])
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[12, 13, 18])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        RFC_PERSON.is_match(tin) || RFC_COMPANY.is_match(tin) || CURP.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        // YYMMDD follows the 3- or 4-letter name prefix
        let at = if tin.len() == 12 { 3 } else { 4 };
        is_valid_in_any_century(
            tin.number(at..at + 2) as u32,
            tin.number(at + 2..at + 4) as u32,
            tin.number(at + 4..at + 6) as u32,
            &[1900, 2000],
        )
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        match tin.len() {
            13 if rfc_valid(tin) => Some(0),
            12 if rfc_valid(tin) => Some(1),
            18 if curp_valid(tin) => Some(2),
            _ => None,
        }
    }
}
