//! Finland: henkilötunnus (HETU).
//!
//! `DDMMYY`, a century marker, a 3-digit serial and a check character. The
//! marker is `+` (1800s), `-` or `U`–`Y` (1900s), or `A`–`F` (2000s).
//! Normalization strips `+` and `-`, so the 10-character form without a
//! marker is accepted for the 1800s and 1900s.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{
    Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_in_any_century,
};

pub struct Finland;

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    anchored(r"[0-3]\d[0-1]\d{3}[+\-A-FU-Y]\d{3}[0-9A-FHJ-NPR-Y]|[0-3]\d[0-1]\d{6}[0-9A-FHJ-NPR-Y]")
});

const TYPES: &[TinType] = &[TinType::new("HETU", "Henkilötunnus")];

const CHECK_CHARS: &[u8; 31] = b"0123456789ABCDEFHJKLMNPRSTUVWXY";

impl Finland {
    /// Offset of the serial: after the marker when there is one.
    fn serial_start(tin: &TinBody<'_>) -> usize {
        if tin.len() == 11 { 7 } else { 6 }
    }
}

impl CountryHandler for Finland {
    fn country_code(&self) -> &'static str {
        "FI"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999999-999A", "999999A999A"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10, 11])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let centuries: &[i32] = if tin.len() == 11 {
            match tin.char_at(6) {
                '+' => &[1800],
                '-' | 'U'..='Y' => &[1900],
                'A'..='F' => &[2000],
                _ => &[],
            }
        } else {
            &[1800, 1900]
        };
        let day = tin.number(0..2) as u32;
        let month = tin.number(2..4) as u32;
        let yy = tin.number(4..6) as u32;
        is_valid_in_any_century(yy, month, day, centuries)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let serial = Self::serial_start(tin);
        let number = tin.number(0..6) * 1000 + tin.number(serial..serial + 3);
        char::from(CHECK_CHARS[(number % 31) as usize]) == tin.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn with_marker() {
        assert!(is_valid(&Finland, "131052-308T"));
        assert!(is_valid(&Finland, "010100A123D"));
        assert!(is_valid(&Finland, "010594Y9995"));
    }

    #[test]
    fn without_marker() {
        assert!(is_valid(&Finland, "131052308T"));
    }

    #[test]
    fn invalid() {
        assert_eq!(rejected_at(&Finland, "131052-308U"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Finland, "310252-308T"), Some(Stage::Date));
        assert_eq!(rejected_at(&Finland, "131052G308T"), Some(Stage::Pattern));
        // G is not a check character
        assert_eq!(rejected_at(&Finland, "131052308G"), Some(Stage::Pattern));
    }

    #[test]
    fn formatting_inserts_separator() {
        assert_eq!(Finland.format_input("131052308T"), "131052-308T");
        assert_eq!(Finland.format_input("010100A123D"), "010100A123D");
    }
}
