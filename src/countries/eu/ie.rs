//! Ireland: Personal Public Service Number.
//!
//! Seven digits, a check letter, and an optional second letter (`W` or
//! `A`–`I`) that also feeds the checksum.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::{alphabet_position, letter_at};
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

pub struct Ireland;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{7}[A-W][A-IW]?"));

const TYPES: &[TinType] = &[TinType::new("PPSN", "Personal Public Service Number")];

impl CountryHandler for Ireland {
    fn country_code(&self) -> &'static str {
        "IE"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["9999999A", "9999999AA"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[8, 9])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let mut sum: u32 = (0..7).map(|i| tin.digit(i) * (8 - i as u32)).sum();
        if tin.len() == 9 {
            let second = tin.char_at(8);
            let value = if second == 'W' { 0 } else { alphabet_position(second).unwrap_or(0) };
            sum += 9 * value;
        }
        let expected = match sum % 23 {
            0 => Some('W'),
            r => letter_at(r),
        };
        expected == Some(tin.char_at(7))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn valid() {
        assert!(is_valid(&Ireland, "1234567T"));
        assert!(is_valid(&Ireland, "1234567FA"));
        assert!(is_valid(&Ireland, "1234567TW"));
    }

    #[test]
    fn invalid() {
        assert_eq!(rejected_at(&Ireland, "1234567A"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Ireland, "1234567TA"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Ireland, "1234567TX"), Some(Stage::Pattern));
    }
}
