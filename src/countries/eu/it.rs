//! Italy: codice fiscale.
//!
//! Layout: three surname letters, three name letters, `YY`, a month letter,
//! `DD` (plus 40 for women), a 4-character place code, and a check letter.
//! When two people would share a code, digits are substituted right to left
//! with `LMNPQRSTUV` (omocodia); the date fields decode both forms.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::{alphabet_position, letter_at};
use crate::core::{
    Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_in_any_century,
};

pub struct Italy;

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    anchored(r"[A-Z]{6}[0-9LMNP-V]{2}[ABCDEHLMPRST][0-9LMNP-V]{2}[A-Z][0-9LMNP-V]{3}[A-Z]")
});

const TYPES: &[TinType] = &[TinType::new("CF", "Codice Fiscale")];

const OMOCODIA: &str = "LMNPQRSTUV";
const MONTHS: &str = "ABCDEHLMPRST";

/// Values of `0`–`9` / `A`–`Z` in odd (1-based) positions.
const ODD_VALUES: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

/// Numeric value of a date digit, decoding omocodia letters.
fn date_digit(c: char) -> Option<u32> {
    c.to_digit(10)
        .or_else(|| OMOCODIA.find(c).map(|idx| idx as u32))
}

/// Index of a character in the checksum tables: digits map onto `A`–`J`.
fn table_index(c: char) -> Option<u32> {
    c.to_digit(10).or_else(|| alphabet_position(c).map(|p| p - 1))
}

impl CountryHandler for Italy {
    fn country_code(&self) -> &'static str {
        "IT"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["AAAAAA99A99A999A"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[16])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let two = |at: usize| Some(date_digit(tin.char_at(at))? * 10 + date_digit(tin.char_at(at + 1))?);
        let (Some(yy), Some(day)) = (two(6), two(9)) else {
            return false;
        };
        let Some(month) = MONTHS.find(tin.char_at(8)).map(|idx| idx as u32 + 1) else {
            return false;
        };
        let day = if day > 40 { day - 40 } else { day };
        is_valid_in_any_century(yy, month, day, &[1900, 2000])
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let mut sum = 0;
        for i in 0..15 {
            let Some(idx) = table_index(tin.char_at(i)) else {
                return false;
            };
            sum += if i % 2 == 0 { ODD_VALUES[idx as usize] } else { idx };
        }
        letter_at(sum % 26 + 1) == Some(tin.char_at(15))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn valid() {
        assert!(is_valid(&Italy, "RSSMRA85T10A562S"));
        assert!(is_valid(&Italy, "DMLPRY77D15H501F"));
        assert!(is_valid(&Italy, "MRTMTT91D08F205J"));
    }

    #[test]
    fn woman_day_offset() {
        assert!(is_valid(&Italy, "RSSMRA85T50A562W"));
    }

    #[test]
    fn omocodia() {
        assert!(is_valid(&Italy, "RSSMRA85T10A56NH"));
    }

    #[test]
    fn invalid() {
        assert_eq!(rejected_at(&Italy, "RSSMRA85T10A562T"), Some(Stage::Rule));
        // 30 February
        assert_eq!(rejected_at(&Italy, "RSSMRA85B30A562G"), Some(Stage::Date));
        // F is not a month letter
        assert_eq!(rejected_at(&Italy, "RSSMRA85F10A562S"), Some(Stage::Pattern));
    }
}
