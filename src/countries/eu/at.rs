use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::digit_sum;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Austria: Steuernummer (tax office + taxpayer number).
pub struct Austria;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{9}"));

const TYPES: &[TinType] = &[TinType::new("StNr", "Steuernummer")];

impl CountryHandler for Austria {
    fn country_code(&self) -> &'static str {
        "AT"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99-999/9999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[9])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        // every second digit is doubled and reduced to its digit sum
        let sum: u32 = (0..8)
            .map(|i| {
                let d = tin.digit(i);
                if i % 2 == 1 { digit_sum(d * 2) } else { d }
            })
            .sum();
        (100 - sum) % 10 == tin.digit(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn valid() {
        assert!(is_valid(&Austria, "931736581"));
    }

    #[test]
    fn wrong_check_digit() {
        assert_eq!(rejected_at(&Austria, "931736582"), Some(Stage::Rule));
    }

    #[test]
    fn shape() {
        assert_eq!(rejected_at(&Austria, "93173658"), Some(Stage::Length));
        assert_eq!(rejected_at(&Austria, "93173658A"), Some(Stage::Pattern));
    }

    #[test]
    fn formatting() {
        assert_eq!(Austria.format_input("931736581"), "93-173/6581");
    }
}
