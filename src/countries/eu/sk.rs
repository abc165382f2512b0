use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored};

use super::cz::birth_number_check;

/// Slovakia: rodné číslo, inherited from the Czechoslovak format.
///
/// Only numbers for people born before 1954 may have nine digits.
pub struct Slovakia;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{2}[0156]\d[0-3]\d{4,5}"));

const TYPES: &[TinType] = &[TinType::new("RC", "Rodné číslo")];

impl CountryHandler for Slovakia {
    fn country_code(&self) -> &'static str {
        "SK"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999999/9999", "999999/999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        match tin.chars().count() {
            10 => true,
            9 => tin
                .get(0..2)
                .and_then(|yy| yy.parse::<u32>().ok())
                .is_some_and(|yy| yy < 54),
            _ => false,
        }
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        birth_number_check(tin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn valid() {
        assert!(is_valid(&Slovakia, "8552301230"));
        assert!(is_valid(&Slovakia, "7211300129"));
        assert!(is_valid(&Slovakia, "530101123"));
    }

    #[test]
    fn nine_digits_only_before_1954() {
        assert_eq!(rejected_at(&Slovakia, "650101123"), Some(Stage::Length));
    }

    #[test]
    fn invalid() {
        assert_eq!(rejected_at(&Slovakia, "8552301231"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Slovakia, "8572301230"), Some(Stage::Pattern));
    }
}
