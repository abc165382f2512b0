use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Nigeria: FIRS TIN (10 digits, or 12 with the 4-digit branch suffix).
pub struct Nigeria;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{10}|\d{12}"));

const TYPES: &[TinType] = &[TinType::new("TIN", "Tax Identification Number")];

impl CountryHandler for Nigeria {
    fn country_code(&self) -> &'static str {
        "NG"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99999999-9999", "9999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10, 12])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        !tin.is_repeated_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn valid() {
        assert!(is_valid(&Nigeria, "1234567890"));
        assert!(is_valid(&Nigeria, "123456780001"));
    }

    #[test]
    fn invalid() {
        assert_eq!(rejected_at(&Nigeria, "0000000000"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Nigeria, "12345678901"), Some(Stage::Length));
    }

    #[test]
    fn formatting() {
        assert_eq!(Nigeria.format_input("123456780001"), "12345678-0001");
        assert_eq!(Nigeria.format_input("1234567890"), "1234567890");
    }
}
