use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Portugal: Número de Identificação Fiscal.
pub struct Portugal;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{9}"));

const TYPES: &[TinType] = &[TinType::new("NIF", "Número de Identificação Fiscal")];

impl CountryHandler for Portugal {
    fn country_code(&self) -> &'static str {
        "PT"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999 999 999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[9])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let sum: u32 = (0..8).map(|i| tin.digit(i) * (9 - i as u32)).sum();
        let check = match 11 - sum % 11 {
            10 | 11 => 0,
            c => c,
        };
        check == tin.digit(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn valid() {
        assert!(is_valid(&Portugal, "123456789"));
        assert!(is_valid(&Portugal, "500000018"));
    }

    #[test]
    fn check_of_ten_or_eleven_is_zero() {
        assert!(is_valid(&Portugal, "000001040"));
        assert!(is_valid(&Portugal, "000001090"));
        assert_eq!(rejected_at(&Portugal, "000001041"), Some(Stage::Rule));
    }

    #[test]
    fn invalid() {
        assert_eq!(rejected_at(&Portugal, "123456788"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Portugal, "1234567890"), Some(Stage::Length));
    }
}
