use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Hungary: adóazonosító jel, always starting with `8`.
pub struct Hungary;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"8\d{9}"));

const TYPES: &[TinType] = &[TinType::new("ATIN", "Adóazonosító jel")];

impl CountryHandler for Hungary {
    fn country_code(&self) -> &'static str {
        "HU"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["9999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        let sum: u32 = (0..9).map(|i| tin.digit(i) * (i as u32 + 1)).sum();
        sum % 11 == tin.digit(9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn valid() {
        assert!(is_valid(&Hungary, "8123456786"));
        assert!(is_valid(&Hungary, "8012345676"));
    }

    #[test]
    fn invalid() {
        assert_eq!(rejected_at(&Hungary, "8123456787"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Hungary, "7123456786"), Some(Stage::Pattern));
    }
}
