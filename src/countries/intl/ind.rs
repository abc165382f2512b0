use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// India: Permanent Account Number.
pub struct India;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"[A-Z]{5}\d{4}[A-Z]"));

const TYPES: &[TinType] = &[TinType::new("PAN", "Permanent Account Number")];

/// Holder type in the fourth position (person, company, trust, ...).
const HOLDER_TYPES: &str = "ABCFGHJLPT";

impl CountryHandler for India {
    fn country_code(&self) -> &'static str {
        "IN"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["AAAAA9999A"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        HOLDER_TYPES.contains(tin.char_at(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at};
    use crate::core::Stage;

    #[test]
    fn valid() {
        assert!(is_valid(&India, "ABCPE1234F"));
        assert!(is_valid(&India, "aaacb1234c"));
    }

    #[test]
    fn invalid() {
        assert_eq!(rejected_at(&India, "ABCDE1234F"), Some(Stage::Rule));
        assert_eq!(rejected_at(&India, "ABCP11234F"), Some(Stage::Pattern));
    }
}
