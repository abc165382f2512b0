use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Indonesia: NPWP, 15 digits or the 16-digit NIK-based form.
///
/// No published checksum; only placeholder values are rejected.
pub struct Indonesia;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{15,16}"));

const TYPES: &[TinType] = &[TinType::new("NPWP", "Nomor Pokok Wajib Pajak")];

impl CountryHandler for Indonesia {
    fn country_code(&self) -> &'static str {
        "ID"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99.999.999.9-999.999", "9999999999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[15, 16])
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
        assert!(is_valid(&Indonesia, "013000666091000"));
        assert!(is_valid(&Indonesia, "3171234567890001"));
    }

    #[test]
    fn placeholder_values() {
        assert_eq!(rejected_at(&Indonesia, "000000000000000"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Indonesia, "1111111111111111"), Some(Stage::Rule));
    }

    #[test]
    fn formatting() {
        assert_eq!(Indonesia.format_input("013000666091000"), "01.300.066.6-091.000");
    }
}
