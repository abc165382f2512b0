use crate::core::{Context, CountryHandler, TinBody, TinType, has_length};

use super::ee::{PERSONAL_CODE, personal_code_check, personal_code_date};

/// Lithuania: asmens kodas, same layout and checksum as the Estonian code.
pub struct Lithuania;

const TYPES: &[TinType] = &[TinType::new("AK", "Asmens kodas")];

impl CountryHandler for Lithuania {
    fn country_code(&self) -> &'static str {
        "LT"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[11])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PERSONAL_CODE.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        personal_code_date(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        personal_code_check(tin)
    }
}
