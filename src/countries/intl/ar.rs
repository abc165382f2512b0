use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::weighted_sum;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Argentina: CUIT / CUIL.
///
/// The two-digit prefix gives the holder type (`20`, `23`, `24`, `27` for
/// people, `30`, `33`, `34` for companies).
pub struct Argentina;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"(20|23|24|27|30|33|34)\d{9}"));

const TYPES: &[TinType] = &[TinType::new("CUIT", "Código Único de Identificación Tributaria")];

const WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

impl CountryHandler for Argentina {
    fn country_code(&self) -> &'static str {
        "AR"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99-99999999-9"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[11])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
        match 11 - weighted_sum(&tin.digits(0..10), &WEIGHTS) % 11 {
            11 => tin.digit(10) == 0,
            // such numbers are reissued under another prefix
            10 => false,
            check => tin.digit(10) == check,
        }
    }
}
