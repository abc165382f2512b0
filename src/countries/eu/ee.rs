//! Estonia: isikukood.
//!
//! Lithuania issues personal codes with the same layout and checksum, so
//! the shared stages live here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::mod11_two_pass;
use crate::core::{
    Context, CountryHandler, TinBody, TinType, anchored, baltic_century, has_length, is_valid_date,
};

pub struct Estonia;

/// Gender/century digit, `YYMMDD`, serial, check digit.
pub(super) static PERSONAL_CODE: Lazy<Regex> =
    Lazy::new(|| anchored(r"[1-6]\d{2}[0-1]\d[0-3]\d{5}"));

const TYPES: &[TinType] = &[TinType::new("IK", "Isikukood")];

const FIRST_PASS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECOND_PASS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

pub(super) fn personal_code_date(tin: &TinBody<'_>) -> bool {
    let Some(century) = baltic_century(tin.digit(0)) else {
        return false;
    };
    let year = century + tin.number(1..3) as i32;
    is_valid_date(year, tin.number(3..5) as u32, tin.number(5..7) as u32)
}

pub(super) fn personal_code_check(tin: &TinBody<'_>) -> bool {
    mod11_two_pass(&tin.digits(0..10), &FIRST_PASS, &SECOND_PASS) == tin.digit(10)
}

impl CountryHandler for Estonia {
    fn country_code(&self) -> &'static str {
        "EE"
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
