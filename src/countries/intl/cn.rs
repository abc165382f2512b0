//! China: Resident Identity Card number and Unified Social Credit Code.
//!
//! Both are 18 characters. A RIC embeds `YYYYMMDD` at offset 6 and ends in
//! an ISO 7064 MOD 11-2 check (`X` for 10); a USCC uses a 31-character
//! alphabet with a mod-31 check. A digits-only USCC can look like a RIC, so
//! the RIC birth date is only enforced on bodies that are not valid USCCs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{
    Context, CountryHandler, TinBody, TinType, anchored, has_length, is_valid_date,
};

pub struct China;

static RIC: Lazy<Regex> =
    Lazy::new(|| anchored(r"\d{6}(19|20)\d{2}[01]\d[0-3]\d{4}[0-9X]"));
static USCC: Lazy<Regex> = Lazy::new(|| anchored(r"[0-9A-HJ-NP-RTUWXY]{18}"));

const TYPES: &[TinType] = &[
    TinType::new("RIC", "Resident Identity Card Number"),
    TinType::new("USCC", "Unified Social Credit Code"),
];

const RIC_WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
const RIC_CHECK: &[u8; 11] = b"10X98765432";

const USCC_CHARS: &str = "0123456789ABCDEFGHJKLMNPQRTUWXY";
const USCC_WEIGHTS: [u32; 17] = [1, 3, 9, 27, 19, 26, 16, 17, 20, 29, 25, 13, 8, 24, 10, 30, 28];

fn ric_valid(tin: &TinBody<'_>) -> bool {
    let sum: u32 = (0..17).map(|i| tin.digit(i) * RIC_WEIGHTS[i]).sum();
    char::from(RIC_CHECK[(sum % 11) as usize]) == tin.char_at(17)
}

fn ric_birth_date(tin: &TinBody<'_>, ctx: &Context) -> bool {
    let year = tin.number(6..10) as i32;
    (1900..=ctx.current_year()).contains(&year)
        && is_valid_date(year, tin.number(10..12) as u32, tin.number(12..14) as u32)
}

fn uscc_valid(tin: &TinBody<'_>) -> bool {
    let mut sum = 0;
    for i in 0..17 {
        let Some(value) = USCC_CHARS.find(tin.char_at(i)) else {
            return false;
        };
        sum += value as u32 * USCC_WEIGHTS[i];
    }
    let check = ((31 - sum % 31) % 31) as usize;
    USCC_CHARS[check..].starts_with(tin.char_at(17))
}

fn is_ric_shaped(tin: &TinBody<'_>) -> bool {
    RIC.is_match(tin.as_str())
}

impl CountryHandler for China {
    fn country_code(&self) -> &'static str {
        "CN"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999999 99999999 9999", "AA AAAAAA AAAAAAAAA A"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[18])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        RIC.is_match(tin) || USCC.is_match(tin)
    }

    fn has_valid_date(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        !is_ric_shaped(tin) || ric_birth_date(tin, ctx) || uscc_valid(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, ctx: &Context) -> Option<usize> {
        if is_ric_shaped(tin) && ric_birth_date(tin, ctx) && ric_valid(tin) {
            Some(0)
        } else if USCC.is_match(tin.as_str()) && uscc_valid(tin) {
            Some(1)
        } else {
            None
        }
    }

    fn mask_for(&self, tin: &str) -> &'static str {
        if RIC.is_match(tin) {
            "999999 99999999 9999"
        } else {
            "AA AAAAAA AAAAAAAAA A"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at, scheme};
    use crate::core::Stage;

    #[test]
    fn resident_identity_card() {
        assert!(is_valid(&China, "11010519491231002X"));
        assert!(is_valid(&China, "110101199003074514"));
        assert!(is_valid(&China, "11010519491231002x"));
        assert_eq!(scheme(&China, "110101199003074514"), Some("RIC"));
        assert_eq!(rejected_at(&China, "110101199003074515"), Some(Stage::Rule));
    }

    #[test]
    fn birth_date() {
        // 30 February
        assert_eq!(rejected_at(&China, "110101199002304517"), Some(Stage::Date));
        // after the 2024-06-15 reference date
        assert_eq!(rejected_at(&China, "110101202501014519"), Some(Stage::Date));
    }

    #[test]
    fn birth_later_in_the_current_year() {
        // 2024-12-01 is ahead of the reference date but within its year
        assert!(is_valid(&China, "110105202412010028"));
        assert_eq!(rejected_at(&China, "110105202412010029"), Some(Stage::Rule));
    }

    #[test]
    fn unified_social_credit_code() {
        assert!(is_valid(&China, "91350100M000100Y43"));
        assert!(is_valid(&China, "91110000600037341L"));
        assert_eq!(scheme(&China, "91350100M000100Y43"), Some("USCC"));
        assert_eq!(rejected_at(&China, "91350100M000100Y44"), Some(Stage::Rule));
        // I, O, S, V and Z are not in the alphabet
        assert_eq!(rejected_at(&China, "91350100M000100I43"), Some(Stage::Pattern));
    }
}
