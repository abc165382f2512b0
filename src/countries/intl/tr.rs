//! Turkey: T.C. Kimlik No (citizens, 11 digits) and Vergi Kimlik No
//! (tax number, 10 digits).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

pub struct Turkey;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"[1-9]\d{10}|\d{10}"));

const TYPES: &[TinType] = &[
    TinType::new("TCKN", "T.C. Kimlik Numarası"),
    TinType::new("VKN", "Vergi Kimlik Numarası"),
];

/// Two check digits: `(7 × odd-position sum − even-position sum) mod 10`,
/// then the sum of the first ten digits mod 10.
fn tckn_valid(tin: &TinBody<'_>) -> bool {
    let odd: i64 = [0, 2, 4, 6, 8].iter().map(|&i| i64::from(tin.digit(i))).sum();
    let even: i64 = [1, 3, 5, 7].iter().map(|&i| i64::from(tin.digit(i))).sum();
    let first = (7 * odd - even).rem_euclid(10);
    let second: u32 = tin.digits(0..10).iter().sum::<u32>() % 10;
    first == i64::from(tin.digit(9)) && second == tin.digit(10)
}

fn vkn_valid(tin: &TinBody<'_>) -> bool {
    let mut sum = 0;
    for i in 1..=9u32 {
        let n = (tin.digit(9 - i as usize) + i) % 10;
        if n != 0 {
            sum += match (n << i) % 9 {
                0 => 9,
                r => r,
            };
        }
    }
    (10 - sum % 10) % 10 == tin.digit(9)
}

impl CountryHandler for Turkey {
    fn country_code(&self) -> &'static str {
        "TR"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99999999999", "9999999999"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[10, 11])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        match tin.len() {
            11 if tckn_valid(tin) => Some(0),
            10 if vkn_valid(tin) => Some(1),
            _ => None,
        }
    }
}
