//! United States: SSN, ITIN and EIN.
//!
//! All three are nine digits with no check digit, so the schemes are told
//! apart by their reserved ranges. An ITIN is tried first because its
//! leading `9` would otherwise fall through to the EIN campus prefixes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

pub struct UnitedStates;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{9}"));

const TYPES: &[TinType] = &[
    TinType::new("SSN", "Social Security Number"),
    TinType::new("ITIN", "Individual Taxpayer Identification Number"),
    TinType::new("EIN", "Employer Identification Number"),
];

const SSN: usize = 0;
const ITIN: usize = 1;
const EIN: usize = 2;

const SSN_MASK: &str = "999-99-9999";
const EIN_MASK: &str = "99-9999999";

/// IRS campus prefixes assigned to EINs.
const EIN_PREFIXES: &[(u64, u64)] = &[
    (1, 6),
    (10, 16),
    (20, 27),
    (30, 48),
    (50, 68),
    (71, 77),
    (80, 88),
    (90, 95),
    (98, 99),
];

fn is_ssn(tin: &TinBody<'_>) -> bool {
    let area = tin.number(0..3);
    area != 0
        && area != 666
        && area < 900
        && tin.number(3..5) != 0
        && tin.number(5..9) != 0
}

fn is_itin(tin: &TinBody<'_>) -> bool {
    tin.digit(0) == 9 && matches!(tin.number(3..5), 50..=65 | 70..=88 | 90..=92 | 94..=99)
}

fn is_ein(tin: &TinBody<'_>) -> bool {
    let prefix = tin.number(0..2);
    EIN_PREFIXES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&prefix))
}

fn classify(tin: &TinBody<'_>) -> Option<usize> {
    if is_itin(tin) {
        Some(ITIN)
    } else if is_ssn(tin) {
        Some(SSN)
    } else if is_ein(tin) {
        Some(EIN)
    } else {
        None
    }
}

impl CountryHandler for UnitedStates {
    fn country_code(&self) -> &'static str {
        "US"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &[SSN_MASK, EIN_MASK]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[9])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        classify(tin)
    }

    // Both masks have nine slots; only a body that is an EIN and nothing
    // else gets the EIN layout.
    fn mask_for(&self, tin: &str) -> &'static str {
        if PATTERN.is_match(tin) && classify(&TinBody::new(tin)) == Some(EIN) {
            EIN_MASK
        } else {
            SSN_MASK
        }
    }
}
