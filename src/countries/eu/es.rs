//! Spain: DNI (citizens), NIE (foreigners) and CIF (legal entities).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::digit_sum;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

pub struct Spain;

static DNI: Lazy<Regex> = Lazy::new(|| anchored(r"\d{8}[A-Z]"));
static NIE: Lazy<Regex> = Lazy::new(|| anchored(r"[XYZKLM]\d{7}[A-Z]"));
static CIF: Lazy<Regex> = Lazy::new(|| anchored(r"[ABCDEFGHJNPQRSUVW]\d{7}[0-9A-J]"));

const TYPES: &[TinType] = &[
    TinType::new("DNI", "Documento Nacional de Identidad"),
    TinType::new("NIE", "Número de Identidad de Extranjero"),
    TinType::new("CIF", "Código de Identificación Fiscal"),
];

const DNI_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// Entity letters whose control character is a digit; the rest use a letter.
const CIF_NUMERIC: &str = "ABCDEFGHJUV";
const CIF_LETTERS: &[u8; 10] = b"JABCDEFGHI";

fn control_letter(number: u64) -> char {
    char::from(DNI_LETTERS[(number % 23) as usize])
}

fn dni_valid(tin: &TinBody<'_>) -> bool {
    control_letter(tin.number(0..8)) == tin.char_at(8)
}

/// X, Y and Z stand for a leading 0, 1 and 2; K, L and M are dropped.
fn nie_valid(tin: &TinBody<'_>) -> bool {
    let prefix = match tin.char_at(0) {
        'Y' => 1,
        'Z' => 2,
        _ => 0,
    };
    control_letter(prefix * 10_000_000 + tin.number(1..8)) == tin.char_at(8)
}

fn cif_valid(tin: &TinBody<'_>) -> bool {
    let sum: u32 = (0..7)
        .map(|i| {
            let d = tin.digit(i + 1);
            if i % 2 == 0 { digit_sum(d * 2) } else { d }
        })
        .sum();
    let control = (10 - sum % 10) % 10;
    let expected = if CIF_NUMERIC.contains(tin.char_at(0)) {
        char::from_digit(control, 10)
    } else {
        Some(char::from(CIF_LETTERS[control as usize]))
    };
    expected == Some(tin.char_at(8))
}

impl CountryHandler for Spain {
    fn country_code(&self) -> &'static str {
        "ES"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["99999999A", "A9999999A"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[9])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        DNI.is_match(tin) || NIE.is_match(tin) || CIF.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        let raw = tin.as_str();
        if DNI.is_match(raw) && dni_valid(tin) {
            Some(0)
        } else if NIE.is_match(raw) && nie_valid(tin) {
            Some(1)
        } else if CIF.is_match(raw) && cif_valid(tin) {
            Some(2)
        } else {
            None
        }
    }

    fn mask_for(&self, tin: &str) -> &'static str {
        if tin.starts_with(|c: char| c.is_ascii_alphabetic()) {
            "A9999999A"
        } else {
            "99999999A"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at, scheme};
    use crate::core::Stage;

    #[test]
    fn dni() {
        assert!(is_valid(&Spain, "12345678Z"));
        assert_eq!(scheme(&Spain, "12345678Z"), Some("DNI"));
        assert_eq!(rejected_at(&Spain, "12345678A"), Some(Stage::Rule));
    }

    #[test]
    fn nie() {
        for tin in ["X1234567L", "Y1234567X", "K1234567L"] {
            assert!(is_valid(&Spain, tin), "{tin}");
            assert_eq!(scheme(&Spain, tin), Some("NIE"));
        }
        assert_eq!(rejected_at(&Spain, "X1234567A"), Some(Stage::Rule));
    }

    #[test]
    fn cif() {
        for tin in ["A12345674", "B12345674", "P1234567D"] {
            assert!(is_valid(&Spain, tin), "{tin}");
            assert_eq!(scheme(&Spain, tin), Some("CIF"));
        }
        // a numeric-control entity cannot use the letter form
        assert_eq!(rejected_at(&Spain, "A1234567D"), Some(Stage::Rule));
    }

    #[test]
    fn lowercase_input() {
        assert!(is_valid(&Spain, "x1234567l"));
    }

    #[test]
    fn unknown_prefix_letter() {
        assert_eq!(rejected_at(&Spain, "I1234567A"), Some(Stage::Pattern));
        assert!(scheme(&Spain, "I1234567A").is_none());
    }

    #[test]
    fn mask_follows_leading_character() {
        assert_eq!(Spain.mask_for("12345678Z"), "99999999A");
        assert_eq!(Spain.mask_for("X1234567L"), "A9999999A");
    }
}
