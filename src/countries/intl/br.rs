use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::checksum::weighted_sum;
use crate::core::{Context, CountryHandler, TinBody, TinType, anchored, has_length};

/// Brazil: CPF (individuals) and CNPJ (legal entities), each with two
/// mod-11 check digits.
pub struct Brazil;

static PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{11}|\d{14}"));

const TYPES: &[TinType] = &[
    TinType::new("CPF", "Cadastro de Pessoas Físicas"),
    TinType::new("CNPJ", "Cadastro Nacional da Pessoa Jurídica"),
];

const CNPJ_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn check_digit(sum: u32) -> u32 {
    match sum % 11 {
        0 | 1 => 0,
        r => 11 - r,
    }
}

fn cpf_valid(tin: &TinBody<'_>) -> bool {
    // weights count down from n + 1 to 2 over the first n digits
    let digit = |n: usize| {
        let weights: Vec<u32> = (2..=n as u32 + 1).rev().collect();
        check_digit(weighted_sum(&tin.digits(0..n), &weights))
    };
    digit(9) == tin.digit(9) && digit(10) == tin.digit(10)
}

fn cnpj_valid(tin: &TinBody<'_>) -> bool {
    check_digit(weighted_sum(&tin.digits(0..12), &CNPJ_FIRST)) == tin.digit(12)
        && check_digit(weighted_sum(&tin.digits(0..13), &CNPJ_SECOND)) == tin.digit(13)
}

impl CountryHandler for Brazil {
    fn country_code(&self) -> &'static str {
        "BR"
    }

    fn tin_types(&self) -> &'static [TinType] {
        TYPES
    }

    fn masks(&self) -> &'static [&'static str] {
        &["999.999.999-99", "99.999.999/9999-99"]
    }

    fn has_valid_length(&self, tin: &str) -> bool {
        has_length(tin, &[11, 14])
    }

    fn has_valid_pattern(&self, tin: &str) -> bool {
        PATTERN.is_match(tin)
    }

    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool {
        self.scheme_of(tin, ctx).is_some()
    }

    fn scheme_of(&self, tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        // 000.000.000-00, 111.111.111-11, ... pass the arithmetic but are void
        if tin.is_repeated_char() {
            return None;
        }
        match tin.len() {
            11 if cpf_valid(tin) => Some(0),
            14 if cnpj_valid(tin) => Some(1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::testing::{is_valid, rejected_at, scheme};
    use crate::core::Stage;

    #[test]
    fn cpf() {
        assert!(is_valid(&Brazil, "11144477735"));
        assert_eq!(scheme(&Brazil, "111.444.777-35"), Some("CPF"));
        assert_eq!(rejected_at(&Brazil, "11144477736"), Some(Stage::Rule));
    }

    #[test]
    fn cnpj() {
        assert!(is_valid(&Brazil, "11222333000181"));
        assert!(is_valid(&Brazil, "11444777000161"));
        assert_eq!(scheme(&Brazil, "11.222.333/0001-81"), Some("CNPJ"));
        assert_eq!(rejected_at(&Brazil, "11222333000182"), Some(Stage::Rule));
    }

    #[test]
    fn repeated_digits() {
        assert_eq!(rejected_at(&Brazil, "11111111111"), Some(Stage::Rule));
        assert_eq!(rejected_at(&Brazil, "00000000000000"), Some(Stage::Rule));
        assert!(scheme(&Brazil, "11111111111").is_none());
    }

    #[test]
    fn formatting() {
        assert_eq!(Brazil.format_input("11144477735"), "111.444.777-35");
        assert_eq!(Brazil.format_input("11222333000181"), "11.222.333/0001-81");
        assert_eq!(Brazil.format_input("1114"), "111.4");
    }
}
