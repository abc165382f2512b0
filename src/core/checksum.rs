//! Checksum primitives shared by the country handlers.
//!
//! Every function here is pure and works on already-extracted digit values,
//! so handlers decide which offsets feed which algorithm.

/// Sum of the decimal digits of `n` (e.g. `16 → 7`).
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// 1-based position of an ASCII letter in the Latin alphabet (`A → 1`).
pub fn alphabet_position(c: char) -> Option<u32> {
    c.is_ascii_alphabetic()
        .then(|| u32::from(c.to_ascii_uppercase() as u8 - b'A') + 1)
}

/// Letter at 1-based alphabet position `pos` (`1 → 'A'`).
pub fn letter_at(pos: u32) -> Option<char> {
    (1..=26)
        .contains(&pos)
        .then(|| char::from(b'A' + (pos - 1) as u8))
}

/// Σ digits[i] × weights[i] over the shorter of the two slices.
pub fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// Luhn (mod 10, doubling every second digit from the right).
///
/// The last element of `digits` is the check digit.
pub fn luhn_valid(digits: &[u32]) -> bool {
    if digits.is_empty() {
        return false;
    }
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

const VERHOEFF_MULT: [[usize; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

const VERHOEFF_PERM: [[usize; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Verhoeff dihedral-group checksum; the last element is the check digit.
pub fn verhoeff_valid(digits: &[u32]) -> bool {
    let mut c = 0;
    for (i, &d) in digits.iter().rev().enumerate() {
        let d = (d as usize).min(9);
        c = VERHOEFF_MULT[c][VERHOEFF_PERM[i % 8][d]];
    }
    c == 0
}

/// EAN-13 check digit of a 12-digit payload (weights 1, 3, 1, 3, … from the left).
pub fn ean13_check_digit(payload: &[u32]) -> u32 {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10
}

/// ISO 7064 MOD 11,10 check digit of `payload`.
pub fn iso7064_mod_11_10(payload: &[u32]) -> u32 {
    let mut product = 10;
    for &d in payload {
        let mut sum = (d + product) % 10;
        if sum == 0 {
            sum = 10;
        }
        product = (sum * 2) % 11;
    }
    (11 - product) % 10
}

/// Mod-11 with a second weight table tried when the first remainder is 10.
///
/// A second remainder of 10 maps to 0. Used by the Baltic personal codes.
pub fn mod11_two_pass(payload: &[u32], first: &[u32], second: &[u32]) -> u32 {
    let remainder = weighted_sum(payload, first) % 11;
    if remainder != 10 {
        return remainder;
    }
    match weighted_sum(payload, second) % 11 {
        10 => 0,
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<u32> {
        s.chars().filter_map(|c| c.to_digit(10)).collect()
    }

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(16), 7);
        assert_eq!(digit_sum(999), 27);
    }

    #[test]
    fn alphabet() {
        assert_eq!(alphabet_position('A'), Some(1));
        assert_eq!(alphabet_position('w'), Some(23));
        assert_eq!(alphabet_position('7'), None);
        assert_eq!(letter_at(20), Some('T'));
        assert_eq!(letter_at(0), None);
        assert_eq!(letter_at(27), None);
    }

    #[test]
    fn luhn() {
        assert!(luhn_valid(&digits("4111111111111111")));
        assert!(luhn_valid(&digits("130692544")));
        assert!(!luhn_valid(&digits("123456789")));
        assert!(!luhn_valid(&[]));
    }

    #[test]
    fn verhoeff() {
        assert!(verhoeff_valid(&digits("2363")));
        assert!(!verhoeff_valid(&digits("2364")));
    }

    #[test]
    fn ean13() {
        assert_eq!(ean13_check_digit(&digits("756123456789")), 7);
        assert_eq!(ean13_check_digit(&digits("400638133393")), 1);
    }

    #[test]
    fn mod_11_10() {
        assert_eq!(iso7064_mod_11_10(&digits("9457740319")), 4);
        assert_eq!(iso7064_mod_11_10(&digits("3657426180")), 9);
    }

    #[test]
    fn two_pass() {
        let first = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
        let second = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];
        assert_eq!(mod11_two_pass(&digits("3760305152"), &first, &second), 8);
    }
}
