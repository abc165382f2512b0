use std::ops::Range;

/// A normalized TIN body that has passed the length and pattern stages.
///
/// The date and rule stages only ever see a `TinBody`, so the fixed-offset
/// reads they perform happen after the shape of the input is known. The
/// accessors are still bounds-checked: an out-of-range read yields `0` (or
/// `'\0'` for characters) instead of panicking, which makes a wrong offset
/// fail the checksum rather than crash the caller. Characters are read
/// uppercased so strict (unnormalized) input compares like normalized input.
#[derive(Debug, Clone)]
pub struct TinBody<'a> {
    raw: &'a str,
    chars: Vec<char>,
}

impl<'a> TinBody<'a> {
    pub(crate) fn new(raw: &'a str) -> Self {
        Self {
            raw,
            chars: raw
                .chars()
                .map(|c| c.to_uppercase().next().unwrap_or(c))
                .collect(),
        }
    }

    /// The body as a string slice.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `idx`, or `'\0'` past the end.
    pub fn char_at(&self, idx: usize) -> char {
        self.chars.get(idx).copied().unwrap_or('\0')
    }

    /// Decimal value of the character at `idx`, or `0` if it is not a digit.
    pub fn digit(&self, idx: usize) -> u32 {
        self.char_at(idx).to_digit(10).unwrap_or(0)
    }

    /// Decimal values of the characters in `range`.
    pub fn digits(&self, range: Range<usize>) -> Vec<u32> {
        range.map(|i| self.digit(i)).collect()
    }

    /// The characters in `range` read as one decimal number.
    pub fn number(&self, range: Range<usize>) -> u64 {
        range.fold(0, |acc, i| acc * 10 + u64::from(self.digit(i)))
    }

    /// The characters in `range` as an owned string (clamped to the body).
    pub fn substring(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        self.chars[start..end].iter().collect()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        let mut chars = self.chars.iter();
        prefix.chars().all(|p| chars.next() == Some(&p))
    }

    /// The last character, or `'\0'` for an empty body.
    pub fn last(&self) -> char {
        self.chars.last().copied().unwrap_or('\0')
    }

    /// True when every character is the same (e.g. `11111111111`).
    pub fn is_repeated_char(&self) -> bool {
        self.chars.windows(2).all(|w| w[0] == w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let body = TinBody::new("12345678Z");
        assert_eq!(body.len(), 9);
        assert_eq!(body.digit(0), 1);
        assert_eq!(body.digit(8), 0);
        assert_eq!(body.char_at(8), 'Z');
        assert_eq!(body.number(0..8), 12_345_678);
        assert_eq!(body.digits(2..5), vec![3, 4, 5]);
        assert_eq!(body.substring(4..20), "5678Z");
        assert_eq!(body.last(), 'Z');
    }

    #[test]
    fn out_of_range_reads_do_not_panic() {
        let body = TinBody::new("12");
        assert_eq!(body.digit(10), 0);
        assert_eq!(body.char_at(10), '\0');
        assert_eq!(body.number(0..5), 12_000);
        assert_eq!(body.substring(5..9), "");
    }

    #[test]
    fn multibyte_offsets_are_characters() {
        let body = TinBody::new("PEÑA681231");
        assert_eq!(body.len(), 10);
        assert_eq!(body.char_at(2), 'Ñ');
        assert_eq!(body.number(4..10), 681_231);
    }

    #[test]
    fn reads_are_uppercased() {
        let body = TinBody::new("x1234567l");
        assert_eq!(body.char_at(0), 'X');
        assert_eq!(body.last(), 'L');
        assert!(body.starts_with("X12"));
        assert_eq!(body.as_str(), "x1234567l");
    }

    #[test]
    fn repeated_characters() {
        assert!(TinBody::new("1111").is_repeated_char());
        assert!(!TinBody::new("1112").is_repeated_char());
    }
}
