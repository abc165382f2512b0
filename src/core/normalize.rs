//! TIN body normalization.

/// Strip every character that is not a Unicode alphanumeric, then uppercase.
///
/// This is the default normalization applied to TIN bodies; handlers may
/// layer a country-specific step on top (see [`CountryHandler::normalize`]).
///
/// [`CountryHandler::normalize`]: super::CountryHandler::normalize
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Like [`normalize`], but keeps the extra characters listed in `keep`.
pub fn normalize_keeping(raw: &str, keep: &[char]) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || keep.contains(c))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Uppercase and trim a country code. Non-alphanumerics are not stripped.
pub fn normalize_country(code: &str) -> String {
    code.trim().to_uppercase()
}
