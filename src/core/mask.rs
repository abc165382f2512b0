//! Display masks: `9` is a digit slot, `A`/`a` a letter slot, anything else
//! a literal separator.

use serde::Serialize;

/// Mask metadata for a country, as returned by [`mask_for_country`].
///
/// [`mask_for_country`]: crate::mask_for_country
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskInfo {
    /// The primary display mask (e.g. `"999.999.999-99"`).
    pub mask: &'static str,
    /// The mask with slots replaced by sample characters.
    pub placeholder: String,
    /// The canonical (alias-resolved) country code.
    pub country: &'static str,
}

fn is_slot(c: char) -> bool {
    matches!(c, '9' | 'A' | 'a')
}

/// Number of input slots in `mask`.
pub fn slot_count(mask: &str) -> usize {
    mask.chars().filter(|&c| is_slot(c)).count()
}

/// Placeholder text for `mask`: `9 → 0`, `A → X`, `a → x`, separators kept.
pub fn placeholder(mask: &str) -> String {
    mask.chars()
        .map(|c| match c {
            '9' => '0',
            'A' => 'X',
            'a' => 'x',
            other => other,
        })
        .collect()
}

/// Lay `body` out along `mask`.
///
/// Separators are emitted only while body characters remain, so a partial
/// input gets a partial mask. Characters beyond the last slot are appended
/// unchanged; formatting never drops input.
pub fn apply_mask(mask: &str, body: &str) -> String {
    let mut chars = body.chars().peekable();
    let mut out = String::with_capacity(mask.len().max(body.len()));

    for m in mask.chars() {
        if chars.peek().is_none() {
            break;
        }
        if is_slot(m) {
            if let Some(c) = chars.next() {
                out.push(c);
            }
        } else {
            out.push(m);
        }
    }
    out.extend(chars);
    out
}
