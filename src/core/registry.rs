//! Static country → handler registry.
//!
//! Built once on first use, sorted by country code, never mutated afterwards.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::error::TinError;
use super::handler::{CountryHandler, TinType};
use super::mask::{self, MaskInfo};
use super::normalize::normalize_country;

/// Alternative codes accepted wherever a country code is taken.
static ALIASES: &[(&str, &str)] = &[("EL", "GR"), ("GB", "UK")];

#[cfg(feature = "eu")]
static EU_HANDLERS: &[&dyn CountryHandler] = {
    use crate::countries::eu::*;
    &[
        &Austria,
        &Belgium,
        &Bulgaria,
        &Cyprus,
        &CzechRepublic,
        &Germany,
        &Denmark,
        &Estonia,
        &Spain,
        &Finland,
        &France,
        &Greece,
        &Croatia,
        &Hungary,
        &Ireland,
        &Italy,
        &Lithuania,
        &Luxembourg,
        &Latvia,
        &Malta,
        &Netherlands,
        &Poland,
        &Portugal,
        &Romania,
        &Sweden,
        &Slovenia,
        &Slovakia,
        &UnitedKingdom,
    ]
};

#[cfg(not(feature = "eu"))]
static EU_HANDLERS: &[&dyn CountryHandler] = &[];

#[cfg(feature = "intl")]
static INTL_HANDLERS: &[&dyn CountryHandler] = {
    use crate::countries::intl::*;
    &[
        &Argentina,
        &Australia,
        &Brazil,
        &Canada,
        &Switzerland,
        &China,
        &Indonesia,
        &India,
        &Japan,
        &SouthKorea,
        &Mexico,
        &Nigeria,
        &Russia,
        &SaudiArabia,
        &Turkey,
        &Ukraine,
        &UnitedStates,
        &SouthAfrica,
    ]
};

#[cfg(not(feature = "intl"))]
static INTL_HANDLERS: &[&dyn CountryHandler] = &[];

static REGISTRY: Lazy<Vec<&'static dyn CountryHandler>> = Lazy::new(|| {
    let mut handlers: Vec<&'static dyn CountryHandler> =
        EU_HANDLERS.iter().chain(INTL_HANDLERS).copied().collect();
    handlers.sort_by_key(|h| h.country_code());
    handlers
});

/// Uppercase `code` and rewrite aliases (`GB → UK`, `EL → GR`).
pub fn canonical_country_code(code: &str) -> String {
    let code = normalize_country(code);
    match ALIASES.iter().find(|(alias, _)| *alias == code) {
        Some((_alias, target)) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(alias = *_alias, canonical = *target, "country alias rewritten");
            (*target).to_string()
        }
        None => code,
    }
}

/// Look up the handler for `code` (case-insensitive, aliases honoured).
pub fn resolve(code: &str) -> Result<&'static dyn CountryHandler, TinError> {
    let canonical = canonical_country_code(code);
    REGISTRY
        .binary_search_by(|h| h.country_code().cmp(canonical.as_str()))
        .map(|idx| REGISTRY[idx])
        .map_err(|_| TinError::InvalidCountry { country: canonical })
}

/// Whether a handler exists for `code`.
pub fn is_country_supported(code: &str) -> bool {
    resolve(code).is_ok()
}

/// Canonical codes of every registered handler, sorted.
pub fn supported_countries() -> Vec<&'static str> {
    REGISTRY.iter().map(|h| h.country_code()).collect()
}

/// Primary mask and placeholder for `code`.
pub fn mask_for_country(code: &str) -> Result<MaskInfo, TinError> {
    let handler = resolve(code)?;
    Ok(MaskInfo {
        mask: handler.mask(),
        placeholder: mask::placeholder(handler.mask()),
        country: handler.country_code(),
    })
}

/// Scheme metadata for `code`, keyed by 1-based index.
pub fn tin_types_for_country(code: &str) -> Result<BTreeMap<usize, TinType>, TinError> {
    Ok(index_types(resolve(code)?.tin_types()))
}

pub(crate) fn index_types(types: &[TinType]) -> BTreeMap<usize, TinType> {
    types
        .iter()
        .enumerate()
        .map(|(i, ty)| (i + 1, *ty))
        .collect()
}
