use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::date::Context;
use super::error::TinError;
use super::handler::{CountryHandler, TinType};
use super::mask;
use super::normalize::{normalize, normalize_country};
use super::registry::{index_types, resolve};

/// How the body of a slug is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Apply the country's normalization (strip separators, uppercase).
    #[default]
    Normalized,
    /// Use the raw text after the 2-character country prefix verbatim.
    Strict,
}

/// A slug split into country code and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTin {
    /// Uppercased country code as written (aliases not yet resolved).
    pub country: String,
    /// The TIN body.
    pub tin: String,
}

/// A Tax Identification Number bound to a country.
///
/// Holds only the slug (country code followed by the body). Every query
/// re-parses it, so a `Tin` is an immutable value with no cached state.
///
/// ```
/// use taxid::Tin;
///
/// let tin = Tin::new("es", "12345678-z");
/// assert!(tin.is_valid());
/// assert_eq!(tin.identify_tin_type().unwrap().unwrap().code, "DNI");
/// assert!(!Tin::new("ZZ", "1234").is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tin {
    slug: String,
}

impl Tin {
    /// Build a TIN from a country code and a raw body.
    ///
    /// The body is normalized with the country's rules (default rules when
    /// the country is unknown; that error surfaces on the first query).
    pub fn new(country: &str, tin: &str) -> Self {
        let country = normalize_country(country);
        let body = match resolve(&country) {
            Ok(handler) => handler.normalize(tin),
            Err(_) => normalize(tin),
        };
        Self {
            slug: format!("{country}{body}"),
        }
    }

    /// Build a TIN from a pre-concatenated slug such as `"BE00012511119"`.
    pub fn from_slug(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Split the slug at the 2-character country boundary.
    pub fn parse(&self, mode: ParseMode) -> Result<ParsedTin, TinError> {
        if self.slug.is_empty() {
            return Err(TinError::EmptySlug);
        }
        let split = self
            .slug
            .char_indices()
            .nth(2)
            .map_or(self.slug.len(), |(idx, _)| idx);
        let (country, raw) = self.slug.split_at(split);
        let country = normalize_country(country);
        let tin = match mode {
            ParseMode::Strict => raw.to_string(),
            ParseMode::Normalized => match resolve(&country) {
                Ok(handler) => handler.normalize(raw),
                Err(_) => normalize(raw),
            },
        };
        Ok(ParsedTin { country, tin })
    }

    fn handler(&self, mode: ParseMode) -> Result<(ParsedTin, &'static dyn CountryHandler), TinError> {
        let parsed = self.parse(mode)?;
        let handler = resolve(&parsed.country)?;
        Ok((parsed, handler))
    }

    /// Validate with normalized parsing against today's date.
    pub fn check(&self) -> Result<(), TinError> {
        self.check_with(ParseMode::Normalized, &Context::today())
    }

    /// Validate the slug body verbatim against today's date.
    pub fn check_strict(&self) -> Result<(), TinError> {
        self.check_with(ParseMode::Strict, &Context::today())
    }

    /// Validate with an explicit parse mode and reference date.
    pub fn check_with(&self, mode: ParseMode, ctx: &Context) -> Result<(), TinError> {
        let (parsed, handler) = self.handler(mode)?;
        handler.validate(&parsed.tin, ctx)
    }

    /// Like [`check`](Self::check), with any [`TinError`] mapped to `false`.
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    pub fn is_valid_strict(&self) -> bool {
        self.check_strict().is_ok()
    }

    pub fn is_valid_with(&self, mode: ParseMode, ctx: &Context) -> bool {
        self.check_with(mode, ctx).is_ok()
    }

    /// The scheme this TIN matches within its country, if any.
    pub fn identify_tin_type(&self) -> Result<Option<TinType>, TinError> {
        self.identify_tin_type_with(&Context::today())
    }

    pub fn identify_tin_type_with(&self, ctx: &Context) -> Result<Option<TinType>, TinError> {
        let (parsed, handler) = self.handler(ParseMode::Normalized)?;
        Ok(handler.identify_tin_type(&parsed.tin, ctx))
    }

    /// Scheme metadata of the resolved country, keyed by 1-based index.
    pub fn tin_types(&self) -> Result<BTreeMap<usize, TinType>, TinError> {
        let (_, handler) = self.handler(ParseMode::Normalized)?;
        Ok(index_types(handler.tin_types()))
    }

    /// The mask matching this TIN's shape (the primary mask otherwise).
    pub fn input_mask(&self) -> Result<&'static str, TinError> {
        let (parsed, handler) = self.handler(ParseMode::Normalized)?;
        Ok(handler.mask_for(&parsed.tin))
    }

    pub fn placeholder(&self) -> Result<String, TinError> {
        Ok(mask::placeholder(self.input_mask()?))
    }

    /// Format `raw` with the resolved country's mask.
    pub fn format_input(&self, raw: &str) -> Result<String, TinError> {
        let (_, handler) = self.handler(ParseMode::Normalized)?;
        Ok(handler.format_input(raw))
    }
}

impl fmt::Display for Tin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug)
    }
}
