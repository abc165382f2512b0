use regex::Regex;
use serde::Serialize;

use super::body::TinBody;
use super::date::Context;
use super::error::{Stage, TinError};
use super::mask;
use super::normalize::normalize;

/// Metadata for one legal TIN scheme recognised by a country handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TinType {
    /// Short identifier (e.g. "CPF", "NIE").
    pub code: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Optional free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl TinType {
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self {
            code,
            name,
            description: None,
        }
    }

    pub const fn described(
        code: &'static str,
        name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            description: Some(description),
        }
    }
}

/// The four-stage validation contract implemented once per country.
///
/// Handlers provide the stage predicates and their metadata; the pipeline
/// itself ([`validate`](Self::validate)) is provided and not meant to be
/// overridden. Stages run in a fixed order and the first failure wins.
pub trait CountryHandler: Send + Sync {
    /// Canonical country code (e.g. "UK", never the "GB" alias).
    fn country_code(&self) -> &'static str;

    /// Schemes recognised by this handler, in index order (index 1 first).
    fn tin_types(&self) -> &'static [TinType];

    /// Display masks, primary first. Multi-scheme countries list one per shape.
    fn masks(&self) -> &'static [&'static str];

    /// Body normalization used by the facade. Defaults to [`normalize`].
    fn normalize(&self, raw: &str) -> String {
        normalize(raw)
    }

    fn has_valid_length(&self, tin: &str) -> bool;

    fn has_valid_pattern(&self, tin: &str) -> bool;

    /// Birth-date plausibility. Countries without an embedded date accept
    /// every body here.
    fn has_valid_date(&self, _tin: &TinBody<'_>, _ctx: &Context) -> bool {
        true
    }

    /// Checksum or structural rule.
    fn has_valid_rule(&self, tin: &TinBody<'_>, ctx: &Context) -> bool;

    /// Zero-based index into [`tin_types`](Self::tin_types) of the scheme a
    /// shape-checked body belongs to.
    ///
    /// Single-scheme countries keep the default. Multi-scheme countries
    /// re-run their per-scheme checks in priority order.
    fn scheme_of(&self, _tin: &TinBody<'_>, _ctx: &Context) -> Option<usize> {
        Some(0)
    }

    /// Run the pipeline against an already-normalized body.
    fn validate(&self, tin: &str, ctx: &Context) -> Result<(), TinError> {
        let country = self.country_code();
        if !self.has_valid_length(tin) {
            return Err(reject(country, Stage::Length, tin));
        }
        if !self.has_valid_pattern(tin) {
            return Err(reject(country, Stage::Pattern, tin));
        }
        let body = TinBody::new(tin);
        if !self.has_valid_date(&body, ctx) {
            return Err(reject(country, Stage::Date, tin));
        }
        if !self.has_valid_rule(&body, ctx) {
            return Err(reject(country, Stage::Rule, tin));
        }
        Ok(())
    }

    /// Which scheme `raw` matches, if any. Normalizes its input itself.
    fn identify_tin_type(&self, raw: &str, ctx: &Context) -> Option<TinType> {
        let tin = self.normalize(raw);
        if !self.has_valid_length(&tin) || !self.has_valid_pattern(&tin) {
            return None;
        }
        let body = TinBody::new(&tin);
        self.scheme_of(&body, ctx)
            .and_then(|idx| self.tin_types().get(idx).copied())
    }

    fn mask(&self) -> &'static str {
        self.masks().first().copied().unwrap_or_default()
    }

    /// The mask to format `tin` with: the first whose slot count equals the
    /// body length, else the primary mask.
    fn mask_for(&self, tin: &str) -> &'static str {
        let len = tin.chars().count();
        self.masks()
            .iter()
            .copied()
            .find(|m| mask::slot_count(m) == len)
            .unwrap_or_else(|| self.mask())
    }

    fn placeholder(&self) -> String {
        mask::placeholder(self.mask())
    }

    /// Normalize `raw` and lay it out along the matching mask.
    fn format_input(&self, raw: &str) -> String {
        let tin = self.normalize(raw);
        mask::apply_mask(self.mask_for(&tin), &tin)
    }
}

fn reject(country: &str, stage: Stage, tin: &str) -> TinError {
    #[cfg(feature = "tracing")]
    tracing::debug!(country, %stage, "TIN rejected");
    stage.error(country, tin)
}

/// Compile a handler pattern anchored to the whole body, case-insensitive.
pub(crate) fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("(?i)^(?:{pattern})$")).expect("static TIN pattern must compile")
}

/// Whether `tin` has one of `lengths` characters.
pub(crate) fn has_length(tin: &str, lengths: &[usize]) -> bool {
    lengths.contains(&tin.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use once_cell::sync::Lazy;

    /// Four digits whose sum is even; date stage rejects a leading 9.
    struct Toy;

    static TOY_PATTERN: Lazy<Regex> = Lazy::new(|| anchored(r"\d{4}"));

    const TOY_TYPES: &[TinType] = &[TinType::new("TOY", "Toy number")];

    impl CountryHandler for Toy {
        fn country_code(&self) -> &'static str {
            "XX"
        }
        fn tin_types(&self) -> &'static [TinType] {
            TOY_TYPES
        }
        fn masks(&self) -> &'static [&'static str] {
            &["99-99"]
        }
        fn has_valid_length(&self, tin: &str) -> bool {
            has_length(tin, &[4])
        }
        fn has_valid_pattern(&self, tin: &str) -> bool {
            TOY_PATTERN.is_match(tin)
        }
        fn has_valid_date(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
            tin.digit(0) != 9
        }
        fn has_valid_rule(&self, tin: &TinBody<'_>, _ctx: &Context) -> bool {
            tin.digits(0..4).iter().sum::<u32>() % 2 == 0
        }
    }

    fn ctx() -> Context {
        Context::at(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn stage_of(tin: &str) -> Option<Stage> {
        Toy.validate(tin, &ctx()).err().and_then(|e| e.stage())
    }

    #[test]
    fn pipeline_order() {
        assert_eq!(stage_of("1234"), None);
        assert_eq!(stage_of("1233"), Some(Stage::Rule));
        assert_eq!(stage_of("9111"), Some(Stage::Date));
        assert_eq!(stage_of("12A4"), Some(Stage::Pattern));
        // wrong length wins over wrong pattern
        assert_eq!(stage_of("12A"), Some(Stage::Length));
    }

    #[test]
    fn identify_renormalizes() {
        let ty = Toy.identify_tin_type("12-34", &ctx()).unwrap();
        assert_eq!(ty.code, "TOY");
        assert!(Toy.identify_tin_type("12-3", &ctx()).is_none());
    }

    #[test]
    fn formatting() {
        assert_eq!(Toy.format_input("1234"), "12-34");
        assert_eq!(Toy.placeholder(), "00-00");
    }

    #[test]
    fn anchored_is_case_insensitive_and_full() {
        let re = anchored(r"[A-Z]\d");
        assert!(re.is_match("a1"));
        assert!(!re.is_match("a12"));
        assert!(!re.is_match("xa1"));
    }
}
