use serde::Serialize;
use thiserror::Error;

/// Errors raised while parsing a TIN slug or running the validation pipeline.
///
/// The four stage variants are raised in pipeline order: a body that fails
/// the length stage never receives a pattern, date or rule verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TinError {
    /// The slug handed to the parser was empty.
    #[error("TIN slug is empty")]
    EmptySlug,

    /// No handler is registered for the (alias-resolved) country code.
    #[error("no TIN handler for country '{country}'")]
    InvalidCountry {
        /// The normalized country code that failed to resolve.
        country: String,
    },

    /// The body has none of the lengths accepted by the country.
    #[error("invalid length for {country} TIN '{tin}'")]
    InvalidLength { country: String, tin: String },

    /// The body does not match the country's structural pattern.
    #[error("invalid pattern for {country} TIN '{tin}'")]
    InvalidPattern { country: String, tin: String },

    /// The embedded birth date is not a real calendar date.
    #[error("invalid date in {country} TIN '{tin}'")]
    InvalidDate { country: String, tin: String },

    /// The checksum or structural rule rejected the body.
    #[error("invalid syntax for {country} TIN '{tin}'")]
    InvalidSyntax { country: String, tin: String },
}

/// One stage of the fixed validation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Stage {
    Length,
    Pattern,
    Date,
    Rule,
}

impl Stage {
    /// Build the error reported when this stage rejects `tin`.
    pub fn error(self, country: &str, tin: &str) -> TinError {
        let country = country.to_string();
        let tin = tin.to_string();
        match self {
            Self::Length => TinError::InvalidLength { country, tin },
            Self::Pattern => TinError::InvalidPattern { country, tin },
            Self::Date => TinError::InvalidDate { country, tin },
            Self::Rule => TinError::InvalidSyntax { country, tin },
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Length => "length",
            Self::Pattern => "pattern",
            Self::Date => "date",
            Self::Rule => "rule",
        };
        f.write_str(name)
    }
}

impl TinError {
    /// The pipeline stage that raised this error, if any.
    ///
    /// `EmptySlug` and `InvalidCountry` are raised before the pipeline runs.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::InvalidLength { .. } => Some(Stage::Length),
            Self::InvalidPattern { .. } => Some(Stage::Pattern),
            Self::InvalidDate { .. } => Some(Stage::Date),
            Self::InvalidSyntax { .. } => Some(Stage::Rule),
            Self::EmptySlug | Self::InvalidCountry { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_roundtrip() {
        for stage in [Stage::Length, Stage::Pattern, Stage::Date, Stage::Rule] {
            assert_eq!(stage.error("BE", "123").stage(), Some(stage));
        }
    }

    #[test]
    fn structural_errors_have_no_stage() {
        assert_eq!(TinError::EmptySlug.stage(), None);
        let err = TinError::InvalidCountry {
            country: "ZZ".into(),
        };
        assert_eq!(err.stage(), None);
    }

    #[test]
    fn display_names_country_and_tin() {
        let err = Stage::Rule.error("ES", "12345678A");
        assert_eq!(err.to_string(), "invalid syntax for ES TIN '12345678A'");
        assert_eq!(
            TinError::InvalidCountry {
                country: "ZZ".into()
            }
            .to_string(),
            "no TIN handler for country 'ZZ'"
        );
    }

    #[test]
    fn stages_are_ordered() {
        assert!(Stage::Length < Stage::Pattern);
        assert!(Stage::Pattern < Stage::Date);
        assert!(Stage::Date < Stage::Rule);
    }
}
