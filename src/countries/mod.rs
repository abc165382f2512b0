//! Per-country TIN handlers.
//!
//! Each handler is a unit struct implementing [`CountryHandler`]; the
//! registry holds one `'static` instance per country.
//!
//! [`CountryHandler`]: crate::CountryHandler

#[cfg(feature = "eu")]
pub mod eu;

#[cfg(feature = "intl")]
pub mod intl;
