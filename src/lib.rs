//! # taxid
//!
//! Tax Identification Number (TIN) validation for 46 jurisdictions: the EU
//! member states plus the United Kingdom, and 18 major economies elsewhere.
//!
//! Every TIN runs through the same four-stage pipeline (length, pattern,
//! birth date, checksum rule) and the first failing stage decides the error.
//! Validation is offline and purely syntactic; a valid TIN is well-formed,
//! not necessarily issued.
//!
//! ## Quick Start
//!
//! ```rust
//! use taxid::{Tin, TinError, mask_for_country};
//!
//! let tin = Tin::new("BE", "00.01.25-111.19");
//! assert!(tin.is_valid());
//!
//! let err = Tin::new("BE", "00012511120").check().unwrap_err();
//! assert!(matches!(err, TinError::InvalidSyntax { .. }));
//!
//! let br = Tin::new("BR", "111.444.777-35");
//! assert_eq!(br.identify_tin_type().unwrap().unwrap().code, "CPF");
//! assert_eq!(br.format_input("11144477735").unwrap(), "111.444.777-35");
//!
//! assert_eq!(mask_for_country("gb").unwrap().country, "UK");
//! ```
//!
//! ## Reference date
//!
//! A few countries reject birth dates in the future. Checks that need "today"
//! take a [`Context`]; the plain entry points use the local date, and
//! [`Tin::check_with`] accepts a fixed one for reproducible results.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `eu` (default) | EU member states and the United Kingdom |
//! | `intl` (default) | AR, AU, BR, CA, CH, CN, ID, IN, JP, KR, MX, NG, RU, SA, TR, UA, US, ZA |
//! | `tracing` | `debug` events for rejected TINs, `trace` for alias rewrites |
//! | `all` | Everything |

pub mod core;
pub mod countries;

// Re-export core types at crate root for convenience
pub use crate::core::*;
