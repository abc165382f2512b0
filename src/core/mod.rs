//! Core TIN types, the validation pipeline, and the country registry.
//!
//! Country-specific rules live in [`crate::countries`]; everything here is
//! shared machinery: normalization, the [`CountryHandler`] contract,
//! checksum primitives, date helpers and display masks.

mod body;
pub mod checksum;
mod date;
mod error;
mod handler;
mod mask;
mod normalize;
mod registry;
mod tin;

pub use body::TinBody;
pub use date::{Context, baltic_century, is_valid_date, is_valid_in_any_century};
pub use error::{Stage, TinError};
pub use handler::{CountryHandler, TinType};
pub use mask::{MaskInfo, apply_mask, placeholder, slot_count};
pub use normalize::{normalize, normalize_country, normalize_keeping};
pub use registry::{
    canonical_country_code, is_country_supported, mask_for_country, resolve,
    supported_countries, tin_types_for_country,
};
pub use tin::{ParseMode, ParsedTin, Tin};

pub(crate) use handler::{anchored, has_length};
