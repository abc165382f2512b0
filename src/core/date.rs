//! Birth-date plausibility helpers and the injected reference date.

use chrono::{Datelike, Local, NaiveDate};

/// Per-call validation context.
///
/// Carries the reference date that "not born in the future" checks compare
/// against. Everything else in the pipeline is a pure function of the TIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    reference_date: NaiveDate,
}

impl Context {
    /// Context anchored at the local calendar date.
    pub fn today() -> Self {
        Self {
            reference_date: Local::now().date_naive(),
        }
    }

    /// Context anchored at a fixed date.
    pub fn at(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn current_year(&self) -> i32 {
        self.reference_date.year()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::today()
    }
}

/// Whether `year-month-day` is a real calendar date.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Whether a two-digit year resolves to a real date in any of `centuries`.
///
/// `centuries` holds base years such as `1900` or `2000`.
pub fn is_valid_in_any_century(yy: u32, month: u32, day: u32, centuries: &[i32]) -> bool {
    centuries
        .iter()
        .any(|&base| is_valid_date(base + yy as i32, month, day))
}

/// Base year for the Baltic personal-code century digit (`1`/`2` → 1800, …).
pub fn baltic_century(first_digit: u32) -> Option<i32> {
    match first_digit {
        1 | 2 => Some(1800),
        3 | 4 => Some(1900),
        5 | 6 => Some(2000),
        _ => None,
    }
}
