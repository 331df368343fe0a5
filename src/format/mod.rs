//! Presentation formatters, independent of any rendering backend.
//!
//! - [`units`]: byte counts to IEC sizes, chain heights to dates
//! - [`shorten`]: bounded labels and fixed-width addresses

pub mod shorten;
pub mod units;

pub use shorten::{shorten, shorten_address};
pub use units::{FormatError, bytes_to_human, cmp_decimal, height_to_date, parse_height};

/// Rendered in place of a value that could not be formatted.
pub const SENTINEL: &str = "—";
