//! Unit formatters for DataCap byte counts and chain heights.
//!
//! Byte counts arrive as decimal strings of unbounded length. Scaling is done
//! with long division over the decimal digits, never through `f64`, so a
//! 40-digit allowance formats exactly like a 4-digit one.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::ChainParams;

use super::SENTINEL;

// ============================================================================
// Constants
// ============================================================================

/// Binary prefixes, smallest first.
pub const IEC_UNITS: [&str; 9] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// Scaling factor between consecutive IEC units.
const IEC_BASE: u32 = 1024;

/// Decimal places kept after scaling (trailing zeros are trimmed).
pub const IEC_PRECISION: usize = 2;

/// Output format for [`height_to_date`], always UTC.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

// ============================================================================
// Errors
// ============================================================================

/// Error returned when a raw field is not a decimal integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The value contains something other than ASCII digits.
    #[error("'{0}' is not a non-negative integer")]
    InvalidNumber(String),
}

// ============================================================================
// Decimal Digit Arithmetic
// ============================================================================

/// Parses a decimal string into big-endian digits without leading zeros.
///
/// Zero is represented by an empty vector.
fn parse_digits(raw: &str) -> Result<Vec<u8>, FormatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::InvalidNumber(raw.to_string()));
    }
    Ok(trimmed
        .bytes()
        .map(|b| b - b'0')
        .skip_while(|&d| d == 0)
        .collect())
}

/// Long division by a small divisor, returning quotient digits and remainder.
fn div_small(digits: &[u8], divisor: u32) -> (Vec<u8>, u32) {
    let mut quotient = Vec::with_capacity(digits.len());
    let mut remainder = 0u32;
    for &digit in digits {
        let acc = remainder * 10 + u32::from(digit);
        let q = acc / divisor;
        remainder = acc % divisor;
        if !quotient.is_empty() || q != 0 {
            quotient.push(q as u8);
        }
    }
    (quotient, remainder)
}

/// Adds one in place, growing the number on carry out of the top digit.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

/// `value` as fixed-point digits with [`IEC_PRECISION`] implied decimals.
fn fixed_point(value: u32) -> Vec<u8> {
    let mut digits: Vec<u8> = value
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect();
    digits.extend(std::iter::repeat_n(0, IEC_PRECISION));
    digits
}

fn is_at_least(digits: &[u8], bound: u32) -> bool {
    if digits.len() > 10 {
        return true;
    }
    let value = digits
        .iter()
        .fold(0u64, |acc, &d| acc * 10 + u64::from(d));
    value >= u64::from(bound)
}

/// Renders fixed-point digits with `scale` implied decimals, trimming
/// trailing fractional zeros.
fn format_fixed(digits: &[u8], scale: usize) -> String {
    let mut text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    if text.len() <= scale {
        text = format!("{}{text}", "0".repeat(scale + 1 - text.len()));
    }
    let (int_part, frac_part) = text.split_at(text.len() - scale);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    }
}

/// Compares two decimal integer strings numerically.
///
/// # Errors
///
/// Returns [`FormatError::InvalidNumber`] if either side is not a decimal
/// integer.
pub fn cmp_decimal(a: &str, b: &str) -> Result<Ordering, FormatError> {
    let a = parse_digits(a)?;
    let b = parse_digits(b)?;
    Ok(a.len().cmp(&b.len()).then_with(|| a.cmp(&b)))
}

// ============================================================================
// Byte Counts
// ============================================================================

/// Converts a byte count to an IEC-prefixed string.
///
/// Picks the largest unit whose scaled value is at least one, rounds half-up
/// to [`IEC_PRECISION`] decimals and drops trailing zeros.
///
/// # Errors
///
/// Returns [`FormatError::InvalidNumber`] for empty or non-numeric input.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(bytes_to_human("0")?, "0 B");
/// assert_eq!(bytes_to_human("1536")?, "1.5 KiB");
/// assert_eq!(bytes_to_human("1073741824")?, "1 GiB");
/// ```
pub fn bytes_to_human(raw: &str) -> Result<String, FormatError> {
    let digits = parse_digits(raw)?;

    let mut exponent = 0;
    let mut magnitude = digits.clone();
    while exponent < IEC_UNITS.len() - 1 && is_at_least(&magnitude, IEC_BASE) {
        magnitude = div_small(&magnitude, IEC_BASE).0;
        exponent += 1;
    }

    // One guard digit beyond the kept precision for rounding.
    let mut scaled = digits;
    scaled.extend(std::iter::repeat_n(0, IEC_PRECISION + 1));
    for _ in 0..exponent {
        scaled = div_small(&scaled, IEC_BASE).0;
    }
    let (mut kept, guard) = div_small(&scaled, 10);
    if guard >= 5 {
        increment(&mut kept);
    }

    // 1023.995 KiB rounds to 1024 KiB, which reads as 1 MiB.
    if exponent < IEC_UNITS.len() - 1 && kept == fixed_point(IEC_BASE) {
        kept = fixed_point(1);
        exponent += 1;
    }

    Ok(format!(
        "{} {}",
        format_fixed(&kept, IEC_PRECISION),
        IEC_UNITS[exponent]
    ))
}

// ============================================================================
// Heights
// ============================================================================

/// Parses a raw chain height.
///
/// # Errors
///
/// Returns [`FormatError::InvalidNumber`] if the value is not a decimal
/// integer that fits in `u64`.
pub fn parse_height(raw: &str) -> Result<u64, FormatError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| FormatError::InvalidNumber(raw.to_string()))
}

/// Wall-clock time of a block height, `None` when out of chrono's range.
#[must_use]
pub fn height_to_datetime(height: u64, chain: ChainParams) -> Option<DateTime<Utc>> {
    let offset = height.checked_mul(chain.block_interval_secs)?;
    let offset = i64::try_from(offset).ok()?;
    let secs = chain.genesis_timestamp.checked_add(offset)?;
    DateTime::from_timestamp(secs, 0)
}

/// Formats the date of a block height as `YYYY-MM-DD HH:MM` (UTC).
///
/// Heights beyond the representable calendar render as the sentinel.
#[must_use]
pub fn height_to_date(height: u64, chain: ChainParams) -> String {
    height_to_datetime(height, chain)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| SENTINEL.to_string())
}

// ============================================================================
// Tests
// ============================================================================
