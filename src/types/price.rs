//! Fixed-point conversion helpers.
//!
//! The book compares prices and quantities as raw `u64` values and never
//! interprets them. These helpers exist for callers that want to feed decimal
//! strings in and print human-readable values out, using a scale of 10^8.
//!
//! ```
//! use limit_book::types::price::{from_fixed, to_fixed};
//!
//! let price = to_fixed("101.25").unwrap();
//! assert_eq!(price, 10_125_000_000);
//! assert_eq!(from_fixed(price), "101.25");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point values: 10^8
pub const SCALE: u64 = 100_000_000;

/// Parse a decimal string into fixed-point.
///
/// Returns `None` for malformed, negative, or out-of-range input. Digits beyond
/// the eighth decimal place are rounded.
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a `Decimal` into fixed-point, rejecting negatives and overflow.
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() {
        return None;
    }
    d.checked_mul(Decimal::from(SCALE))?.round_dp(0).to_u64()
}

pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Render a fixed-point value without trailing zeros.
pub fn from_fixed(value: u64) -> String {
    fixed_to_decimal(value).normalize().to_string()
}
