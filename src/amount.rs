//! Fixed-point amount type with 6 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so that every
//! amount written to the Parqet CSV carries exactly 6 fractional digits,
//! without floating-point rounding surprises.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A monetary amount that maintains exactly 6 decimal places.
///
/// This type wraps `rust_decimal::Decimal` and rescales on construction,
/// matching the fixed-point format of the Parqet cash CSV.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use mintos2parqet::Amount;
///
/// let amount = Amount::from_str("-12.5").unwrap();
/// assert_eq!(amount.to_string(), "-12.500000");
/// assert_eq!(amount.abs().to_string(), "12.500000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 6;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`, normalizing to 6 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Amount(normalized)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the absolute value, dropping any sign.
    pub fn abs(&self) -> Self {
        Amount(self.0.abs())
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.6}", self.0))
    }
}
