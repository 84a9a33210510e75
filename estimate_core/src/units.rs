//! # Unit Types
//!
//! Newtype wrappers for the handful of units an estimate deals with.
//! They serialize as bare numbers so JSON stays clean.
//!
//! - Length: meters (m)
//! - Volume: cubic meters (m³)
//! - Money: an amount in the display currency (₹ by default)
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::units::{Amount, Meters};
//!
//! let volume = Meters(20.0) * Meters(15.0) * Meters(3.0);
//! assert_eq!(volume.0, 900.0);
//!
//! assert_eq!(Amount(538650.0).to_string(), "₹538,650");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

// ============================================================================
// Length / Volume
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl Mul for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

impl Mul<Meters> for SquareMeters {
    type Output = CubicMeters;
    fn mul(self, rhs: Meters) -> CubicMeters {
        CubicMeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Money
// ============================================================================

/// Currency symbol used when rendering amounts
pub const CURRENCY_SYMBOL: &str = "₹";

/// A money amount in the display currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(pub f64);

impl Amount {
    /// Amount in thousands, rounded to the nearest whole thousand (e.g. `₹145K`)
    pub fn thousands_label(self) -> String {
        format!("{}{:.0}K", CURRENCY_SYMBOL, self.0 / 1000.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CURRENCY_SYMBOL, group_thousands(self.0))
    }
}

/// Format a number with comma thousands separators and at most two decimals.
///
/// Trailing fractional zeros are dropped, so whole amounts print without a
/// decimal point.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = (value.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if cents > 0 {
        let frac = format!("{:02}", cents);
        grouped.push('.');
        grouped.push_str(frac.trim_end_matches('0'));
    }

    if value < 0.0 && (whole > 0 || cents > 0) {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(CubicMeters);
impl_arithmetic!(Amount);

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        Amount(iter.map(|a| a.0).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_from_lengths() {
        let volume = Meters(50.0) * Meters(0.23) * Meters(2.0);
        assert!((volume.0 - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(538650.0), "538,650");
        assert_eq!(group_thousands(1234567.5), "1,234,567.5");
        assert_eq!(group_thousands(12.346), "12.35");
        assert_eq!(group_thousands(-2500.0), "-2,500");
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount(145000.0).to_string(), "₹145,000");
        assert_eq!(Amount(213000.0).thousands_label(), "₹213K");
    }

    #[test]
    fn test_amount_sum() {
        let total: Amount = [Amount(1.5), Amount(2.5), Amount(6.0)].into_iter().sum();
        assert_eq!(total, Amount(10.0));
    }

    #[test]
    fn test_serialization() {
        let m = Meters(12.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
