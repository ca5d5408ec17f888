//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Integer Money
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog price 250.0  ──►  Money(25000)   (hundredths)                  │
//! │                                                                         │
//! │  Cart line:   Money(25000) × 5      = Money(125000)                     │
//! │  Cart total:  Σ line totals         = Money(125000)                     │
//! │                                                                         │
//! │  Shown as:    to_fixed(1) "1250.0"  to_fixed(2) "1250.00"               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All arithmetic stays in `i64` hundredths; only formatting produces
//! decimal text.
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//!
//! let price = Money::from_major_minor(250, 0);
//! let line = price.multiply_quantity(5);
//! assert_eq!(line.to_fixed(2), "1250.00");
//! assert_eq!(price.to_fixed(1), "250.0");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Number of decimal digits held by the minor unit.
pub const MINOR_DIGITS: u32 = 2;

const MINOR_PER_MAJOR: i64 = 10_i64.pow(MINOR_DIGITS);

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in hundredths of the currency unit.
///
/// ## Where Money is Used
/// ```text
/// Item.unit_price ──► CartLine.unit_price ──► CartLine.line_total
///                                                   │
///                              Cart.total ◄─────────┤
///                              Order.total ◄────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from hundredths (the smallest unit).
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let price = Money::from_cents(39900); // 399.00
    /// assert_eq!(price.cents(), 39900);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * MINOR_PER_MAJOR - minor)
        } else {
            Money(major * MINOR_PER_MAJOR + minor)
        }
    }

    /// Returns the value in hundredths.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(15000); // 150.00
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 45000); // 450.00
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u64) -> Self {
        let qty = i64::try_from(qty).unwrap_or(i64::MAX);
        Money(self.0.saturating_mul(qty))
    }

    /// Formats the value with `places` decimals, rounding half away from zero.
    ///
    /// `places` is capped at [`MINOR_DIGITS`].
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1049).to_fixed(1), "10.5");
    /// assert_eq!(Money::from_cents(1099).to_fixed(1), "11.0");
    /// assert_eq!(Money::from_cents(-550).to_fixed(2), "-5.50");
    /// assert_eq!(Money::from_cents(1099).to_fixed(0), "11");
    /// ```
    pub fn to_fixed(&self, places: u32) -> String {
        let places = places.min(MINOR_DIGITS);
        let divisor = 10_u64.pow(MINOR_DIGITS - places);
        let scale = 10_u64.pow(places);

        let rounded = (self.0.unsigned_abs() + divisor / 2) / divisor;
        let sign = if self.0 < 0 && rounded != 0 { "-" } else { "" };
        let whole = rounded / scale;

        if places == 0 {
            format!("{sign}{whole}")
        } else {
            let frac = rounded % scale;
            format!("{sign}{whole}.{frac:0width$}", width = places as usize)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with two decimals and no currency symbol ("1250.00").
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_fixed(MINOR_DIGITS))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(250, 0).cents(), 25000);
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(125000)), "1250.00");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::zero()), "0.00");
        assert_eq!(format!("{:>8}", Money::from_cents(500)), "    5.00");
    }

    #[test]
    fn test_to_fixed_one_decimal() {
        assert_eq!(Money::from_cents(25000).to_fixed(1), "250.0");
        assert_eq!(Money::from_cents(39900).to_fixed(1), "399.0");
        assert_eq!(Money::from_cents(1045).to_fixed(1), "10.5");
        assert_eq!(Money::from_cents(1044).to_fixed(1), "10.4");
        assert_eq!(Money::from_cents(0).to_fixed(1), "0.0");
    }

    #[test]
    fn test_to_fixed_small_negative_has_no_sign() {
        assert_eq!(Money::from_cents(-4).to_fixed(1), "0.0");
        assert_eq!(Money::from_cents(-5).to_fixed(1), "-0.1");
    }

    #[test]
    fn test_to_fixed_caps_places() {
        assert_eq!(Money::from_cents(1099).to_fixed(5), "10.99");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        let price = Money::from_cents(39900);
        assert_eq!(price.multiply_quantity(2).cents(), 79800);
        assert_eq!(price.multiply_quantity(u64::MAX).cents(), i64::MAX);
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::default().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_cents(-1).is_negative());
    }
}
