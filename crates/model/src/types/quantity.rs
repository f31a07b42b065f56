// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2026 Meridian Markets Pty Ltd. All rights reserved.
//  https://meridianmarkets.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Represents a non-negative quantity with a specified decimal precision.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{Add, Sub},
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::FromPrimitive, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

/// Maximum precision (decimal places) a quantity can carry.
pub const QUANTITY_PRECISION_MAX: u8 = 9;

/// Represents a non-negative quantity (such as an order or position size) with a
/// specified decimal precision.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Quantity {
    /// The quantity value, rescaled to `precision` decimal places.
    pub value: Decimal,
    /// The decimal precision of the quantity.
    pub precision: u8,
}

impl Quantity {
    /// Creates a new [`Quantity`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is negative or not finite, or if `precision`
    /// exceeds [`QUANTITY_PRECISION_MAX`].
    pub fn new_checked(value: f64, precision: u8) -> anyhow::Result<Self> {
        anyhow::ensure!(value.is_finite(), "`value` was not finite, was {value}");
        anyhow::ensure!(value >= 0.0, "`value` was negative, was {value}");
        anyhow::ensure!(
            precision <= QUANTITY_PRECISION_MAX,
            "`precision` exceeded maximum {QUANTITY_PRECISION_MAX}, was {precision}"
        );
        let value = Decimal::from_f64(value)
            .ok_or_else(|| anyhow::anyhow!("`value` could not be represented as a decimal: {value}"))?;
        Self::from_decimal(value, precision)
    }

    /// Creates a new [`Quantity`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative, not finite, or `precision` is invalid.
    pub fn new(value: f64, precision: u8) -> Self {
        Self::new_checked(value, precision).expect("valid quantity value and precision")
    }

    /// Creates a new [`Quantity`] from a decimal, rescaling to `precision` decimal
    /// places (banker's rounding).
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is negative.
    pub fn from_decimal(value: Decimal, precision: u8) -> anyhow::Result<Self> {
        anyhow::ensure!(
            value >= Decimal::ZERO,
            "`value` was negative, was {value}"
        );
        Ok(Self {
            value: value.round_dp(u32::from(precision)),
            precision,
        })
    }

    #[must_use]
    pub fn zero(precision: u8) -> Self {
        Self {
            value: Decimal::ZERO,
            precision,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }

    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the value as an `f64` (presentation and interop only, lossy).
    ///
    /// # Panics
    ///
    /// Panics if the value cannot be represented as an `f64`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.value.to_f64().expect("quantity representable as f64")
    }
}

impl FromStr for Quantity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s)
            .map_err(|e| anyhow::anyhow!("Error parsing `Quantity` from '{s}': {e}"))?;
        let precision = u8::try_from(value.scale()).unwrap_or(QUANTITY_PRECISION_MAX);
        anyhow::ensure!(
            precision <= QUANTITY_PRECISION_MAX,
            "`precision` exceeded maximum {QUANTITY_PRECISION_MAX}, was {precision}"
        );
        Self::from_decimal(value, precision)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Self::from_str(value).expect("valid quantity string")
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Quantity {}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.value,
            precision: self.precision.max(rhs.precision),
        }
    }
}

impl Sub for Quantity {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the result would be negative.
    fn sub(self, rhs: Self) -> Self::Output {
        let value = self.value - rhs.value;
        assert!(
            value >= Decimal::ZERO,
            "quantity subtraction would be negative: {self} - {rhs}"
        );
        Self {
            value,
            precision: self.precision.max(rhs.precision),
        }
    }
}

impl Debug for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({self})", stringify!(Quantity))
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1$}", self.value, usize::from(self.precision))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    fn new_checked_rejects_negative() {
        assert!(Quantity::new_checked(-1.0, 0).is_err());
    }

    #[rstest]
    fn from_str_infers_precision() {
        let qty = Quantity::from("10.250");
        assert_eq!(qty.precision, 3);
        assert_eq!(qty.as_decimal(), dec!(10.250));
    }

    #[rstest]
    #[should_panic]
    fn sub_below_zero_panics() {
        let _ = Quantity::from("1") - Quantity::from("2");
    }

    #[rstest]
    fn zero_is_zero() {
        assert!(Quantity::zero(8).is_zero());
        assert!(!Quantity::from("0.00000001").is_zero());
    }
}
