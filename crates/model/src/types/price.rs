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

//! Represents a price in a market with a specified decimal precision.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{Add, Neg, Sub},
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::FromPrimitive, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

/// Maximum precision (decimal places) a price can carry.
pub const PRICE_PRECISION_MAX: u8 = 9;

/// Represents a price in a market with a specified decimal precision.
///
/// Prices are signed: negative values are valid (spreads, certain futures).
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Price {
    /// The price value, rescaled to `precision` decimal places.
    pub value: Decimal,
    /// The decimal precision of the price.
    pub precision: u8,
}

impl Price {
    /// Creates a new [`Price`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite or `precision` exceeds
    /// [`PRICE_PRECISION_MAX`].
    pub fn new_checked(value: f64, precision: u8) -> anyhow::Result<Self> {
        anyhow::ensure!(value.is_finite(), "`value` was not finite, was {value}");
        anyhow::ensure!(
            precision <= PRICE_PRECISION_MAX,
            "`precision` exceeded maximum {PRICE_PRECISION_MAX}, was {precision}"
        );
        let value = Decimal::from_f64(value)
            .ok_or_else(|| anyhow::anyhow!("`value` could not be represented as a decimal: {value}"))?;
        Ok(Self::from_decimal(value, precision))
    }

    /// Creates a new [`Price`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not finite or `precision` is invalid.
    pub fn new(value: f64, precision: u8) -> Self {
        Self::new_checked(value, precision).expect("valid price value and precision")
    }

    /// Creates a new [`Price`] from a decimal, rescaling to `precision` decimal places
    /// (banker's rounding).
    #[must_use]
    pub fn from_decimal(value: Decimal, precision: u8) -> Self {
        Self {
            value: value.round_dp(u32::from(precision)),
            precision,
        }
    }

    #[must_use]
    pub fn zero(precision: u8) -> Self {
        Self::from_decimal(Decimal::ZERO, precision)
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
        self.value.to_f64().expect("price representable as f64")
    }
}

impl FromStr for Price {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s)
            .map_err(|e| anyhow::anyhow!("Error parsing `Price` from '{s}': {e}"))?;
        let precision = u8::try_from(value.scale()).unwrap_or(PRICE_PRECISION_MAX);
        anyhow::ensure!(
            precision <= PRICE_PRECISION_MAX,
            "`precision` exceeded maximum {PRICE_PRECISION_MAX}, was {precision}"
        );
        Ok(Self { value, precision })
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Self::from_str(value).expect("valid price string")
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Price {}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_decimal(self.value + rhs.value, self.precision.max(rhs.precision))
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_decimal(self.value - rhs.value, self.precision.max(rhs.precision))
    }
}

impl Neg for Price {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            precision: self.precision,
        }
    }
}

impl Debug for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({self})", stringify!(Price))
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1$}", self.value, usize::from(self.precision))
    }
}
