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

//! Represents an amount of money in a specified currency denomination.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::FromPrimitive, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::types::Currency;

/// Represents an amount of money in a specified currency denomination.
///
/// Amounts are signed and rescaled to the currency precision at construction.
/// Arithmetic between different currencies fails fast: currency conversion is an
/// explicit, separate concern.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Money {
    /// The monetary amount, rescaled to the currency precision.
    pub amount: Decimal,
    /// The currency denomination.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is not finite.
    pub fn new_checked(amount: f64, currency: Currency) -> anyhow::Result<Self> {
        anyhow::ensure!(amount.is_finite(), "`amount` was not finite, was {amount}");
        let amount = Decimal::from_f64(amount).ok_or_else(|| {
            anyhow::anyhow!("`amount` could not be represented as a decimal: {amount}")
        })?;
        Ok(Self::from_decimal(amount, currency))
    }

    /// Creates a new [`Money`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is not finite.
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self::new_checked(amount, currency).expect("valid money amount")
    }

    /// Creates a new [`Money`] from a decimal, rescaling to the currency precision
    /// (banker's rounding).
    #[must_use]
    pub fn from_decimal(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(u32::from(currency.precision)),
            currency,
        }
    }

    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::from_decimal(Decimal::ZERO, currency)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        self.amount
    }

    /// Returns the amount as an `f64` (presentation and interop only, lossy).
    ///
    /// # Panics
    ///
    /// Panics if the amount cannot be represented as an `f64`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.amount.to_f64().expect("amount representable as f64")
    }

    fn assert_same_currency(&self, other: &Self, op: &str) {
        assert_eq!(
            self.currency, other.currency,
            "cannot {op} money in different currencies: {} vs {}",
            self.currency, other.currency,
        );
    }
}

impl FromStr for Money {
    type Err = anyhow::Error;

    /// Parses a string such as `"1525000 USD"` or `"-0.50 BTC"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, code) = s.rsplit_once(' ').ok_or_else(|| {
            anyhow::anyhow!("Error parsing `Money` from '{s}': expected '<amount> <currency>'")
        })?;
        let amount = Decimal::from_str(amount)
            .map_err(|e| anyhow::anyhow!("Error parsing `Money` amount from '{s}': {e}"))?;
        let currency = Currency::from_str(code)?;
        Ok(Self::from_decimal(amount, currency))
    }
}

impl From<&str> for Money {
    fn from(value: &str) -> Self {
        Self::from_str(value).expect("valid money string")
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount == other.amount
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        self.amount.partial_cmp(&other.amount)
    }
}

impl Add for Money {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the currencies differ.
    fn add(self, rhs: Self) -> Self::Output {
        self.assert_same_currency(&rhs, "add");
        Self::from_decimal(self.amount + rhs.amount, self.currency)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the currencies differ.
    fn sub(self, rhs: Self) -> Self::Output {
        self.assert_same_currency(&rhs, "subtract");
        Self::from_decimal(self.amount - rhs.amount, self.currency)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            amount: -self.amount,
            currency: self.currency,
        }
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({self})", stringify!(Money))
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.1$} {2}",
            self.amount,
            usize::from(self.currency.precision),
            self.currency.code,
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    fn parse_and_display_round_trip() {
        let money = Money::from("1525000 USD");
        assert_eq!(money.currency, Currency::USD());
        assert_eq!(money.as_decimal(), dec!(1525000));
        assert_eq!(money.to_string(), "1525000.00 USD");
    }

    #[rstest]
    fn rescales_to_currency_precision() {
        let money = Money::from_decimal(dec!(1.234567), Currency::USD());
        assert_eq!(money.as_decimal(), dec!(1.23));
    }

    #[rstest]
    fn arithmetic_same_currency() {
        let sum = Money::from("1.50 USD") + Money::from("2.25 USD");
        assert_eq!(sum, Money::from("3.75 USD"));
        assert_eq!(-Money::from("10 USD"), Money::from("-10 USD"));
    }

    #[rstest]
    #[should_panic]
    fn arithmetic_mixed_currency_panics() {
        let _ = Money::from("1 USD") + Money::from("1 BTC");
    }

    #[rstest]
    fn ordering_is_none_across_currencies() {
        let usd = Money::from("1 USD");
        let btc = Money::from("1 BTC");
        assert_eq!(usd.partial_cmp(&btc), None);
    }
}
