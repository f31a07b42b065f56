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

//! A per-currency account balance snapshot.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::types::{Currency, Money};

/// Represents an account balance in a single currency.
///
/// Invariant: `total = locked + free`, all three in the same currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// The currency of the balance.
    pub currency: Currency,
    /// The total amount held.
    pub total: Money,
    /// The amount reserved against working orders and margin.
    pub locked: Money,
    /// The amount available.
    pub free: Money,
}

impl AccountBalance {
    /// Creates a new [`AccountBalance`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the currencies differ or `total != locked + free`.
    pub fn new_checked(total: Money, locked: Money, free: Money) -> anyhow::Result<Self> {
        anyhow::ensure!(
            total.currency == locked.currency && total.currency == free.currency,
            "balance currencies were inconsistent: total={}, locked={}, free={}",
            total.currency,
            locked.currency,
            free.currency,
        );
        anyhow::ensure!(
            total == locked + free,
            "balance did not satisfy total = locked + free: total={total}, locked={locked}, free={free}"
        );
        Ok(Self {
            currency: total.currency,
            total,
            locked,
            free,
        })
    }

    /// Creates a new [`AccountBalance`] instance.
    ///
    /// # Panics
    ///
    /// Panics if the currencies differ or `total != locked + free`.
    pub fn new(total: Money, locked: Money, free: Money) -> Self {
        Self::new_checked(total, locked, free).expect("consistent account balance")
    }
}

impl Display for AccountBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(total={}, locked={}, free={})",
            stringify!(AccountBalance),
            self.total,
            self.locked,
            self.free,
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn new_checked_accepts_consistent_balance() {
        let balance = AccountBalance::new_checked(
            Money::from("1525000 USD"),
            Money::from("25000 USD"),
            Money::from("1500000 USD"),
        )
        .unwrap();
        assert_eq!(balance.currency, Currency::USD());
    }

    #[rstest]
    fn new_checked_rejects_total_mismatch() {
        let result = AccountBalance::new_checked(
            Money::from("100 USD"),
            Money::from("10 USD"),
            Money::from("80 USD"),
        );
        assert!(result.is_err());
    }

    #[rstest]
    fn new_checked_rejects_mixed_currencies() {
        let result = AccountBalance::new_checked(
            Money::from("100 USD"),
            Money::from("0 BTC"),
            Money::from("100 USD"),
        );
        assert!(result.is_err());
    }
}
