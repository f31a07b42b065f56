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

//! The state and behavior common to all account types.

use ahash::AHashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    enums::{AccountType, LiquiditySide},
    events::AccountState,
    identifiers::AccountId,
    instruments::{Instrument, InstrumentAny},
    types::{AccountBalance, Currency, Money, Price, Quantity},
};

/// The event log and per-currency projections shared by every account type.
///
/// Concrete accounts embed this and delegate the common queries to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseAccount {
    /// The account ID.
    pub id: AccountId,
    /// The account type.
    pub account_type: AccountType,
    /// The base currency for a single-currency account, `None` for multi-currency.
    pub base_currency: Option<Currency>,
    /// The applied account state events, in application order.
    pub events: Vec<AccountState>,
    /// The balances recorded by the first applied event, per currency.
    pub balances_starting: AHashMap<Currency, Money>,
    /// The current balance projection, per currency.
    pub balances: AHashMap<Currency, AccountBalance>,
    /// Cumulative commissions, per currency.
    pub commissions: AHashMap<Currency, Money>,
}

impl BaseAccount {
    /// Creates a new [`BaseAccount`] from its first account state event.
    ///
    /// # Errors
    ///
    /// Returns an error if a single-currency event does not contain exactly one
    /// balance in the base currency.
    pub fn new_checked(event: AccountState) -> anyhow::Result<Self> {
        check_balances_shape(event.base_currency, &event.balances)?;
        let mut balances_starting = AHashMap::new();
        let mut balances = AHashMap::new();
        for balance in &event.balances {
            balances_starting.insert(balance.currency, balance.total);
            balances.insert(balance.currency, *balance);
        }
        Ok(Self {
            id: event.account_id,
            account_type: event.account_type,
            base_currency: event.base_currency,
            events: vec![event],
            balances_starting,
            balances,
            commissions: AHashMap::new(),
        })
    }

    /// Creates a new [`BaseAccount`] from its first account state event.
    ///
    /// # Panics
    ///
    /// Panics on an invalid event, see [`Self::new_checked`].
    #[must_use]
    pub fn new(event: AccountState) -> Self {
        Self::new_checked(event).expect("valid initial account state")
    }

    /// Resolves the query currency, defaulting to the account base currency.
    ///
    /// # Panics
    ///
    /// Panics if `currency` is `None` and the account has no base currency.
    #[must_use]
    pub fn resolve_currency(&self, currency: Option<Currency>) -> Currency {
        currency
            .or(self.base_currency)
            .expect("currency was `None` for a multi-currency account")
    }

    #[must_use]
    pub fn base_balance(&self, currency: Option<Currency>) -> Option<AccountBalance> {
        let currency = self.resolve_currency(currency);
        self.balances.get(&currency).copied()
    }

    #[must_use]
    pub fn base_balance_total(&self, currency: Option<Currency>) -> Option<Money> {
        self.base_balance(currency).map(|b| b.total)
    }

    #[must_use]
    pub fn base_balance_free(&self, currency: Option<Currency>) -> Option<Money> {
        self.base_balance(currency).map(|b| b.free)
    }

    #[must_use]
    pub fn base_balance_locked(&self, currency: Option<Currency>) -> Option<Money> {
        self.base_balance(currency).map(|b| b.locked)
    }

    #[must_use]
    pub fn base_balances_total(&self) -> AHashMap<Currency, Money> {
        self.balances.iter().map(|(c, b)| (*c, b.total)).collect()
    }

    #[must_use]
    pub fn base_balances_free(&self) -> AHashMap<Currency, Money> {
        self.balances.iter().map(|(c, b)| (*c, b.free)).collect()
    }

    #[must_use]
    pub fn base_balances_locked(&self) -> AHashMap<Currency, Money> {
        self.balances.iter().map(|(c, b)| (*c, b.locked)).collect()
    }

    #[must_use]
    pub fn base_commission(&self, currency: Option<Currency>) -> Option<Money> {
        let currency = self.resolve_currency(currency);
        self.commissions.get(&currency).copied()
    }

    /// Applies an account state event, appending to the log and merging balances
    /// into the projection, last write wins per currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the event targets a different account, changes the base
    /// currency, or violates the single-currency balance shape.
    pub fn base_apply(&mut self, event: AccountState) -> anyhow::Result<()> {
        anyhow::ensure!(
            event.account_id == self.id,
            "event account ID {} did not match account {}",
            event.account_id,
            self.id,
        );
        anyhow::ensure!(
            event.base_currency == self.base_currency,
            "event base currency did not match account {}",
            self.id,
        );
        check_balances_shape(self.base_currency, &event.balances)?;
        for balance in &event.balances {
            self.balances.insert(balance.currency, *balance);
        }
        self.events.push(event);
        Ok(())
    }

    /// Accumulates the commission into the per-currency totals, zero is a no-op.
    pub fn base_update_commissions(&mut self, commission: Money) {
        if commission.is_zero() {
            return;
        }
        self.commissions
            .entry(commission.currency)
            .and_modify(|total| *total += commission)
            .or_insert(commission);
    }

    /// Calculates the commission for a fill as `notional * fee rate` with the
    /// maker/taker rate selected by `liquidity_side`.
    ///
    /// Inverse instruments produce base-currency commission unless
    /// `use_quote_for_inverse` is set. Negative rates (rebates) yield negative
    /// commission.
    ///
    /// # Errors
    ///
    /// Returns an error if `liquidity_side` is [`LiquiditySide::NoLiquiditySide`].
    pub fn base_calculate_commission(
        &self,
        instrument: &InstrumentAny,
        last_qty: Quantity,
        last_px: Price,
        liquidity_side: LiquiditySide,
        use_quote_for_inverse: Option<bool>,
    ) -> anyhow::Result<Money> {
        anyhow::ensure!(
            liquidity_side != LiquiditySide::NoLiquiditySide,
            "invalid liquidity side for commission calculation: {liquidity_side}",
        );
        let notional = instrument
            .calculate_notional_value(last_qty, last_px, use_quote_for_inverse)
            .as_decimal();
        let rate = match liquidity_side {
            LiquiditySide::Maker => instrument.maker_fee(),
            LiquiditySide::Taker => instrument.taker_fee(),
            LiquiditySide::NoLiquiditySide => unreachable!(),
        };
        let commission = notional * rate;
        let currency = if instrument.is_inverse() && !use_quote_for_inverse.unwrap_or(false) {
            instrument.cost_currency()
        } else {
            instrument.quote_currency()
        };
        Ok(Money::from_decimal(commission, currency))
    }
}

/// A single-currency account event must carry exactly one balance, denominated in
/// the base currency.
pub(crate) fn check_balances_shape(
    base_currency: Option<Currency>,
    balances: &[AccountBalance],
) -> anyhow::Result<()> {
    anyhow::ensure!(!balances.is_empty(), "account event contained no balances");
    if let Some(base_currency) = base_currency {
        anyhow::ensure!(
            balances.len() == 1,
            "single-currency account event must contain exactly one balance, had {}",
            balances.len(),
        );
        anyhow::ensure!(
            balances[0].currency == base_currency,
            "event balance currency {} did not match base currency {}",
            balances[0].currency,
            base_currency,
        );
    }
    Ok(())
}

/// Parses a decimal from an `info` payload value, accepting strings and numbers.
pub(crate) fn info_decimal(value: &serde_json::Value) -> Option<Decimal> {
    use std::str::FromStr;

    use rust_decimal::prelude::FromPrimitive;

    match value {
        serde_json::Value::String(s) => Decimal::from_str(s).ok(),
        serde_json::Value::Number(n) => n.as_f64().and_then(Decimal::from_f64),
        _ => None,
    }
}

/// Parses a money string such as `"5000.00 USD"` from an `info` payload value.
pub(crate) fn info_money(value: &serde_json::Value) -> Option<Money> {
    use std::str::FromStr;

    value.as_str().and_then(|s| Money::from_str(s).ok())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::events::account::stubs::*;

    #[rstest]
    fn initial_event_seeds_projection(cash_account_state_multi: AccountState) {
        let account = BaseAccount::new(cash_account_state_multi);
        assert_eq!(account.events.len(), 1);
        assert_eq!(
            account.base_balance_total(Some(Currency::BTC())),
            Some(Money::from("10 BTC")),
        );
        assert_eq!(
            account.balances_starting.get(&Currency::ETH()),
            Some(&Money::from("20 ETH")),
        );
    }

    #[rstest]
    fn apply_merges_last_write_wins(
        cash_account_state_multi: AccountState,
        cash_account_state_multi_changed_btc: AccountState,
    ) {
        let mut account = BaseAccount::new(cash_account_state_multi);
        account
            .base_apply(cash_account_state_multi_changed_btc)
            .unwrap();

        assert_eq!(account.events.len(), 2);
        // BTC overwritten, ETH untouched
        assert_eq!(
            account.base_balance_total(Some(Currency::BTC())),
            Some(Money::from("9 BTC")),
        );
        assert_eq!(
            account.base_balance_locked(Some(Currency::BTC())),
            Some(Money::from("0.5 BTC")),
        );
        assert_eq!(
            account.base_balance_total(Some(Currency::ETH())),
            Some(Money::from("20 ETH")),
        );
        // starting balances never move
        assert_eq!(
            account.balances_starting.get(&Currency::BTC()),
            Some(&Money::from("10 BTC")),
        );
    }

    #[rstest]
    fn apply_rejects_foreign_account(
        cash_account_state: AccountState,
        cash_account_state_multi_changed_btc: AccountState,
    ) {
        let mut account = BaseAccount::new(cash_account_state);
        let result = account.base_apply(cash_account_state_multi_changed_btc);
        assert!(result.is_err());
        assert_eq!(account.events.len(), 1);
    }

    #[rstest]
    fn single_currency_shape_enforced(cash_account_state: AccountState) {
        let mut bad = cash_account_state.clone();
        bad.balances = vec![AccountBalance::new(
            Money::from("1 BTC"),
            Money::from("0 BTC"),
            Money::from("1 BTC"),
        )];
        let mut account = BaseAccount::new(cash_account_state);
        assert!(account.base_apply(bad).is_err());
    }

    #[rstest]
    fn unknown_currency_queries_return_none(cash_account_state: AccountState) {
        let account = BaseAccount::new(cash_account_state);
        assert_eq!(account.base_balance(Some(Currency::BTC())), None);
        assert_eq!(account.base_commission(Some(Currency::BTC())), None);
    }

    #[rstest]
    fn commissions_accumulate_and_zero_is_noop(cash_account_state: AccountState) {
        let mut account = BaseAccount::new(cash_account_state);
        account.base_update_commissions(Money::from("0 USD"));
        assert!(account.commissions.is_empty());

        account.base_update_commissions(Money::from("1.50 USD"));
        account.base_update_commissions(Money::from("2.50 USD"));
        account.base_update_commissions(Money::from("-0.75 USD"));
        assert_eq!(
            account.base_commission(Some(Currency::USD())),
            Some(Money::from("3.25 USD")),
        );
    }
}
