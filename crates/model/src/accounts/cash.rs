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

//! A cash account with immediate per-fill settlement.

use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    accounts::{Account, base::BaseAccount},
    enums::{AccountType, LiquiditySide, OrderSide},
    events::{AccountState, OrderFilled},
    identifiers::AccountId,
    instruments::{Instrument, InstrumentAny},
    position::Position,
    types::{AccountBalance, Currency, Money, Price, Quantity},
};

/// Represents a cash account: balances move on every fill, no leverage, no margin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CashAccount {
    pub base: BaseAccount,
}

impl CashAccount {
    /// Creates a new [`CashAccount`] from its first account state event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not a valid initial cash account state.
    pub fn new_checked(event: AccountState) -> anyhow::Result<Self> {
        anyhow::ensure!(
            event.account_type == AccountType::Cash,
            "account type {} is not valid for a cash account",
            event.account_type,
        );
        Ok(Self {
            base: BaseAccount::new_checked(event)?,
        })
    }

    /// Creates a new [`CashAccount`] from its first account state event.
    ///
    /// # Panics
    ///
    /// Panics on an invalid event, see [`Self::new_checked`].
    #[must_use]
    pub fn new(event: AccountState) -> Self {
        Self::new_checked(event).expect("valid initial cash account state")
    }
}

impl Account for CashAccount {
    fn id(&self) -> AccountId {
        self.base.id
    }

    fn account_type(&self) -> AccountType {
        self.base.account_type
    }

    fn base_currency(&self) -> Option<Currency> {
        self.base.base_currency
    }

    fn balance(&self, currency: Option<Currency>) -> Option<AccountBalance> {
        self.base.base_balance(currency)
    }

    fn balance_total(&self, currency: Option<Currency>) -> Option<Money> {
        self.base.base_balance_total(currency)
    }

    fn balance_free(&self, currency: Option<Currency>) -> Option<Money> {
        self.base.base_balance_free(currency)
    }

    fn balance_locked(&self, currency: Option<Currency>) -> Option<Money> {
        self.base.base_balance_locked(currency)
    }

    fn balances(&self) -> AHashMap<Currency, AccountBalance> {
        self.base.balances.clone()
    }

    fn balances_total(&self) -> AHashMap<Currency, Money> {
        self.base.base_balances_total()
    }

    fn balances_free(&self) -> AHashMap<Currency, Money> {
        self.base.base_balances_free()
    }

    fn balances_locked(&self) -> AHashMap<Currency, Money> {
        self.base.base_balances_locked()
    }

    fn starting_balances(&self) -> AHashMap<Currency, Money> {
        self.base.balances_starting.clone()
    }

    fn currencies(&self) -> Vec<Currency> {
        self.base.balances.keys().copied().collect()
    }

    fn events(&self) -> Vec<AccountState> {
        self.base.events.clone()
    }

    fn last_event(&self) -> Option<AccountState> {
        self.base.events.last().cloned()
    }

    fn event_count(&self) -> usize {
        self.base.events.len()
    }

    fn commission(&self, currency: Option<Currency>) -> Option<Money> {
        self.base.base_commission(currency)
    }

    fn commissions(&self) -> AHashMap<Currency, Money> {
        self.base.commissions.clone()
    }

    fn apply(&mut self, event: AccountState) -> anyhow::Result<()> {
        self.base.base_apply(event)
    }

    fn update_commissions(&mut self, commission: Money) {
        self.base.base_update_commissions(commission);
    }

    fn calculate_commission(
        &self,
        instrument: &InstrumentAny,
        last_qty: Quantity,
        last_px: Price,
        liquidity_side: LiquiditySide,
        use_quote_for_inverse: Option<bool>,
    ) -> anyhow::Result<Money> {
        self.base.base_calculate_commission(
            instrument,
            last_qty,
            last_px,
            liquidity_side,
            use_quote_for_inverse,
        )
    }

    /// Models immediate cash settlement: a BUY credits the base currency by the
    /// filled quantity and debits the quote currency by the filled notional, a
    /// SELL mirrors the signs. The base leg is omitted when the instrument has no
    /// base currency (equities).
    ///
    /// # Errors
    ///
    /// Returns an error if the fill has no order side.
    fn calculate_pnls(
        &self,
        instrument: &InstrumentAny,
        fill: &OrderFilled,
        _position: Option<&Position>,
    ) -> anyhow::Result<Vec<Money>> {
        let mut pnls = Vec::with_capacity(2);
        let quantity = fill.last_qty.as_decimal();
        let notional = fill.last_qty.as_decimal() * fill.last_px.as_decimal();
        match fill.order_side {
            OrderSide::Buy => {
                if let Some(base_currency) = instrument.base_currency() {
                    pnls.push(Money::from_decimal(quantity, base_currency));
                }
                pnls.push(Money::from_decimal(-notional, instrument.quote_currency()));
            }
            OrderSide::Sell => {
                if let Some(base_currency) = instrument.base_currency() {
                    pnls.push(Money::from_decimal(-quantity, base_currency));
                }
                pnls.push(Money::from_decimal(notional, instrument.quote_currency()));
            }
            OrderSide::NoOrderSide => {
                anyhow::bail!("invalid order side for PnL calculation: {}", fill.order_side)
            }
        }
        Ok(pnls)
    }
}

impl Deref for CashAccount {
    type Target = BaseAccount;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for CashAccount {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl Display for CashAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(id={}, base_currency={})",
            stringify!(CashAccount),
            self.base.id,
            self.base
                .base_currency
                .map_or_else(|| "None".to_string(), |c| c.code.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{
        accounts::stubs::*,
        events::account::stubs::*,
        instruments::{CryptoPerpetual, CurrencyPair, Equity, stubs::*},
    };

    fn fill(side: OrderSide, qty: &str, px: &str, instrument: &InstrumentAny) -> OrderFilled {
        OrderFilled {
            instrument_id: instrument.id(),
            order_side: side,
            last_qty: Quantity::from(qty),
            last_px: Price::from(px),
            liquidity_side: LiquiditySide::Taker,
            ts_event: 0,
        }
    }

    #[rstest]
    fn creation_rejects_margin_event(margin_account_state: AccountState) {
        assert!(CashAccount::new_checked(margin_account_state).is_err());
    }

    #[rstest]
    fn queries_default_to_base_currency(cash_account: CashAccount) {
        assert_eq!(
            cash_account.balance_total(None),
            Some(Money::from("1525000 USD")),
        );
        assert_eq!(
            cash_account.balance_free(None),
            Some(Money::from("1500000 USD")),
        );
        assert_eq!(
            cash_account.balance_locked(None),
            Some(Money::from("25000 USD")),
        );
    }

    #[rstest]
    #[should_panic]
    fn multi_currency_query_without_currency_panics(cash_account_multi: CashAccount) {
        let _ = cash_account_multi.balance(None);
    }

    #[rstest]
    fn buy_fill_produces_two_legs(cash_account_multi: CashAccount, currency_pair_btcusdt: CurrencyPair) {
        let instrument = currency_pair_btcusdt.into_any();
        let fill = fill(OrderSide::Buy, "0.5", "45500.00", &instrument);
        let pnls = cash_account_multi
            .calculate_pnls(&instrument, &fill, None)
            .unwrap();
        assert_eq!(
            pnls,
            vec![Money::from("0.5 BTC"), Money::from("-22750 USDT")],
        );
    }

    #[rstest]
    fn sell_fill_mirrors_signs(cash_account_multi: CashAccount, currency_pair_btcusdt: CurrencyPair) {
        let instrument = currency_pair_btcusdt.into_any();
        let fill = fill(OrderSide::Sell, "0.5", "45500.00", &instrument);
        let pnls = cash_account_multi
            .calculate_pnls(&instrument, &fill, None)
            .unwrap();
        assert_eq!(
            pnls,
            vec![Money::from("-0.5 BTC"), Money::from("22750 USDT")],
        );
    }

    #[rstest]
    fn fill_without_base_currency_produces_quote_leg_only(
        cash_account: CashAccount,
        equity_aapl: Equity,
    ) {
        let instrument = equity_aapl.into_any();
        let buy = fill(OrderSide::Buy, "100", "190.50", &instrument);
        let pnls = cash_account.calculate_pnls(&instrument, &buy, None).unwrap();
        assert_eq!(pnls, vec![Money::from("-19050 USD")]);

        let sell = fill(OrderSide::Sell, "100", "190.50", &instrument);
        let pnls = cash_account.calculate_pnls(&instrument, &sell, None).unwrap();
        assert_eq!(pnls, vec![Money::from("19050 USD")]);
    }

    #[rstest]
    fn commission_maker_taker(cash_account_multi: CashAccount, currency_pair_btcusdt: CurrencyPair) {
        let instrument = currency_pair_btcusdt.into_any();
        let taker = cash_account_multi
            .calculate_commission(
                &instrument,
                Quantity::from("0.5"),
                Price::from("45500.00"),
                LiquiditySide::Taker,
                None,
            )
            .unwrap();
        // 0.5 * 45500 * 0.001
        assert_eq!(taker, Money::from("22.75 USDT"));
    }

    #[rstest]
    fn commission_rejects_no_liquidity_side(cash_account: CashAccount, audusd_sim: CurrencyPair) {
        let result = cash_account.calculate_commission(
            &audusd_sim.into_any(),
            Quantity::from("100000"),
            Price::from("0.80000"),
            LiquiditySide::NoLiquiditySide,
            None,
        );
        assert!(result.is_err());
    }

    #[rstest]
    fn commission_inverse_settles_in_base(
        cash_account: CashAccount,
        crypto_perpetual_btcusd: CryptoPerpetual,
    ) {
        let instrument = crypto_perpetual_btcusd.into_any();
        let commission = cash_account
            .calculate_commission(
                &instrument,
                Quantity::from("100000"),
                Price::from("10000"),
                LiquiditySide::Taker,
                None,
            )
            .unwrap();
        // notional 10 BTC * 0.00075
        assert_eq!(commission, Money::from("0.0075 BTC"));

        let as_quote = cash_account
            .calculate_commission(
                &instrument,
                Quantity::from("100000"),
                Price::from("10000"),
                LiquiditySide::Taker,
                Some(true),
            )
            .unwrap();
        assert_eq!(as_quote, Money::from("75 USD"));
    }

    #[rstest]
    fn maker_rebate_is_negative(
        cash_account: CashAccount,
        crypto_perpetual_btcusd: CryptoPerpetual,
    ) {
        let instrument = crypto_perpetual_btcusd.into_any();
        let commission = cash_account
            .calculate_commission(
                &instrument,
                Quantity::from("100000"),
                Price::from("10000"),
                LiquiditySide::Maker,
                None,
            )
            .unwrap();
        // notional 10 BTC * -0.00025
        assert_eq!(commission, Money::from("-0.0025 BTC"));
    }
}
