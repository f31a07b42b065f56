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

//! A leveraged margin account with initial/maintenance margin tracking.

use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
};

use ahash::AHashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{
    accounts::{
        Account,
        base::{BaseAccount, info_decimal, info_money},
    },
    enums::{AccountType, LiquiditySide, PositionSide},
    events::{AccountState, OrderFilled},
    identifiers::{AccountId, InstrumentId},
    instruments::{Instrument, InstrumentAny},
    position::Position,
    types::{AccountBalance, Currency, Money, Price, Quantity},
};

/// Represents a margin account: positions are carried against collateral, PnL is
/// realized only on reducing fills.
///
/// Leverage is tracked per instrument, lazily defaulting to the account default
/// leverage on first margin calculation. Initial and maintenance margin totals
/// are tracked per currency with overwrite semantics: the portfolio pushes full
/// re-summed roll-ups, never deltas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarginAccount {
    pub base: BaseAccount,
    /// The leverage per instrument.
    pub leverages: AHashMap<InstrumentId, Decimal>,
    /// The leverage assumed for instruments with no explicit setting.
    pub default_leverage: Decimal,
    /// The current initial margin requirement, per currency.
    pub margins_init: AHashMap<Currency, Money>,
    /// The current maintenance margin requirement, per currency.
    pub margins_maint: AHashMap<Currency, Money>,
}

impl MarginAccount {
    /// Creates a new [`MarginAccount`] from its first account state event.
    ///
    /// The creating event's `info` payload may seed `"default_leverage"` (decimal,
    /// ignored with a warning if below 1), `"initial_margin"` and `"maint_margin"`
    /// (money strings such as `"5000.00 USD"`).
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not a valid initial margin account state.
    pub fn new_checked(event: AccountState) -> anyhow::Result<Self> {
        anyhow::ensure!(
            event.account_type == AccountType::Margin,
            "account type {} is not valid for a margin account",
            event.account_type,
        );

        let mut default_leverage = Decimal::ONE;
        if let Some(value) = event.info.get(&Ustr::from("default_leverage")) {
            match info_decimal(value) {
                Some(leverage) if leverage >= Decimal::ONE => default_leverage = leverage,
                _ => log::warn!(
                    "Ignoring invalid `default_leverage` {value} for account {}",
                    event.account_id,
                ),
            }
        }

        let mut margins_init = AHashMap::new();
        if let Some(margin) = event.info.get(&Ustr::from("initial_margin")).and_then(info_money) {
            margins_init.insert(margin.currency, margin);
        }
        let mut margins_maint = AHashMap::new();
        if let Some(margin) = event.info.get(&Ustr::from("maint_margin")).and_then(info_money) {
            margins_maint.insert(margin.currency, margin);
        }

        Ok(Self {
            base: BaseAccount::new_checked(event)?,
            leverages: AHashMap::new(),
            default_leverage,
            margins_init,
            margins_maint,
        })
    }

    /// Creates a new [`MarginAccount`] from its first account state event.
    ///
    /// # Panics
    ///
    /// Panics on an invalid event, see [`Self::new_checked`].
    #[must_use]
    pub fn new(event: AccountState) -> Self {
        Self::new_checked(event).expect("valid initial margin account state")
    }

    /// Returns the leverage set for the instrument, if any.
    #[must_use]
    pub fn leverage(&self, instrument_id: &InstrumentId) -> Option<Decimal> {
        self.leverages.get(instrument_id).copied()
    }

    /// Sets the leverage for the instrument, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if `leverage` is below 1.
    pub fn set_leverage(
        &mut self,
        instrument_id: InstrumentId,
        leverage: Decimal,
    ) -> anyhow::Result<()> {
        anyhow::ensure!(
            leverage >= Decimal::ONE,
            "leverage must be at least 1, was {leverage}",
        );
        self.leverages.insert(instrument_id, leverage);
        Ok(())
    }

    /// Returns the initial margin requirement for the given currency, defaulting
    /// to the account base currency, or `None` if none is recorded.
    ///
    /// # Panics
    ///
    /// Panics if `currency` is `None` and the account has no base currency.
    #[must_use]
    pub fn margin_init(&self, currency: Option<Currency>) -> Option<Money> {
        let currency = self.base.resolve_currency(currency);
        self.margins_init.get(&currency).copied()
    }

    /// Returns the maintenance margin requirement for the given currency,
    /// defaulting to the account base currency, or `None` if none is recorded.
    ///
    /// # Panics
    ///
    /// Panics if `currency` is `None` and the account has no base currency.
    #[must_use]
    pub fn margin_maint(&self, currency: Option<Currency>) -> Option<Money> {
        let currency = self.base.resolve_currency(currency);
        self.margins_maint.get(&currency).copied()
    }

    #[must_use]
    pub fn margins_init(&self) -> AHashMap<Currency, Money> {
        self.margins_init.clone()
    }

    #[must_use]
    pub fn margins_maint(&self) -> AHashMap<Currency, Money> {
        self.margins_maint.clone()
    }

    /// Overwrites the initial margin entry for the money's currency, latest wins.
    pub fn update_initial_margin(&mut self, margin: Money) {
        self.margins_init.insert(margin.currency, margin);
    }

    /// Overwrites the maintenance margin entry for the money's currency, latest
    /// wins.
    pub fn update_maint_margin(&mut self, margin: Money) {
        self.margins_maint.insert(margin.currency, margin);
    }

    /// Returns the leverage for the instrument, inserting the account default on
    /// first use.
    fn leverage_or_default(&mut self, instrument_id: InstrumentId) -> Decimal {
        *self
            .leverages
            .entry(instrument_id)
            .or_insert(self.default_leverage)
    }

    /// Calculates the initial margin required to open an order of `quantity` at
    /// `price`.
    ///
    /// The notional is divided by the instrument leverage, then charged at the
    /// instrument's initial margin rate plus a double taker-fee buffer covering
    /// both open and close.
    #[must_use]
    pub fn calculate_initial_margin(
        &mut self,
        instrument: &InstrumentAny,
        quantity: Quantity,
        price: Price,
        use_quote_for_inverse: Option<bool>,
    ) -> Money {
        let notional = instrument.calculate_notional_value(quantity, price, use_quote_for_inverse);
        let leverage = self.leverage_or_default(instrument.id());
        let adjusted_notional = notional.as_decimal() / leverage;
        let margin = adjusted_notional * instrument.margin_init()
            + adjusted_notional * instrument.taker_fee() * Decimal::TWO;
        Money::from_decimal(margin, notional.currency)
    }

    /// Calculates the maintenance margin required to carry a position of
    /// `quantity` marked at `last_price`.
    ///
    /// Same derivation as the initial margin but at the maintenance rate with a
    /// single taker-fee buffer, close only. The position side does not currently
    /// affect the requirement.
    #[must_use]
    pub fn calculate_maint_margin(
        &mut self,
        instrument: &InstrumentAny,
        _side: PositionSide,
        quantity: Quantity,
        last_price: Price,
        use_quote_for_inverse: Option<bool>,
    ) -> Money {
        let notional =
            instrument.calculate_notional_value(quantity, last_price, use_quote_for_inverse);
        let leverage = self.leverage_or_default(instrument.id());
        let adjusted_notional = notional.as_decimal() / leverage;
        let margin = adjusted_notional * instrument.margin_maint()
            + adjusted_notional * instrument.taker_fee();
        Money::from_decimal(margin, notional.currency)
    }
}

impl Account for MarginAccount {
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

    /// Margin accounts realize PnL only on reducing fills: a fill opposite the
    /// position's entry side returns the position's own PnL over the filled
    /// quantity, any other fill returns a single zero leg in the instrument's
    /// cost currency.
    fn calculate_pnls(
        &self,
        instrument: &InstrumentAny,
        fill: &OrderFilled,
        position: Option<&Position>,
    ) -> anyhow::Result<Vec<Money>> {
        if let Some(position) = position
            && position.entry != fill.order_side
        {
            let pnl = position.calculate_pnl(position.avg_px_open, fill.last_px, fill.last_qty);
            return Ok(vec![pnl]);
        }
        Ok(vec![Money::zero(instrument.cost_currency())])
    }
}

impl Deref for MarginAccount {
    type Target = BaseAccount;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for MarginAccount {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl Display for MarginAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(id={}, base_currency={}, default_leverage={})",
            stringify!(MarginAccount),
            self.base.id,
            self.base
                .base_currency
                .map_or_else(|| "None".to_string(), |c| c.code.to_string()),
            self.default_leverage,
        )
    }
}
