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

//! The event-sourced account hierarchy.
//!
//! Accounts are created once from their first [`AccountState`] event via
//! [`AccountAny::create`] and mutated only by [`Account::apply`], commission updates
//! and (for margin accounts) margin/leverage updates. The applied event log is
//! append-only; the per-currency balance projection is derived from it and can be
//! rebuilt by full replay ([`AccountAny::from_events`]).
//!
//! Balance, margin and commission queries return `None` when no entry is recorded
//! for a currency: callers must distinguish unknown from known-zero.

pub mod any;
pub mod base;
pub mod cash;
pub mod margin;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use any::AccountAny;
pub use base::BaseAccount;
pub use cash::CashAccount;
pub use margin::MarginAccount;

use ahash::AHashMap;
use enum_dispatch::enum_dispatch;

use crate::{
    enums::{AccountType, LiquiditySide},
    events::{AccountState, OrderFilled},
    identifiers::AccountId,
    instruments::InstrumentAny,
    position::Position,
    types::{AccountBalance, Currency, Money, Price, Quantity},
};

/// The capability set shared by all account implementations.
#[enum_dispatch]
pub trait Account {
    fn id(&self) -> AccountId;
    fn account_type(&self) -> AccountType;
    fn base_currency(&self) -> Option<Currency>;

    fn is_cash_account(&self) -> bool {
        self.account_type() == AccountType::Cash
    }

    fn is_margin_account(&self) -> bool {
        self.account_type() == AccountType::Margin
    }

    /// Returns the balance for the given currency, defaulting to the account base
    /// currency, or `None` if no entry is recorded.
    ///
    /// # Panics
    ///
    /// Panics if `currency` is `None` and the account has no base currency.
    fn balance(&self, currency: Option<Currency>) -> Option<AccountBalance>;
    fn balance_total(&self, currency: Option<Currency>) -> Option<Money>;
    fn balance_free(&self, currency: Option<Currency>) -> Option<Money>;
    fn balance_locked(&self, currency: Option<Currency>) -> Option<Money>;

    fn balances(&self) -> AHashMap<Currency, AccountBalance>;
    fn balances_total(&self) -> AHashMap<Currency, Money>;
    fn balances_free(&self) -> AHashMap<Currency, Money>;
    fn balances_locked(&self) -> AHashMap<Currency, Money>;
    fn starting_balances(&self) -> AHashMap<Currency, Money>;
    fn currencies(&self) -> Vec<Currency>;

    fn events(&self) -> Vec<AccountState>;
    fn last_event(&self) -> Option<AccountState>;
    fn event_count(&self) -> usize;

    /// Returns the cumulative commission for the given currency, defaulting to the
    /// account base currency, or `None` if none has been recorded.
    ///
    /// # Panics
    ///
    /// Panics if `currency` is `None` and the account has no base currency.
    fn commission(&self, currency: Option<Currency>) -> Option<Money>;
    fn commissions(&self) -> AHashMap<Currency, Money>;

    /// Applies an account state event, appending it to the event log and merging
    /// its balances into the projection (last write wins per currency).
    ///
    /// # Errors
    ///
    /// Returns an error if the event's account ID or base currency does not match,
    /// or if a single-currency account event does not contain exactly one balance
    /// in the base currency.
    fn apply(&mut self, event: AccountState) -> anyhow::Result<()>;

    /// Accumulates the given commission into the per-currency totals.
    /// Zero amounts are a no-op.
    fn update_commissions(&mut self, commission: Money);

    /// Calculates the commission for a fill of `last_qty` at `last_px`.
    ///
    /// # Errors
    ///
    /// Returns an error if `liquidity_side` is [`LiquiditySide::NoLiquiditySide`].
    fn calculate_commission(
        &self,
        instrument: &InstrumentAny,
        last_qty: Quantity,
        last_px: Price,
        liquidity_side: LiquiditySide,
        use_quote_for_inverse: Option<bool>,
    ) -> anyhow::Result<Money>;

    /// Calculates the PnL legs generated by the given fill.
    ///
    /// # Errors
    ///
    /// The base account contract has no PnL semantics: the default implementation
    /// always returns an unimplemented-operation error. Concrete account types
    /// override this.
    fn calculate_pnls(
        &self,
        instrument: &InstrumentAny,
        fill: &OrderFilled,
        position: Option<&Position>,
    ) -> anyhow::Result<Vec<Money>> {
        let _ = (instrument, fill, position);
        anyhow::bail!(
            "`calculate_pnls` is not implemented for the base account contract (account {})",
            self.id()
        )
    }
}
