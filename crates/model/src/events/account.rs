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

//! An event recording the state of an account at the venue.

use std::fmt::Display;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use ustr::Ustr;
use uuid::Uuid;

use crate::{
    UnixNanos,
    enums::AccountType,
    identifiers::AccountId,
    types::{AccountBalance, Currency},
};

/// Represents an event which includes information on the state of the account.
///
/// Events are immutable and form an append-only, time-ordered log per account.
/// The `info` payload carries venue-specific auxiliary data; margin accounts read
/// `"default_leverage"`, `"initial_margin"` and `"maint_margin"` entries from the
/// creating event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountState {
    /// The account ID associated with the event.
    pub account_id: AccountId,
    /// The account type for the event.
    pub account_type: AccountType,
    /// The base currency for a single-currency account, `None` for multi-currency.
    pub base_currency: Option<Currency>,
    /// The per-currency balances, one entry per currency.
    pub balances: Vec<AccountBalance>,
    /// Auxiliary venue-specific key-value data.
    pub info: AHashMap<Ustr, serde_json::Value>,
    /// The unique identifier of the event.
    pub event_id: Uuid,
    /// UNIX timestamp (nanoseconds) when the event occurred.
    pub ts_event: UnixNanos,
    /// UNIX timestamp (nanoseconds) when the event was initialized locally.
    pub ts_init: UnixNanos,
}

impl AccountState {
    /// Creates a new [`AccountState`] instance.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        account_id: AccountId,
        account_type: AccountType,
        base_currency: Option<Currency>,
        balances: Vec<AccountBalance>,
        info: AHashMap<Ustr, serde_json::Value>,
        event_id: Uuid,
        ts_event: UnixNanos,
        ts_init: UnixNanos,
    ) -> Self {
        Self {
            account_id,
            account_type,
            base_currency,
            balances,
            info,
            event_id,
            ts_event,
            ts_init,
        }
    }
}

impl Display for AccountState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(account_id={}, account_type={}, base_currency={}, balances=[{}])",
            stringify!(AccountState),
            self.account_id,
            self.account_type,
            self.base_currency
                .map_or_else(|| "None".to_string(), |c| c.code.to_string()),
            self.balances
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>()
                .join(","),
        )
    }
}

#[cfg(any(test, feature = "stubs"))]
pub mod stubs {
    //! Account event stubs for testing.

    use ahash::AHashMap;
    use rstest::fixture;
    use serde_json::json;
    use ustr::Ustr;
    use uuid::Uuid;

    use crate::{
        enums::AccountType,
        events::AccountState,
        identifiers::AccountId,
        types::{AccountBalance, Currency, Money},
    };

    #[fixture]
    pub fn cash_account_state() -> AccountState {
        AccountState::new(
            AccountId::from("SIM-001"),
            AccountType::Cash,
            Some(Currency::USD()),
            vec![AccountBalance::new(
                Money::from("1525000 USD"),
                Money::from("25000 USD"),
                Money::from("1500000 USD"),
            )],
            AHashMap::new(),
            Uuid::new_v4(),
            0,
            0,
        )
    }

    #[fixture]
    pub fn cash_account_state_multi() -> AccountState {
        let balance_btc = AccountBalance::new(
            Money::from("10 BTC"),
            Money::from("0 BTC"),
            Money::from("10 BTC"),
        );
        let balance_eth = AccountBalance::new(
            Money::from("20 ETH"),
            Money::from("0 ETH"),
            Money::from("20 ETH"),
        );
        AccountState::new(
            AccountId::from("BINANCE-1513111"),
            AccountType::Cash,
            None, // multi-currency
            vec![balance_btc, balance_eth],
            AHashMap::new(),
            Uuid::new_v4(),
            0,
            0,
        )
    }

    #[fixture]
    pub fn cash_account_state_multi_changed_btc() -> AccountState {
        let balance_btc = AccountBalance::new(
            Money::from("9 BTC"),
            Money::from("0.5 BTC"),
            Money::from("8.5 BTC"),
        );
        AccountState::new(
            AccountId::from("BINANCE-1513111"),
            AccountType::Cash,
            None, // multi-currency
            vec![balance_btc],
            AHashMap::new(),
            Uuid::new_v4(),
            0,
            0,
        )
    }

    #[fixture]
    pub fn margin_account_state() -> AccountState {
        let mut info = AHashMap::new();
        info.insert(Ustr::from("default_leverage"), json!("10"));
        info.insert(Ustr::from("initial_margin"), json!("5000.00 USD"));
        info.insert(Ustr::from("maint_margin"), json!("2500.00 USD"));
        AccountState::new(
            AccountId::from("BITMEX-1513111"),
            AccountType::Margin,
            Some(Currency::USD()),
            vec![AccountBalance::new(
                Money::from("1525000 USD"),
                Money::from("25000 USD"),
                Money::from("1500000 USD"),
            )],
            info,
            Uuid::new_v4(),
            0,
            0,
        )
    }
}
