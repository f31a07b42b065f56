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

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::{
    accounts::{Account, CashAccount, MarginAccount},
    enums::AccountType,
    events::AccountState,
};

/// A concrete account instance, dispatching the [`Account`] trait over the
/// supported account types.
#[enum_dispatch(Account)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AccountAny {
    Cash(CashAccount),
    Margin(MarginAccount),
}

impl AccountAny {
    /// Creates an account from its first account state event, dispatching on the
    /// event's account type.
    ///
    /// # Errors
    ///
    /// Returns an error if the account type is unsupported or the event is not a
    /// valid initial state.
    pub fn create(event: AccountState) -> anyhow::Result<Self> {
        match event.account_type {
            AccountType::Cash => Ok(Self::Cash(CashAccount::new_checked(event)?)),
            AccountType::Margin => Ok(Self::Margin(MarginAccount::new_checked(event)?)),
            AccountType::Betting => {
                anyhow::bail!("betting accounts are not supported (account {})", event.account_id)
            }
        }
    }

    /// Rebuilds an account by full replay of its event log.
    ///
    /// # Errors
    ///
    /// Returns an error if `events` is empty or any event fails to apply.
    pub fn from_events(events: Vec<AccountState>) -> anyhow::Result<Self> {
        let mut events = events.into_iter();
        let first = events
            .next()
            .ok_or_else(|| anyhow::anyhow!("cannot rebuild an account from an empty event log"))?;
        let mut account = Self::create(first)?;
        for event in events {
            account.apply(event)?;
        }
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{
        events::account::stubs::*,
        types::{Currency, Money},
    };

    #[rstest]
    fn create_dispatches_on_account_type(
        cash_account_state: AccountState,
        margin_account_state: AccountState,
    ) {
        let cash = AccountAny::create(cash_account_state).unwrap();
        assert!(cash.is_cash_account());
        assert!(matches!(cash, AccountAny::Cash(_)));

        let margin = AccountAny::create(margin_account_state).unwrap();
        assert!(margin.is_margin_account());
        assert!(matches!(margin, AccountAny::Margin(_)));
    }

    #[rstest]
    fn create_rejects_betting(mut cash_account_state: AccountState) {
        cash_account_state.account_type = AccountType::Betting;
        assert!(AccountAny::create(cash_account_state).is_err());
    }

    #[rstest]
    fn from_events_rejects_empty_log() {
        assert!(AccountAny::from_events(vec![]).is_err());
    }

    #[rstest]
    fn replay_matches_incremental_application(
        cash_account_state_multi: AccountState,
        cash_account_state_multi_changed_btc: AccountState,
    ) {
        let mut incremental = AccountAny::create(cash_account_state_multi.clone()).unwrap();
        incremental
            .apply(cash_account_state_multi_changed_btc.clone())
            .unwrap();

        let replayed = AccountAny::from_events(vec![
            cash_account_state_multi,
            cash_account_state_multi_changed_btc,
        ])
        .unwrap();

        assert_eq!(replayed, incremental);
        assert_eq!(replayed.event_count(), 2);
        assert_eq!(
            replayed.balance_total(Some(Currency::BTC())),
            Some(Money::from("9 BTC")),
        );
        assert_eq!(
            replayed.balance_total(Some(Currency::ETH())),
            Some(Money::from("20 ETH")),
        );
    }
}
