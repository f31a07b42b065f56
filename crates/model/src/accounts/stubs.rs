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

//! Account stubs for testing.

use rstest::fixture;

use crate::{
    accounts::{CashAccount, MarginAccount},
    events::account::stubs::{
        cash_account_state, cash_account_state_multi, margin_account_state,
    },
};

#[fixture]
pub fn cash_account() -> CashAccount {
    CashAccount::new(cash_account_state())
}

#[fixture]
pub fn cash_account_multi() -> CashAccount {
    CashAccount::new(cash_account_state_multi())
}

#[fixture]
pub fn margin_account() -> MarginAccount {
    MarginAccount::new(margin_account_state())
}
