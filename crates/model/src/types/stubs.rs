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

//! Type stubs for testing.

use rstest::fixture;

use crate::types::{AccountBalance, Money};

#[fixture]
pub fn stub_account_balance() -> AccountBalance {
    AccountBalance::new(
        Money::from("1525000 USD"),
        Money::from("25000 USD"),
        Money::from("1500000 USD"),
    )
}

#[fixture]
pub fn stub_account_balance_btc() -> AccountBalance {
    AccountBalance::new(
        Money::from("10 BTC"),
        Money::from("0 BTC"),
        Money::from("10 BTC"),
    )
}

#[fixture]
pub fn stub_account_balance_eth() -> AccountBalance {
    AccountBalance::new(
        Money::from("20 ETH"),
        Money::from("0 ETH"),
        Money::from("20 ETH"),
    )
}
