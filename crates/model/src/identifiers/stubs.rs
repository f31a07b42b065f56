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

//! Identifier stubs for testing.

use rstest::fixture;
use uuid::Uuid;

use crate::identifiers::{AccountId, PositionId, Venue};

#[fixture]
pub fn account_id() -> AccountId {
    AccountId::from("SIM-001")
}

#[fixture]
pub fn margin_account_id() -> AccountId {
    AccountId::from("BITMEX-1513111")
}

#[fixture]
pub fn venue_sim() -> Venue {
    Venue::from("SIM")
}

#[fixture]
pub fn position_id() -> PositionId {
    PositionId::from("P-001")
}

#[fixture]
pub fn uuid4() -> Uuid {
    Uuid::new_v4()
}
