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

//! Exchange rate lookup.

use meridian_model::types::Currency;
use rust_decimal::Decimal;

/// Provides exchange rates between currency pairs.
///
/// Implementations own rate sourcing and staleness policy, including the
/// identity rate for equal currencies. Consumers must treat `None` as "no rate
/// available" and never substitute a default.
pub trait ExchangeRateProvider {
    /// Returns the multiplier converting an amount in `from` into `to`, or `None`
    /// if no rate is available.
    fn rate(&self, from: Currency, to: Currency) -> Option<Decimal>;
}
