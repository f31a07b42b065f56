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

//! Market data consumed by the portfolio for marking positions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{UnixNanos, identifiers::InstrumentId, types::Price};

/// Represents a single top-of-book quote for an instrument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTick {
    /// The instrument the quote is for.
    pub instrument_id: InstrumentId,
    /// The best bid price.
    pub bid: Price,
    /// The best ask price.
    pub ask: Price,
    /// UNIX timestamp (nanoseconds) when the quote occurred.
    pub ts_event: UnixNanos,
}

impl QuoteTick {
    /// Creates a new [`QuoteTick`] instance.
    #[must_use]
    pub fn new(instrument_id: InstrumentId, bid: Price, ask: Price, ts_event: UnixNanos) -> Self {
        Self {
            instrument_id,
            bid,
            ask,
            ts_event,
        }
    }
}

impl Display for QuoteTick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.instrument_id, self.bid, self.ask, self.ts_event,
        )
    }
}
