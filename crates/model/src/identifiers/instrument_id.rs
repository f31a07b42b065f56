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

//! Represents a valid instrument ID: a symbol qualified by its trading venue.

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::identifiers::{Symbol, Venue};

/// Represents a valid instrument ID.
///
/// Displayed as `"{symbol}.{venue}"`, e.g. `"BTC/USD.BITMEX"`.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstrumentId {
    /// The instrument ticker symbol.
    pub symbol: Symbol,
    /// The venue the instrument trades on.
    pub venue: Venue,
}

impl InstrumentId {
    /// Creates a new [`InstrumentId`] instance.
    #[must_use]
    pub fn new(symbol: Symbol, venue: Venue) -> Self {
        Self { symbol, venue }
    }
}

impl FromStr for InstrumentId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (symbol, venue) = s.rsplit_once('.').ok_or_else(|| {
            anyhow::anyhow!("Error parsing `InstrumentId` from '{s}': expected '<symbol>.<venue>'")
        })?;
        Ok(Self {
            symbol: Symbol::new_checked(symbol)?,
            venue: Venue::new_checked(venue)?,
        })
    }
}

impl From<&str> for InstrumentId {
    fn from(value: &str) -> Self {
        Self::from_str(value).expect("valid instrument ID string")
    }
}

impl Debug for InstrumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", format!("{self}"))
    }
}

impl Display for InstrumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.symbol, self.venue)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn parse_splits_on_last_dot() {
        let instrument_id = InstrumentId::from("BTC/USD.BITMEX");
        assert_eq!(instrument_id.symbol, Symbol::from("BTC/USD"));
        assert_eq!(instrument_id.venue, Venue::from("BITMEX"));
        assert_eq!(instrument_id.to_string(), "BTC/USD.BITMEX");
    }

    #[rstest]
    fn parse_without_venue_fails() {
        assert!(InstrumentId::from_str("BTCUSD").is_err());
    }
}
