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

//! The position facade consumed by the accounting and portfolio layers.
//!
//! Position lifecycle management (netting, flipping, event sourcing of fills) is
//! owned by the execution layer; the engine consumes position snapshots and this
//! type's PnL arithmetic.

use std::fmt::Display;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    UnixNanos,
    enums::{OrderSide, PositionSide},
    identifiers::{InstrumentId, PositionId},
    instruments::{Instrument, InstrumentAny},
    types::{Currency, Money, Price, Quantity},
};

/// Represents a position in a market, long or short.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// The position ID.
    pub id: PositionId,
    /// The instrument the position is in.
    pub instrument_id: InstrumentId,
    /// The order side which opened the position.
    pub entry: OrderSide,
    /// The current position side.
    pub side: PositionSide,
    /// The current open quantity.
    pub quantity: Quantity,
    /// The average open price.
    pub avg_px_open: Price,
    /// The currency PnL settles in (base for inverse instruments, quote otherwise).
    pub settlement_currency: Currency,
    /// Whether the underlying instrument is inverse.
    pub is_inverse: bool,
    /// The contract multiplier of the underlying instrument.
    pub multiplier: Quantity,
    /// UNIX timestamp (nanoseconds) when the position was opened.
    pub ts_opened: UnixNanos,
}

impl Position {
    /// Creates a new open [`Position`] instance against the given instrument.
    #[must_use]
    pub fn new(
        id: PositionId,
        instrument: &InstrumentAny,
        entry: OrderSide,
        quantity: Quantity,
        avg_px_open: Price,
        ts_opened: UnixNanos,
    ) -> Self {
        Self {
            id,
            instrument_id: instrument.id(),
            entry,
            side: entry.as_position_side(),
            quantity,
            avg_px_open,
            settlement_currency: instrument.cost_currency(),
            is_inverse: instrument.is_inverse(),
            multiplier: instrument.multiplier(),
            ts_opened,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.side != PositionSide::Flat && !self.quantity.is_zero()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.is_open()
    }

    #[must_use]
    pub fn is_long(&self) -> bool {
        self.side == PositionSide::Long
    }

    #[must_use]
    pub fn is_short(&self) -> bool {
        self.side == PositionSide::Short
    }

    fn direction(&self) -> Decimal {
        match self.side {
            PositionSide::Short => -Decimal::ONE,
            _ => Decimal::ONE,
        }
    }

    /// Calculates the PnL realized by moving `quantity` from `avg_px_open` to
    /// `avg_px_close`, signed by the position side, in the settlement currency.
    ///
    /// # Panics
    ///
    /// Panics if the position is inverse and either price is zero.
    #[must_use]
    pub fn calculate_pnl(
        &self,
        avg_px_open: Price,
        avg_px_close: Price,
        quantity: Quantity,
    ) -> Money {
        let quantity = quantity.as_decimal() * self.multiplier.as_decimal();
        let amount = if self.is_inverse {
            // Inverse contracts settle in base currency
            let open = avg_px_open.as_decimal();
            let close = avg_px_close.as_decimal();
            assert!(
                !open.is_zero() && !close.is_zero(),
                "inverse PnL undefined at zero price"
            );
            self.direction() * quantity * (Decimal::ONE / open - Decimal::ONE / close)
        } else {
            self.direction() * quantity * (avg_px_close.as_decimal() - avg_px_open.as_decimal())
        };
        Money::from_decimal(amount, self.settlement_currency)
    }

    /// Calculates the unrealized PnL of the open quantity at the given mark price.
    #[must_use]
    pub fn unrealized_pnl(&self, last: Price) -> Money {
        self.calculate_pnl(self.avg_px_open, last, self.quantity)
    }

    /// Calculates the notional value of the open quantity at the given mark price.
    #[must_use]
    pub fn notional_value(&self, last: Price) -> Money {
        let quantity = self.quantity.as_decimal() * self.multiplier.as_decimal();
        if self.is_inverse {
            Money::from_decimal(quantity / last.as_decimal(), self.settlement_currency)
        } else {
            Money::from_decimal(quantity * last.as_decimal(), self.settlement_currency)
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(id={}, instrument={}, side={}, qty={}, avg_px_open={})",
            stringify!(Position),
            self.id,
            self.instrument_id,
            self.side,
            self.quantity,
            self.avg_px_open,
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::instruments::stubs::*;

    #[rstest]
    fn linear_long_pnl(audusd_sim: crate::instruments::CurrencyPair) {
        let position = Position::new(
            PositionId::from("P-001"),
            &audusd_sim.into_any(),
            OrderSide::Buy,
            Quantity::from("100000"),
            Price::from("0.80000"),
            0,
        );
        let pnl = position.calculate_pnl(
            Price::from("0.80000"),
            Price::from("0.80100"),
            Quantity::from("100000"),
        );
        assert_eq!(pnl, Money::from("100 USD"));
    }

    #[rstest]
    fn linear_short_pnl_mirrors_sign(audusd_sim: crate::instruments::CurrencyPair) {
        let position = Position::new(
            PositionId::from("P-001"),
            &audusd_sim.into_any(),
            OrderSide::Sell,
            Quantity::from("100000"),
            Price::from("0.80000"),
            0,
        );
        let pnl = position.calculate_pnl(
            Price::from("0.80000"),
            Price::from("0.80100"),
            Quantity::from("100000"),
        );
        assert_eq!(pnl, Money::from("-100 USD"));
    }

    #[rstest]
    fn inverse_long_pnl_settles_in_base(
        crypto_perpetual_btcusd: crate::instruments::CryptoPerpetual,
    ) {
        let position = Position::new(
            PositionId::from("P-001"),
            &crypto_perpetual_btcusd.into_any(),
            OrderSide::Buy,
            Quantity::from("100000"),
            Price::from("10000"),
            0,
        );
        let pnl = position.calculate_pnl(
            Price::from("10000"),
            Price::from("12500"),
            Quantity::from("100000"),
        );
        // 100000 * (1/10000 - 1/12500) = 2 BTC
        assert_eq!(pnl, Money::from("2 BTC"));
    }

    #[rstest]
    fn notional_value_inverse(crypto_perpetual_btcusd: crate::instruments::CryptoPerpetual) {
        let position = Position::new(
            PositionId::from("P-001"),
            &crypto_perpetual_btcusd.into_any(),
            OrderSide::Buy,
            Quantity::from("100000"),
            Price::from("10000"),
            0,
        );
        assert_eq!(
            position.notional_value(Price::from("12500")),
            Money::from("8 BTC")
        );
    }
}
