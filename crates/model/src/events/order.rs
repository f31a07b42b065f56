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

//! Order events consumed by the accounting and portfolio layers.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    UnixNanos,
    enums::{LiquiditySide, OrderSide},
    identifiers::{ClientOrderId, InstrumentId, Venue},
    orders::WorkingOrder,
    types::{Price, Quantity},
};

/// Represents a fill of an order at the venue.
///
/// This is the facade the execution layer feeds into PnL and commission
/// calculations; the full fill event (venue order ID, trade ID, etc.) lives there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilled {
    /// The instrument the fill is for.
    pub instrument_id: InstrumentId,
    /// The side of the fill.
    pub order_side: OrderSide,
    /// The quantity of the last fill.
    pub last_qty: Quantity,
    /// The price of the last fill.
    pub last_px: Price,
    /// Whether the fill provided or took liquidity.
    pub liquidity_side: LiquiditySide,
    /// UNIX timestamp (nanoseconds) when the fill occurred.
    pub ts_event: UnixNanos,
}

impl OrderFilled {
    /// Creates a new [`OrderFilled`] instance.
    #[must_use]
    pub fn new(
        instrument_id: InstrumentId,
        order_side: OrderSide,
        last_qty: Quantity,
        last_px: Price,
        liquidity_side: LiquiditySide,
        ts_event: UnixNanos,
    ) -> Self {
        Self {
            instrument_id,
            order_side,
            last_qty,
            last_px,
            liquidity_side,
            ts_event,
        }
    }
}

impl Display for OrderFilled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(instrument={}, side={}, last_qty={}, last_px={}, liquidity={})",
            stringify!(OrderFilled),
            self.instrument_id,
            self.order_side,
            self.last_qty,
            self.last_px,
            self.liquidity_side,
        )
    }
}

/// An externally observed working-order state transition.
///
/// The portfolio maintains its per-venue working-order sets from these events;
/// it never infers order state itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    /// The order is now resting on the venue.
    Working(WorkingOrder),
    /// The order left the book (filled, canceled, rejected or expired).
    Completed {
        client_order_id: ClientOrderId,
        instrument_id: InstrumentId,
    },
}

impl OrderEvent {
    /// Returns the instrument ID associated with the event.
    #[must_use]
    pub fn instrument_id(&self) -> InstrumentId {
        match self {
            Self::Working(order) => order.instrument_id,
            Self::Completed { instrument_id, .. } => *instrument_id,
        }
    }

    /// Returns the client order ID associated with the event.
    #[must_use]
    pub fn client_order_id(&self) -> ClientOrderId {
        match self {
            Self::Working(order) => order.client_order_id,
            Self::Completed {
                client_order_id, ..
            } => *client_order_id,
        }
    }

    /// Returns the venue associated with the event.
    #[must_use]
    pub fn venue(&self) -> Venue {
        self.instrument_id().venue
    }
}
