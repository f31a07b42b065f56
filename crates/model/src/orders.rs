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

//! The open-order facade consumed by the portfolio.
//!
//! Order construction, routing and lifecycle management live in the execution layer;
//! this engine only sees orders resting on a venue, with the fields margin
//! calculations require.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    enums::OrderSide,
    identifiers::{ClientOrderId, InstrumentId, Venue},
    types::{Price, Quantity},
};

/// An order working (resting) on a venue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingOrder {
    /// The client order ID.
    pub client_order_id: ClientOrderId,
    /// The instrument the order is for.
    pub instrument_id: InstrumentId,
    /// The order side.
    pub side: OrderSide,
    /// The open quantity.
    pub quantity: Quantity,
    /// The price the order rests at.
    pub price: Price,
}

impl WorkingOrder {
    /// Creates a new [`WorkingOrder`] instance.
    #[must_use]
    pub fn new(
        client_order_id: ClientOrderId,
        instrument_id: InstrumentId,
        side: OrderSide,
        quantity: Quantity,
        price: Price,
    ) -> Self {
        Self {
            client_order_id,
            instrument_id,
            side,
            quantity,
            price,
        }
    }

    /// Returns the venue the order is working on.
    #[must_use]
    pub fn venue(&self) -> Venue {
        self.instrument_id.venue
    }
}

impl Display for WorkingOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(id={}, instrument={}, side={}, qty={}, price={})",
            stringify!(WorkingOrder),
            self.client_order_id,
            self.instrument_id,
            self.side,
            self.quantity,
            self.price,
        )
    }
}
