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

//! A cash equity instrument.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    enums::{AssetClass, InstrumentClass},
    identifiers::InstrumentId,
    instruments::{Instrument, InstrumentAny},
    types::{Currency, Price, Quantity},
};

/// Represents a cash equity. Equities have no base currency: the asset is the
/// share itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equity {
    /// The instrument ID.
    pub id: InstrumentId,
    /// The quote currency.
    pub quote_currency: Currency,
    /// The decimal precision of prices.
    pub price_precision: u8,
    /// The minimum price increment (tick size).
    pub price_increment: Price,
    /// The maximum order quantity.
    pub max_quantity: Option<Quantity>,
    /// The minimum order quantity.
    pub min_quantity: Option<Quantity>,
    /// The initial (order) margin rate.
    pub margin_init: Decimal,
    /// The maintenance (position) margin rate.
    pub margin_maint: Decimal,
    /// The maker fee rate.
    pub maker_fee: Decimal,
    /// The taker fee rate.
    pub taker_fee: Decimal,
}

impl Equity {
    /// Creates a new [`Equity`] instance.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: InstrumentId,
        quote_currency: Currency,
        price_precision: u8,
        price_increment: Price,
        max_quantity: Option<Quantity>,
        min_quantity: Option<Quantity>,
        margin_init: Decimal,
        margin_maint: Decimal,
        maker_fee: Decimal,
        taker_fee: Decimal,
    ) -> Self {
        Self {
            id,
            quote_currency,
            price_precision,
            price_increment,
            max_quantity,
            min_quantity,
            margin_init,
            margin_maint,
            maker_fee,
            taker_fee,
        }
    }

    #[must_use]
    pub fn into_any(self) -> InstrumentAny {
        InstrumentAny::Equity(self)
    }
}

impl Instrument for Equity {
    fn id(&self) -> InstrumentId {
        self.id
    }

    fn asset_class(&self) -> AssetClass {
        AssetClass::Equity
    }

    fn instrument_class(&self) -> InstrumentClass {
        InstrumentClass::Spot
    }

    fn base_currency(&self) -> Option<Currency> {
        None
    }

    fn quote_currency(&self) -> Currency {
        self.quote_currency
    }

    fn is_inverse(&self) -> bool {
        false
    }

    fn price_precision(&self) -> u8 {
        self.price_precision
    }

    fn size_precision(&self) -> u8 {
        0 // whole shares
    }

    fn price_increment(&self) -> Price {
        self.price_increment
    }

    fn size_increment(&self) -> Quantity {
        Quantity::from("1")
    }

    fn multiplier(&self) -> Quantity {
        Quantity::from("1")
    }

    fn max_quantity(&self) -> Option<Quantity> {
        self.max_quantity
    }

    fn min_quantity(&self) -> Option<Quantity> {
        self.min_quantity
    }

    fn margin_init(&self) -> Decimal {
        self.margin_init
    }

    fn margin_maint(&self) -> Decimal {
        self.margin_maint
    }

    fn maker_fee(&self) -> Decimal {
        self.maker_fee
    }

    fn taker_fee(&self) -> Decimal {
        self.taker_fee
    }
}
