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

//! Instrument definitions the engine computes against.
//!
//! The engine consumes instruments, it does not manage them: reference-data
//! ingestion and lifecycle live upstream. Instrument kinds are distinguished by
//! classification checks (asset class and contract class), never by downcasting.

pub mod crypto_perpetual;
pub mod currency_pair;
pub mod equity;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use crypto_perpetual::CryptoPerpetual;
pub use currency_pair::CurrencyPair;
pub use equity::Equity;

use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    enums::{AssetClass, InstrumentClass},
    identifiers::{InstrumentId, Symbol, Venue},
    types::{Currency, Money, Price, Quantity},
};

/// The capability set of a tradable instrument definition.
#[enum_dispatch]
pub trait Instrument {
    fn id(&self) -> InstrumentId;
    fn asset_class(&self) -> AssetClass;
    fn instrument_class(&self) -> InstrumentClass;
    fn base_currency(&self) -> Option<Currency>;
    fn quote_currency(&self) -> Currency;
    fn is_inverse(&self) -> bool;
    fn price_precision(&self) -> u8;
    fn size_precision(&self) -> u8;
    /// The minimum price increment (tick size).
    fn price_increment(&self) -> Price;
    /// The minimum size increment.
    fn size_increment(&self) -> Quantity;
    fn multiplier(&self) -> Quantity;
    /// The maximum order quantity (max trade size).
    fn max_quantity(&self) -> Option<Quantity>;
    fn min_quantity(&self) -> Option<Quantity>;
    /// The initial (order) margin rate.
    fn margin_init(&self) -> Decimal;
    /// The maintenance (position) margin rate.
    fn margin_maint(&self) -> Decimal;
    fn maker_fee(&self) -> Decimal;
    fn taker_fee(&self) -> Decimal;

    fn symbol(&self) -> Symbol {
        self.id().symbol
    }

    fn venue(&self) -> Venue {
        self.id().venue
    }

    /// The currency margin and PnL settle in: base for inverse instruments,
    /// quote otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the instrument is inverse but defines no base currency.
    fn cost_currency(&self) -> Currency {
        if self.is_inverse() {
            self.base_currency()
                .expect("inverse instrument without base currency")
        } else {
            self.quote_currency()
        }
    }

    fn settlement_currency(&self) -> Currency {
        self.cost_currency()
    }

    fn is_spot(&self) -> bool {
        self.instrument_class() == InstrumentClass::Spot
    }

    fn is_swap(&self) -> bool {
        self.instrument_class() == InstrumentClass::Swap
    }

    fn is_fx_spot(&self) -> bool {
        self.asset_class() == AssetClass::Fx && self.is_spot()
    }

    fn is_crypto_spot(&self) -> bool {
        self.asset_class() == AssetClass::Cryptocurrency && self.is_spot()
    }

    fn is_crypto_swap(&self) -> bool {
        self.asset_class() == AssetClass::Cryptocurrency && self.is_swap()
    }

    /// Calculates the notional value of the given quantity at the given price.
    ///
    /// For inverse instruments the notional settles in the base currency
    /// (`quantity * multiplier / price`) unless `use_quote_for_inverse` requests the
    /// quote-denominated quantity instead.
    ///
    /// # Panics
    ///
    /// Panics if the instrument is inverse (with `use_quote_for_inverse` unset or
    /// false) but defines no base currency.
    fn calculate_notional_value(
        &self,
        quantity: Quantity,
        price: Price,
        use_quote_for_inverse: Option<bool>,
    ) -> Money {
        let use_quote = use_quote_for_inverse.unwrap_or(false);
        if self.is_inverse() {
            if use_quote {
                Money::from_decimal(quantity.as_decimal(), self.quote_currency())
            } else {
                let amount =
                    quantity.as_decimal() * self.multiplier().as_decimal() / price.as_decimal();
                let currency = self
                    .base_currency()
                    .expect("inverse instrument without base currency");
                Money::from_decimal(amount, currency)
            }
        } else {
            let amount =
                quantity.as_decimal() * self.multiplier().as_decimal() * price.as_decimal();
            Money::from_decimal(amount, self.quote_currency())
        }
    }

    /// Creates a price with this instrument's price precision.
    fn make_price(&self, value: f64) -> Price {
        Price::new(value, self.price_precision())
    }

    /// Creates a quantity with this instrument's size precision.
    fn make_qty(&self, value: f64) -> Quantity {
        Quantity::new(value, self.size_precision())
    }
}

/// Type-erased view over the concrete instrument definitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[enum_dispatch(Instrument)]
pub enum InstrumentAny {
    CryptoPerpetual(CryptoPerpetual),
    CurrencyPair(CurrencyPair),
    Equity(Equity),
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{stubs::*, *};

    #[rstest]
    fn notional_linear(currency_pair_btcusdt: CurrencyPair) {
        let notional = currency_pair_btcusdt.calculate_notional_value(
            Quantity::from("2"),
            Price::from("10000"),
            None,
        );
        assert_eq!(notional, Money::from("20000 USDT"));
    }

    #[rstest]
    fn notional_inverse_settles_in_base(crypto_perpetual_btcusd: CryptoPerpetual) {
        let notional = crypto_perpetual_btcusd.calculate_notional_value(
            Quantity::from("100000"),
            Price::from("10000"),
            None,
        );
        assert_eq!(notional, Money::from("10 BTC"));
    }

    #[rstest]
    fn notional_inverse_as_quote(crypto_perpetual_btcusd: CryptoPerpetual) {
        let notional = crypto_perpetual_btcusd.calculate_notional_value(
            Quantity::from("100000"),
            Price::from("10000"),
            Some(true),
        );
        assert_eq!(notional, Money::from("100000 USD"));
    }

    #[rstest]
    fn kind_predicates(audusd_sim: CurrencyPair, crypto_perpetual_btcusd: CryptoPerpetual) {
        assert!(audusd_sim.is_fx_spot());
        assert!(!audusd_sim.is_crypto_swap());
        assert!(crypto_perpetual_btcusd.is_crypto_swap());
        assert!(!crypto_perpetual_btcusd.is_spot());
    }

    #[rstest]
    fn cost_currency_follows_inverse_flag(
        currency_pair_btcusdt: CurrencyPair,
        crypto_perpetual_btcusd: CryptoPerpetual,
    ) {
        assert_eq!(currency_pair_btcusdt.cost_currency(), Currency::USDT());
        assert_eq!(crypto_perpetual_btcusd.cost_currency(), Currency::BTC());
    }
}
