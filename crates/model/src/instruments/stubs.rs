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

//! Instrument stubs for testing.

use rstest::fixture;
use rust_decimal_macros::dec;

use crate::{
    enums::AssetClass,
    identifiers::InstrumentId,
    instruments::{CryptoPerpetual, CurrencyPair, Equity},
    types::{Currency, Price, Quantity},
};

#[fixture]
pub fn audusd_sim() -> CurrencyPair {
    CurrencyPair::new(
        InstrumentId::from("AUD/USD.SIM"),
        AssetClass::Fx,
        Currency::AUD(),
        Currency::USD(),
        5,
        0,
        Price::from("0.00001"),
        Quantity::from("1"),
        Some(Quantity::from("10000000")),
        Some(Quantity::from("1000")),
        dec!(0.03),
        dec!(0.03),
        dec!(0.00002),
        dec!(0.00002),
    )
}

#[fixture]
pub fn gbpusd_sim() -> CurrencyPair {
    CurrencyPair::new(
        InstrumentId::from("GBP/USD.SIM"),
        AssetClass::Fx,
        Currency::GBP(),
        Currency::USD(),
        5,
        0,
        Price::from("0.00001"),
        Quantity::from("1"),
        Some(Quantity::from("10000000")),
        Some(Quantity::from("1000")),
        dec!(0.03),
        dec!(0.03),
        dec!(0.00002),
        dec!(0.00002),
    )
}

#[fixture]
pub fn currency_pair_btcusdt() -> CurrencyPair {
    CurrencyPair::new(
        InstrumentId::from("BTC/USDT.BINANCE"),
        AssetClass::Cryptocurrency,
        Currency::BTC(),
        Currency::USDT(),
        2,
        6,
        Price::from("0.01"),
        Quantity::from("0.000001"),
        Some(Quantity::from("9000")),
        Some(Quantity::from("0.000001")),
        dec!(0),
        dec!(0),
        dec!(0.001),
        dec!(0.001),
    )
}

#[fixture]
pub fn crypto_perpetual_btcusd() -> CryptoPerpetual {
    CryptoPerpetual::new(
        InstrumentId::from("BTC/USD.BITMEX"),
        Currency::BTC(),
        Currency::USD(),
        true, // inverse
        1,
        0,
        Price::from("0.5"),
        Quantity::from("1"),
        Quantity::from("1"),
        Some(Quantity::from("10000000")),
        Some(Quantity::from("1")),
        dec!(0.01),
        dec!(0.0035),
        dec!(-0.00025),
        dec!(0.00075),
    )
}

#[fixture]
pub fn crypto_perpetual_ethusd() -> CryptoPerpetual {
    CryptoPerpetual::new(
        InstrumentId::from("ETH/USD.BITMEX"),
        Currency::ETH(),
        Currency::USD(),
        true, // inverse
        2,
        0,
        Price::from("0.05"),
        Quantity::from("1"),
        Quantity::from("1"),
        Some(Quantity::from("10000000")),
        Some(Quantity::from("1")),
        dec!(0.02),
        dec!(0.007),
        dec!(-0.00025),
        dec!(0.00075),
    )
}

#[fixture]
pub fn equity_aapl() -> Equity {
    Equity::new(
        InstrumentId::from("AAPL.XNAS"),
        Currency::USD(),
        2,
        Price::from("0.01"),
        None,
        Some(Quantity::from("1")),
        dec!(0.5),
        dec!(0.25),
        dec!(0),
        dec!(0),
    )
}
