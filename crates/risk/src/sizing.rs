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

//! Position sizing from account equity and stop distance.

use meridian_model::{
    instruments::{Instrument, InstrumentAny},
    types::{Money, Price, Quantity},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const BP_DIVISOR: Decimal = dec!(10000);

/// Sizes orders against a single instrument.
pub trait PositionSizer {
    fn instrument(&self) -> &InstrumentAny;

    /// Replaces the instrument definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the instrument ID does not match the sizer's
    /// instrument.
    fn update_instrument(&mut self, instrument: InstrumentAny) -> anyhow::Result<()>;

    /// Calculates the order quantity risking `risk_bp` basis points of `equity`
    /// between `entry` and `stop_loss`.
    ///
    /// # Errors
    ///
    /// Returns an error on any precondition violation, see [`FixedRiskSizer`].
    #[allow(clippy::too_many_arguments)]
    fn calculate(
        &self,
        equity: Money,
        risk_bp: Decimal,
        entry: Price,
        stop_loss: Price,
        exchange_rate: Decimal,
        commission_rate_bp: Decimal,
        hard_limit: Option<Quantity>,
        units: u32,
        unit_batch_size: u32,
    ) -> anyhow::Result<Quantity>;
}

/// Sizes orders so a stop-out loses a fixed fraction of account equity.
///
/// The riskable amount is `equity * risk_bp / 10000`, reduced by the expected
/// commission, then divided by the entry-to-stop distance. The result is clamped
/// to the hard limit and the instrument maximum, split across `units` entries,
/// and floored to the unit batch size (truncation, never rounding up).
#[derive(Clone, Debug)]
pub struct FixedRiskSizer {
    pub instrument: InstrumentAny,
}

impl FixedRiskSizer {
    /// Creates a new [`FixedRiskSizer`] instance.
    #[must_use]
    pub const fn new(instrument: InstrumentAny) -> Self {
        Self { instrument }
    }
}

impl PositionSizer for FixedRiskSizer {
    fn instrument(&self) -> &InstrumentAny {
        &self.instrument
    }

    fn update_instrument(&mut self, instrument: InstrumentAny) -> anyhow::Result<()> {
        anyhow::ensure!(
            instrument.id() == self.instrument.id(),
            "instrument {} does not match sizer instrument {}",
            instrument.id(),
            self.instrument.id(),
        );
        self.instrument = instrument;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if `risk_bp` is not positive, `exchange_rate` or
    /// `commission_rate_bp` is negative, or `units` is zero.
    fn calculate(
        &self,
        equity: Money,
        risk_bp: Decimal,
        entry: Price,
        stop_loss: Price,
        exchange_rate: Decimal,
        commission_rate_bp: Decimal,
        hard_limit: Option<Quantity>,
        units: u32,
        unit_batch_size: u32,
    ) -> anyhow::Result<Quantity> {
        anyhow::ensure!(risk_bp > Decimal::ZERO, "`risk_bp` must be positive, was {risk_bp}");
        anyhow::ensure!(
            exchange_rate >= Decimal::ZERO,
            "`exchange_rate` was negative, was {exchange_rate}",
        );
        anyhow::ensure!(
            commission_rate_bp >= Decimal::ZERO,
            "`commission_rate_bp` was negative, was {commission_rate_bp}",
        );
        anyhow::ensure!(units >= 1, "`units` must be at least 1, was {units}");

        let size_precision = self.instrument.size_precision();
        // degenerate, not an error: no conversion available means no size
        if exchange_rate.is_zero() {
            return Ok(Quantity::zero(size_precision));
        }

        let tick_size = self.instrument.price_increment().as_decimal();
        let risk_ticks = (entry.as_decimal() - stop_loss.as_decimal()).abs() / tick_size;
        if risk_ticks <= Decimal::ZERO {
            return Ok(Quantity::zero(size_precision));
        }

        let riskable_money = if equity.as_decimal() <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            equity.as_decimal()
                * (risk_bp / BP_DIVISOR)
                * (Decimal::ONE - commission_rate_bp / BP_DIVISOR)
        };

        let mut size = riskable_money / exchange_rate / risk_ticks / tick_size;

        if let Some(hard_limit) = hard_limit {
            size = size.min(hard_limit.as_decimal());
        }

        size /= Decimal::from(units);

        if unit_batch_size > 0 {
            let batch = Decimal::from(unit_batch_size);
            size = (size / batch).floor() * batch;
        }

        if let Some(max_quantity) = self.instrument.max_quantity() {
            size = size.min(max_quantity.as_decimal());
        }

        Quantity::from_decimal(size.trunc_with_scale(u32::from(size_precision)), size_precision)
    }
}

#[cfg(test)]
mod tests {
    use meridian_model::{
        identifiers::InstrumentId,
        instruments::{CurrencyPair, stubs::*},
        types::Currency,
    };
    use rstest::rstest;

    use super::*;

    fn sizer(instrument: CurrencyPair) -> FixedRiskSizer {
        FixedRiskSizer::new(instrument.into_any())
    }

    #[rstest]
    fn update_instrument_requires_matching_id(
        gbpusd_sim: CurrencyPair,
        audusd_sim: CurrencyPair,
    ) {
        let mut sizer = sizer(gbpusd_sim.clone());
        assert!(sizer.update_instrument(audusd_sim.into_any()).is_err());
        assert!(sizer.update_instrument(gbpusd_sim.into_any()).is_ok());
    }

    #[rstest]
    fn preconditions_rejected(gbpusd_sim: CurrencyPair) {
        let sizer = sizer(gbpusd_sim);
        let equity = Money::from("1000000 USD");
        let entry = Price::from("1.00100");
        let stop = Price::from("1.00000");

        let cases: [anyhow::Result<Quantity>; 4] = [
            sizer.calculate(equity, dec!(0), entry, stop, dec!(1), dec!(0), None, 1, 0),
            sizer.calculate(equity, dec!(10), entry, stop, dec!(-1), dec!(0), None, 1, 0),
            sizer.calculate(equity, dec!(10), entry, stop, dec!(1), dec!(-1), None, 1, 0),
            sizer.calculate(equity, dec!(10), entry, stop, dec!(1), dec!(0), None, 0, 0),
        ];
        for result in cases {
            assert!(result.is_err());
        }
    }

    #[rstest]
    fn sizes_single_unit(gbpusd_sim: CurrencyPair) {
        let sizer = sizer(gbpusd_sim);
        let qty = sizer
            .calculate(
                Money::from("1000000 USD"),
                dec!(10), // 0.1%
                Price::from("1.00100"),
                Price::from("1.00000"),
                Decimal::ONE,
                dec!(0),
                None,
                1,
                0,
            )
            .unwrap();
        // riskable 1000, 100 ticks of 0.00001: 1000 / 0.00100 = 1000000
        assert_eq!(qty, Quantity::from("1000000"));
    }

    #[rstest]
    fn commission_haircut_reduces_size(gbpusd_sim: CurrencyPair) {
        let sizer = sizer(gbpusd_sim);
        let qty = sizer
            .calculate(
                Money::from("1000000 USD"),
                dec!(10),
                Price::from("1.00100"),
                Price::from("1.00000"),
                Decimal::ONE,
                dec!(100), // 1% haircut
                None,
                1,
                0,
            )
            .unwrap();
        assert_eq!(qty, Quantity::from("990000"));
    }

    #[rstest]
    fn zero_exchange_rate_is_degenerate_zero(gbpusd_sim: CurrencyPair) {
        let sizer = sizer(gbpusd_sim);
        let qty = sizer
            .calculate(
                Money::from("1000000 USD"),
                dec!(10),
                Price::from("1.00100"),
                Price::from("1.00000"),
                dec!(0),
                dec!(0),
                None,
                1,
                0,
            )
            .unwrap();
        assert!(qty.is_zero());
    }

    #[rstest]
    fn zero_stop_distance_is_degenerate_zero(gbpusd_sim: CurrencyPair) {
        let sizer = sizer(gbpusd_sim);
        let qty = sizer
            .calculate(
                Money::from("1000000 USD"),
                dec!(10),
                Price::from("1.00100"),
                Price::from("1.00100"),
                Decimal::ONE,
                dec!(0),
                None,
                1,
                0,
            )
            .unwrap();
        assert!(qty.is_zero());
    }

    #[rstest]
    fn negative_equity_sizes_zero(gbpusd_sim: CurrencyPair) {
        let sizer = sizer(gbpusd_sim);
        let qty = sizer
            .calculate(
                Money::from("-25000 USD"),
                dec!(10),
                Price::from("1.00100"),
                Price::from("1.00000"),
                Decimal::ONE,
                dec!(0),
                None,
                1,
                0,
            )
            .unwrap();
        assert!(qty.is_zero());
    }

    #[rstest]
    fn hard_limit_clamps_before_unit_split(gbpusd_sim: CurrencyPair) {
        let sizer = sizer(gbpusd_sim);
        let qty = sizer
            .calculate(
                Money::from("1000000 USD"),
                dec!(10),
                Price::from("1.00100"),
                Price::from("1.00000"),
                Decimal::ONE,
                dec!(0),
                Some(Quantity::from("500000")),
                2,
                0,
            )
            .unwrap();
        assert_eq!(qty, Quantity::from("250000"));
    }

    #[rstest]
    fn batching_floors_never_rounds_up(gbpusd_sim: CurrencyPair) {
        let sizer = sizer(gbpusd_sim);
        let qty = sizer
            .calculate(
                Money::from("1000000 USD"),
                dec!(10),
                Price::from("1.00100"),
                Price::from("1.00000"),
                Decimal::ONE,
                dec!(0),
                None,
                3,
                1000,
            )
            .unwrap();
        // 1000000 / 3 = 333333.33, floored to the 1000 batch
        assert_eq!(qty, Quantity::from("333000"));
    }

    #[rstest]
    fn clamps_to_instrument_max(gbpusd_sim: CurrencyPair) {
        let sizer = sizer(gbpusd_sim);
        let qty = sizer
            .calculate(
                Money::from("100000000 USD"),
                dec!(10),
                Price::from("1.00100"),
                Price::from("1.00000"),
                Decimal::ONE,
                dec!(0),
                None,
                1,
                0,
            )
            .unwrap();
        // raw size 100000000 exceeds the 10000000 instrument maximum
        assert_eq!(qty, Quantity::from("10000000"));
    }

    #[rstest]
    fn exchange_rate_scales_size(audusd_sim: CurrencyPair) {
        let sizer = sizer(audusd_sim);
        let qty = sizer
            .calculate(
                Money::from("1000000 USD"),
                dec!(10),
                Price::from("0.80010"),
                Price::from("0.80000"),
                dec!(2),
                dec!(0),
                None,
                1,
                0,
            )
            .unwrap();
        // riskable 1000 halved by the rate of 2, over 10 ticks
        assert_eq!(qty, Quantity::from("5000000"));
    }

    #[rstest]
    fn result_carries_instrument_precision(currency_pair_btcusdt: CurrencyPair) {
        let sizer = FixedRiskSizer::new(currency_pair_btcusdt.into_any());
        let qty = sizer
            .calculate(
                Money::from("100000 USDT"),
                dec!(10),
                Price::from("45500.00"),
                Price::from("45000.00"),
                Decimal::ONE,
                dec!(0),
                None,
                1,
                0,
            )
            .unwrap();
        assert_eq!(qty.precision, 6);
        assert!(qty.is_positive());
        assert_eq!(sizer.instrument().id(), InstrumentId::from("BTC/USDT.BINANCE"));
        assert_eq!(sizer.instrument().quote_currency(), Currency::USDT());
    }
}
