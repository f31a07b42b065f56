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

//! Enumerations for the trading domain model.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The type of an account, fixed at construction.
#[derive(
    Copy,
    Clone,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// An account with immediate cash settlement and no leverage.
    Cash,
    /// An account able to hold leveraged positions against margin collateral.
    Margin,
    /// A betting/wagering account (recognized on the wire, not supported by this engine).
    Betting,
}

/// The order side (BUY or SELL).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// No order side specified.
    #[default]
    NoOrderSide,
    /// The order is a BUY.
    Buy,
    /// The order is a SELL.
    Sell,
}

impl OrderSide {
    /// Returns the position side which entering on this order side produces.
    #[must_use]
    pub fn as_position_side(&self) -> PositionSide {
        match self {
            Self::Buy => PositionSide::Long,
            Self::Sell => PositionSide::Short,
            Self::NoOrderSide => PositionSide::Flat,
        }
    }
}

/// The position side (FLAT, LONG or SHORT).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionSide {
    /// No market exposure.
    #[default]
    Flat,
    /// Net bought exposure.
    Long,
    /// Net sold exposure.
    Short,
}

/// The liquidity side of a fill (whether the order provided or took liquidity).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiquiditySide {
    /// No liquidity side specified.
    #[default]
    NoLiquiditySide,
    /// The order provided liquidity (passive).
    Maker,
    /// The order took liquidity (aggressive).
    Taker,
}

/// The broad asset class of an instrument.
#[derive(
    Copy,
    Clone,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    /// Foreign exchange.
    Fx,
    /// Equities.
    Equity,
    /// Crypto assets.
    Cryptocurrency,
}

/// The contract class of an instrument.
#[derive(
    Copy,
    Clone,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentClass {
    /// Immediate-delivery spot instrument.
    Spot,
    /// Perpetual swap contract.
    Swap,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(OrderSide::Buy, PositionSide::Long)]
    #[case(OrderSide::Sell, PositionSide::Short)]
    #[case(OrderSide::NoOrderSide, PositionSide::Flat)]
    fn order_side_as_position_side(#[case] side: OrderSide, #[case] expected: PositionSide) {
        assert_eq!(side.as_position_side(), expected);
    }

    #[rstest]
    fn enum_string_round_trip() {
        assert_eq!(AccountType::Margin.to_string(), "MARGIN");
        assert_eq!(AccountType::from_str("margin").unwrap(), AccountType::Margin);
        assert_eq!(
            LiquiditySide::from_str("NO_LIQUIDITY_SIDE").unwrap(),
            LiquiditySide::NoLiquiditySide
        );
    }
}
