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

//! Value types for the trading domain model.
//!
//! All value types are immutable: arithmetic operations return new instances rather
//! than modifying existing ones. [`Price`], [`Quantity`] and [`Money`] carry a decimal
//! precision; mixed-precision arithmetic takes the maximum precision of the operands,
//! and [`Money`] amounts are rescaled to their currency precision at construction.
//!
//! Constraints:
//! - [`Quantity`] is non-negative; subtracting below zero fails fast.
//! - [`Price`] and [`Money`] are signed.
//! - [`Money`] arithmetic across different currencies fails fast.

pub mod balance;
pub mod currency;
pub mod money;
pub mod price;
pub mod quantity;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use balance::AccountBalance;
pub use currency::Currency;
pub use money::Money;
pub use price::{PRICE_PRECISION_MAX, Price};
pub use quantity::{QUANTITY_PRECISION_MAX, Quantity};
