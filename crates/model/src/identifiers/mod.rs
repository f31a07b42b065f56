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

//! Identifiers for the trading domain model, interned for cheap copy and comparison.

pub mod account_id;
pub mod client_order_id;
pub mod instrument_id;
pub mod position_id;
pub mod symbol;
pub mod venue;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use account_id::AccountId;
pub use client_order_id::ClientOrderId;
pub use instrument_id::InstrumentId;
pub use position_id::PositionId;
pub use symbol::Symbol;
pub use venue::Venue;

/// Checks that `value` is usable as an identifier.
///
/// # Errors
///
/// Returns an error if `value` is empty or contains whitespace.
pub(crate) fn check_valid_identifier(value: &str, ident: &str) -> anyhow::Result<()> {
    anyhow::ensure!(!value.is_empty(), "`{ident}` cannot be empty");
    anyhow::ensure!(
        !value.chars().any(char::is_whitespace),
        "`{ident}` cannot contain whitespace, was '{value}'"
    );
    Ok(())
}
