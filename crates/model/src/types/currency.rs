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

//! Represents a medium of exchange in a specified denomination.

use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Maximum precision (decimal places) a currency denomination can carry.
pub const CURRENCY_PRECISION_MAX: u8 = 9;

/// Represents a medium of exchange in a specified denomination with a fixed precision.
///
/// Equality and hashing are defined over the currency code alone: two currencies with
/// the same code are the same currency regardless of how they were constructed.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Currency {
    /// The currency code (e.g. "USD", "BTC").
    pub code: Ustr,
    /// The number of decimal places the denomination carries.
    pub precision: u8,
}

impl Currency {
    /// Creates a new [`Currency`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` is empty or `precision` exceeds [`CURRENCY_PRECISION_MAX`].
    pub fn new_checked<T: AsRef<str>>(code: T, precision: u8) -> anyhow::Result<Self> {
        let code = code.as_ref();
        anyhow::ensure!(!code.is_empty(), "`code` cannot be empty");
        anyhow::ensure!(
            precision <= CURRENCY_PRECISION_MAX,
            "`precision` exceeded maximum {CURRENCY_PRECISION_MAX}, was {precision}"
        );
        Ok(Self {
            code: Ustr::from(code),
            precision,
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `code` is empty or `precision` is invalid.
    pub fn new<T: AsRef<str>>(code: T, precision: u8) -> Self {
        Self::new_checked(code, precision).expect("valid currency code and precision")
    }

    #[must_use]
    #[allow(non_snake_case)]
    pub fn USD() -> Self {
        Self::new("USD", 2)
    }

    #[must_use]
    #[allow(non_snake_case)]
    pub fn AUD() -> Self {
        Self::new("AUD", 2)
    }

    #[must_use]
    #[allow(non_snake_case)]
    pub fn GBP() -> Self {
        Self::new("GBP", 2)
    }

    #[must_use]
    #[allow(non_snake_case)]
    pub fn EUR() -> Self {
        Self::new("EUR", 2)
    }

    #[must_use]
    #[allow(non_snake_case)]
    pub fn JPY() -> Self {
        Self::new("JPY", 0)
    }

    #[must_use]
    #[allow(non_snake_case)]
    pub fn BTC() -> Self {
        Self::new("BTC", 8)
    }

    #[must_use]
    #[allow(non_snake_case)]
    pub fn ETH() -> Self {
        Self::new("ETH", 8)
    }

    #[must_use]
    #[allow(non_snake_case)]
    pub fn USDT() -> Self {
        Self::new("USDT", 8)
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Self::USD()),
            "AUD" => Ok(Self::AUD()),
            "GBP" => Ok(Self::GBP()),
            "EUR" => Ok(Self::EUR()),
            "JPY" => Ok(Self::JPY()),
            "BTC" => Ok(Self::BTC()),
            "ETH" => Ok(Self::ETH()),
            "USDT" => Ok(Self::USDT()),
            _ => anyhow::bail!("Unknown currency code: '{s}'"),
        }
    }
}

impl From<&str> for Currency {
    fn from(value: &str) -> Self {
        Self::from_str(value).expect("known currency code")
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code={}, precision={})",
            stringify!(Currency),
            self.code,
            self.precision,
        )
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
