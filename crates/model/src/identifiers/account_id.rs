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

//! Represents a valid account ID.

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::identifiers::{Venue, check_valid_identifier};

/// Represents a valid account ID.
///
/// Must be correctly formatted with two valid strings either side of a hyphen:
/// the issuer (venue) and the account number, e.g. `"BITMEX-1513111"`.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(Ustr);

impl AccountId {
    /// Creates a new [`AccountId`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `value` is empty or contains whitespace.
    /// - `value` does not contain a hyphen '-' separator.
    /// - Either the issuer or number part is empty.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_identifier(value, stringify!(AccountId))?;
        let (issuer, number) = value
            .split_once('-')
            .ok_or_else(|| anyhow::anyhow!("`AccountId` must contain a '-' separator, was '{value}'"))?;
        anyhow::ensure!(
            !issuer.is_empty(),
            "`AccountId` issuer part (before '-') cannot be empty"
        );
        anyhow::ensure!(
            !number.is_empty(),
            "`AccountId` number part (after '-') cannot be empty"
        );
        Ok(Self(Ustr::from(value)))
    }

    /// Creates a new [`AccountId`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a valid account ID string.
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self::new_checked(value).expect("valid account ID")
    }

    /// Returns the issuer (venue) portion of the account ID.
    #[must_use]
    pub fn issuer(&self) -> Venue {
        // SAFETY: separator presence checked at construction
        let (issuer, _) = self.0.split_once('-').expect("account ID contains '-'");
        Venue::new(issuer)
    }

    /// Returns the inner identifier value.
    #[must_use]
    pub fn inner(&self) -> Ustr {
        self.0
    }

    /// Returns the inner identifier value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Debug for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn issuer_is_venue_part() {
        let account_id = AccountId::from("BITMEX-1513111");
        assert_eq!(account_id.issuer(), Venue::from("BITMEX"));
    }

    #[rstest]
    #[case("NOHYPHEN")]
    #[case("-123")]
    #[case("SIM-")]
    fn new_checked_rejects_malformed(#[case] value: &str) {
        assert!(AccountId::new_checked(value).is_err());
    }
}
