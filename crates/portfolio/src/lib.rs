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

//! The single authoritative exposure view across trading venues.
//!
//! The [`Portfolio`](crate::Portfolio) consumes instrument definitions, quotes,
//! order and position events, and rolls required margin up into each venue's
//! account. It is incrementally updated on every relevant event and never fully
//! recomputed except on reset.
//!
//! A portfolio instance has a single logical owner: the caller sequences
//! mutations and dependent reads, no internal locking is performed.

pub mod portfolio;
pub mod xrate;

pub use portfolio::Portfolio;
pub use xrate::ExchangeRateProvider;
