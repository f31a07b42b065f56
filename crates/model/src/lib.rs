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

//! The financial-state domain model for the Meridian trading platform.
//!
//! Provides the value types, identifiers, events, instrument definitions and the
//! event-sourced account hierarchy consumed by the portfolio and risk crates.
//!
//! All entities in this crate assume a single logical owner: mutation methods perform
//! no internal locking and rely on the caller to serialize access (single-threaded
//! dispatch or an external mutex per instance). No operation blocks or performs I/O.

pub mod accounts;
pub mod data;
pub mod enums;
pub mod events;
pub mod identifiers;
pub mod instruments;
pub mod orders;
pub mod position;
pub mod types;

/// UNIX timestamp in nanoseconds since the epoch.
pub type UnixNanos = u64;
