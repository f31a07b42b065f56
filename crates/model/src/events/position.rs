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

//! Position lifecycle events consumed by the portfolio.

use serde::{Deserialize, Serialize};

use crate::{identifiers::Venue, position::Position};

/// A position lifecycle event, carrying the position snapshot after the transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PositionEvent {
    /// A new position was opened.
    Opened(Position),
    /// An open position changed size (partial fill or partial reduction).
    Modified(Position),
    /// A position was fully closed.
    Closed(Position),
}

impl PositionEvent {
    /// Returns the position snapshot the event carries.
    #[must_use]
    pub fn position(&self) -> &Position {
        match self {
            Self::Opened(position) | Self::Modified(position) | Self::Closed(position) => position,
        }
    }

    /// Returns the venue associated with the event.
    #[must_use]
    pub fn venue(&self) -> Venue {
        self.position().instrument_id.venue
    }
}
