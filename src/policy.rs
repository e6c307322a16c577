// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Pricing and ticket ceiling for purchases.
//!
//! # Example
//!
//! ```
//! use ticket_service_rs::{PurchasePolicy, TicketCategory};
//!
//! let policy = PurchasePolicy::default();
//! assert_eq!(policy.price_of(TicketCategory::Adult), 20);
//! assert_eq!(policy.max_tickets, 20);
//! ```

use crate::ticket::{TicketCategory, TicketTally};
use serde::{Deserialize, Serialize};

/// Prices per category and the maximum number of tickets in one purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchasePolicy {
    pub adult_price: u32,
    pub child_price: u32,
    pub infant_price: u32,
    /// Ceiling on the total of all categories, infants included.
    pub max_tickets: u32,
}

impl PurchasePolicy {
    pub const ADULT_PRICE: u32 = 20;
    pub const CHILD_PRICE: u32 = 10;
    pub const INFANT_PRICE: u32 = 0;
    pub const MAX_TICKETS: u32 = 20;

    /// Price of a single ticket of `category`.
    pub fn price_of(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Adult => self.adult_price,
            TicketCategory::Child => self.child_price,
            TicketCategory::Infant => self.infant_price,
        }
    }

    /// Amount owed for a tally, or `None` if it does not fit in a `u64`.
    pub fn payable_amount(&self, tally: &TicketTally) -> Option<u64> {
        TicketCategory::ALL.iter().try_fold(0u64, |acc, category| {
            let line = tally
                .count_of(*category)
                .checked_mul(u64::from(self.price_of(*category)))?;
            acc.checked_add(line)
        })
    }

    /// Seats needed for a tally, or `None` if they do not fit in a `u32`.
    pub fn seats_to_allocate(&self, tally: &TicketTally) -> Option<u32> {
        u32::try_from(tally.seated()).ok()
    }
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self {
            adult_price: Self::ADULT_PRICE,
            child_price: Self::CHILD_PRICE,
            infant_price: Self::INFANT_PRICE,
            max_tickets: Self::MAX_TICKETS,
        }
    }
}
