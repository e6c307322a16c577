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

//! Ticket requests.
//!
//! A purchase is an ordered list of [`TicketRequest`]s. Requests of the same
//! category are not merged; their counts are summed by [`TicketTally`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of ticket, which decides its price and whether it takes a seat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Upper-case name, as used in CSV input and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }

    /// Infants sit on an adult's lap.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known ticket category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ticket category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for TicketCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// An immutable request for `count` tickets of one category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketRequest {
    category: TicketCategory,
    count: u32,
}

impl TicketRequest {
    /// Creates a request. A count of zero is allowed.
    pub fn new(category: TicketCategory, count: u32) -> Self {
        Self { category, count }
    }

    pub fn adult(count: u32) -> Self {
        Self::new(TicketCategory::Adult, count)
    }

    pub fn child(count: u32) -> Self {
        Self::new(TicketCategory::Child, count)
    }

    pub fn infant(count: u32) -> Self {
        Self::new(TicketCategory::Infant, count)
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Per-category ticket counts summed over a whole purchase.
///
/// Sums are widened to `u64` and saturate, so no request list can wrap
/// a count back under the ticket ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketTally {
    pub adults: u64,
    pub children: u64,
    pub infants: u64,
}

impl TicketTally {
    /// Sums the counts of `requests` per category.
    pub fn from_requests(requests: &[TicketRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut tally, request| {
            let count = u64::from(request.count());
            let slot = match request.category() {
                TicketCategory::Adult => &mut tally.adults,
                TicketCategory::Child => &mut tally.children,
                TicketCategory::Infant => &mut tally.infants,
            };
            *slot = slot.saturating_add(count);
            tally
        })
    }

    /// Summed count for one category.
    pub fn count_of(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adults,
            TicketCategory::Child => self.children,
            TicketCategory::Infant => self.infants,
        }
    }

    /// Tickets across all categories, infants included.
    pub fn total(&self) -> u64 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    /// Tickets that need a seat of their own.
    pub fn seated(&self) -> u64 {
        TicketCategory::ALL
            .iter()
            .filter(|category| category.occupies_seat())
            .fold(0u64, |acc, category| acc.saturating_add(self.count_of(*category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categories_case_insensitively() {
        assert_eq!("adult".parse::<TicketCategory>(), Ok(TicketCategory::Adult));
        assert_eq!(" Child ".parse::<TicketCategory>(), Ok(TicketCategory::Child));
        assert_eq!("INFANT".parse::<TicketCategory>(), Ok(TicketCategory::Infant));
        assert_eq!(
            "senior".parse::<TicketCategory>(),
            Err(UnknownCategory("senior".to_string()))
        );
    }

    #[test]
    fn category_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&TicketCategory::Infant).unwrap(),
            "\"INFANT\""
        );
        assert_eq!(TicketCategory::Child.to_string(), "CHILD");
    }

    #[test]
    fn tally_sums_repeated_categories() {
        let requests = [
            TicketRequest::adult(2),
            TicketRequest::child(1),
            TicketRequest::adult(3),
            TicketRequest::infant(1),
            TicketRequest::child(0),
        ];
        let tally = TicketTally::from_requests(&requests);

        assert_eq!(tally.adults, 5);
        assert_eq!(tally.children, 1);
        assert_eq!(tally.infants, 1);
        assert_eq!(tally.total(), 7);
        assert_eq!(tally.seated(), 6);
    }

    #[test]
    fn empty_tally_is_zero() {
        let tally = TicketTally::from_requests(&[]);
        assert_eq!(tally, TicketTally::default());
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn tally_does_not_wrap_on_huge_counts() {
        let requests = vec![TicketRequest::adult(u32::MAX); 4];
        let tally = TicketTally::from_requests(&requests);
        assert_eq!(tally.adults, 4 * u64::from(u32::MAX));
        assert!(tally.total() > 20);
    }
}
