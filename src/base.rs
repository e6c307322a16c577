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

//! Core identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the account a purchase is made for.
///
/// Wraps an `i64` so callers can hand over whatever they received; only
/// strictly positive values are accepted by [`TicketService`](crate::TicketService).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl AccountId {
    /// Returns `true` if the identifier is strictly positive.
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::AccountId;

    #[test]
    fn only_positive_ids_are_valid() {
        assert!(AccountId(1).is_valid());
        assert!(AccountId(i64::MAX).is_valid());
        assert!(!AccountId(0).is_valid());
        assert!(!AccountId(-1).is_valid());
        assert!(!AccountId(i64::MIN).is_valid());
    }

    #[test]
    fn serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&AccountId(42)).unwrap(), "42");
        let parsed: AccountId = serde_json::from_str("-7").unwrap();
        assert_eq!(parsed, AccountId(-7));
    }
}
