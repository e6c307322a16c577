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

//! Thread-safe, append-only record of collaborator calls.
//!
//! Preserves the order in which payments and reservations were issued, so
//! callers can check that every reservation follows its payment.

use crate::base::AccountId;
use parking_lot::Mutex;
use serde::Serialize;

/// One call issued to a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Dispatch {
    Payment { account_id: AccountId, amount: u64 },
    Reservation { account_id: AccountId, seats: u32 },
}

impl Dispatch {
    /// Account the call was made for.
    pub fn account_id(&self) -> AccountId {
        match self {
            Self::Payment { account_id, .. } => *account_id,
            Self::Reservation { account_id, .. } => *account_id,
        }
    }
}

/// Ordered log of [`Dispatch`]es.
///
/// A single [`Mutex`] guards the entries; each append is one short
/// critical section, so concurrent writers see a total order.
#[derive(Debug, Default)]
pub struct DispatchLog {
    entries: Mutex<Vec<Dispatch>>,
}

impl DispatchLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `dispatch` after every entry recorded so far.
    pub fn record(&self, dispatch: Dispatch) {
        self.entries.lock().push(dispatch);
    }

    /// Number of entries recorded.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Copy of all entries in issue order.
    pub fn snapshot(&self) -> Vec<Dispatch> {
        self.entries.lock().clone()
    }

    /// Entries for one account, in issue order.
    pub fn for_account(&self, account_id: AccountId) -> Vec<Dispatch> {
        self.entries
            .lock()
            .iter()
            .filter(|dispatch| dispatch.account_id() == account_id)
            .copied()
            .collect()
    }
}
