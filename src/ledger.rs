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

//! In-memory payment and reservation services.
//!
//! [`PaymentLedger`] and [`SeatRegistry`] keep per-account totals in a
//! [`DashMap`], so a single instance can be shared by many threads. Either
//! can also append to a shared [`DispatchLog`] to keep the global call order.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ticket_service_rs::{
//!     AccountId, DispatchLog, PaymentLedger, SeatRegistry, TicketRequest, TicketService,
//! };
//!
//! let log = Arc::new(DispatchLog::new());
//! let payments = Arc::new(PaymentLedger::with_log(Arc::clone(&log)));
//! let seats = Arc::new(SeatRegistry::with_log(Arc::clone(&log)));
//! let service = TicketService::new(Arc::clone(&payments), Arc::clone(&seats));
//!
//! service
//!     .purchase_tickets(AccountId(1), &[TicketRequest::adult(2)])
//!     .unwrap();
//!
//! assert_eq!(payments.charged(AccountId(1)), 40);
//! assert_eq!(seats.reserved(AccountId(1)), 2);
//! assert_eq!(log.len(), 2);
//! ```

use crate::base::AccountId;
use crate::collaborator::{SeatReservationService, TicketPaymentService};
use crate::dispatch_log::{Dispatch, DispatchLog};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PaymentTotals {
    charged: u64,
    payments: u64,
}

/// Payment service that accumulates charges per account.
#[derive(Debug, Default)]
pub struct PaymentLedger {
    accounts: DashMap<AccountId, PaymentTotals>,
    log: Option<Arc<DispatchLog>>,
}

impl PaymentLedger {
    /// Creates an empty ledger with no log attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger that also appends every charge to `log`.
    pub fn with_log(log: Arc<DispatchLog>) -> Self {
        Self {
            accounts: DashMap::new(),
            log: Some(log),
        }
    }

    /// Total charged to an account, zero if it was never charged.
    pub fn charged(&self, account_id: AccountId) -> u64 {
        self.accounts
            .get(&account_id)
            .map(|totals| totals.charged)
            .unwrap_or_default()
    }

    /// Number of payments taken from an account.
    pub fn payments(&self, account_id: AccountId) -> u64 {
        self.accounts
            .get(&account_id)
            .map(|totals| totals.payments)
            .unwrap_or_default()
    }

    /// Sum of all charges across all accounts.
    pub fn total_charged(&self) -> u64 {
        self.accounts
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(entry.charged))
    }

    /// Accounts charged at least once, in no particular order.
    pub fn accounts(&self) -> Vec<AccountId> {
        self.accounts.iter().map(|entry| *entry.key()).collect()
    }
}

impl TicketPaymentService for PaymentLedger {
    fn make_payment(&self, account_id: AccountId, amount: u64) {
        tracing::trace!(account = %account_id, amount, "payment taken");

        // Record in the log while the entry lock is held so the log order
        // matches the order of updates to the account.
        let mut totals = self.accounts.entry(account_id).or_default();
        totals.charged = totals.charged.saturating_add(amount);
        totals.payments += 1;
        if let Some(log) = &self.log {
            log.record(Dispatch::Payment { account_id, amount });
        }
    }
}

/// Reservation service that accumulates booked seats per account.
#[derive(Debug, Default)]
pub struct SeatRegistry {
    accounts: DashMap<AccountId, u64>,
    log: Option<Arc<DispatchLog>>,
}

impl SeatRegistry {
    /// Creates an empty registry with no log attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry that also appends every booking to `log`.
    pub fn with_log(log: Arc<DispatchLog>) -> Self {
        Self {
            accounts: DashMap::new(),
            log: Some(log),
        }
    }

    /// Seats booked for an account, zero if none.
    pub fn reserved(&self, account_id: AccountId) -> u64 {
        self.accounts
            .get(&account_id)
            .map(|seats| *seats)
            .unwrap_or_default()
    }

    /// Sum of all seats booked across all accounts.
    pub fn total_reserved(&self) -> u64 {
        self.accounts
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(*entry.value()))
    }

    /// Accounts with at least one booking, in no particular order.
    pub fn accounts(&self) -> Vec<AccountId> {
        self.accounts.iter().map(|entry| *entry.key()).collect()
    }
}

impl SeatReservationService for SeatRegistry {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        tracing::trace!(account = %account_id, seats, "seats reserved");

        let mut reserved = self.accounts.entry(account_id).or_default();
        *reserved = reserved.saturating_add(u64::from(seats));
        if let Some(log) = &self.log {
            log.record(Dispatch::Reservation { account_id, seats });
        }
    }
}

/// Per-account totals across both services, as written by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    #[serde(rename = "account")]
    pub account_id: AccountId,
    pub charged: u64,
    pub payments: u64,
    pub seats: u64,
}

/// Builds one summary per account known to either service, sorted by id.
pub fn account_summaries(payments: &PaymentLedger, seats: &SeatRegistry) -> Vec<AccountSummary> {
    let mut ids = payments.accounts();
    ids.extend(seats.accounts());
    ids.sort_unstable();
    ids.dedup();

    ids.into_iter()
        .map(|account_id| AccountSummary {
            account_id,
            charged: payments.charged(account_id),
            payments: payments.payments(account_id),
            seats: seats.reserved(account_id),
        })
        .collect()
}
