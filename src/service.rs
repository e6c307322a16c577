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

//! Ticket purchase service.
//!
//! The [`TicketService`] validates a purchase, prices it, and dispatches the
//! payment and seat reservation to its collaborators.
//!
//! # Validation
//!
//! Rules are checked in a fixed order and the first failure is returned:
//!
//! 1. The account id must be positive.
//! 2. At least one request must be for the adult category.
//! 3. The total number of tickets must not exceed the policy ceiling.
//! 4. There must be no more infants than adults.
//!
//! # Dispatch
//!
//! A valid purchase charges adults and children at policy prices (infants
//! are free by default) and reserves one seat per adult and child. Payment
//! is always taken before seats are reserved. Nothing is dispatched for a
//! rejected purchase.

use crate::base::AccountId;
use crate::collaborator::{SeatReservationService, TicketPaymentService};
use crate::error::{PurchaseError, PurchaseViolation};
use crate::policy::PurchasePolicy;
use crate::ticket::{TicketCategory, TicketRequest, TicketTally};
use serde::Serialize;

/// Outcome of a dispatched purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    pub account_id: AccountId,
    pub amount: u64,
    pub seats: u32,
}

/// Validates ticket purchases and dispatches them to payment and
/// reservation services.
///
/// The service keeps no state between calls: two identical purchases are
/// charged and reserved twice.
pub struct TicketService<P, R> {
    payments: P,
    reservations: R,
    policy: PurchasePolicy,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    /// Creates a service with the default [`PurchasePolicy`].
    pub fn new(payments: P, reservations: R) -> Self {
        Self::with_policy(payments, reservations, PurchasePolicy::default())
    }

    /// Creates a service that prices and caps purchases with `policy`.
    pub fn with_policy(payments: P, reservations: R, policy: PurchasePolicy) -> Self {
        TicketService {
            payments,
            reservations,
            policy,
        }
    }

    /// Policy applied to every purchase.
    pub fn policy(&self) -> &PurchasePolicy {
        &self.policy
    }

    /// Purchases tickets for an account.
    ///
    /// On success exactly one payment and then exactly one reservation are
    /// issued, and the amounts are returned in a [`PurchaseReceipt`].
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::InvalidAccount`] - Account id is zero or negative.
    /// - [`PurchaseError::InvalidPurchase`] - No adult ticket, too many
    ///   tickets, or more infants than adults.
    pub fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let tally = match self.validate(account_id, requests) {
            Ok(tally) => tally,
            Err(e) => {
                tracing::debug!(account = %account_id, reason = e.reason(), "purchase rejected");
                return Err(e);
            }
        };

        // The ceiling is a u32, so both figures fit once validation passed.
        let (Some(amount), Some(seats)) = (
            self.policy.payable_amount(&tally),
            self.policy.seats_to_allocate(&tally),
        ) else {
            return Err(PurchaseError::from(PurchaseViolation::MaxTicketsExceeded));
        };

        self.payments.make_payment(account_id, amount);
        self.reservations.reserve_seat(account_id, seats);

        tracing::info!(account = %account_id, amount, seats, "purchase dispatched");

        Ok(PurchaseReceipt {
            account_id,
            amount,
            seats,
        })
    }

    /// Runs every purchase rule without dispatching anything.
    ///
    /// # Errors
    ///
    /// Same as [`purchase_tickets`](Self::purchase_tickets).
    pub fn validate(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<TicketTally, PurchaseError> {
        if !account_id.is_valid() {
            return Err(PurchaseError::InvalidAccount);
        }

        // Presence of an adult request, not a positive adult count.
        if !requests
            .iter()
            .any(|request| request.category() == TicketCategory::Adult)
        {
            return Err(PurchaseError::from(PurchaseViolation::NoAdultTicket));
        }

        let tally = TicketTally::from_requests(requests);

        if tally.total() > u64::from(self.policy.max_tickets) {
            return Err(PurchaseError::from(PurchaseViolation::MaxTicketsExceeded));
        }
        if tally.infants > tally.adults {
            return Err(PurchaseError::from(PurchaseViolation::InfantsExceedAdults));
        }

        Ok(tally)
    }
}
