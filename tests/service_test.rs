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

//! TicketService public API integration tests.

use std::sync::Arc;
use ticket_service_rs::{
    AccountId, Dispatch, DispatchLog, PaymentLedger, PurchaseError, PurchaseViolation,
    SeatRegistry, TicketRequest, TicketService,
};

// === Helper Functions ===

struct Harness {
    log: Arc<DispatchLog>,
    service: TicketService<PaymentLedger, SeatRegistry>,
}

fn harness() -> Harness {
    let log = Arc::new(DispatchLog::new());
    let service = TicketService::new(
        PaymentLedger::with_log(Arc::clone(&log)),
        SeatRegistry::with_log(Arc::clone(&log)),
    );
    Harness { log, service }
}

fn payment(account: i64, amount: u64) -> Dispatch {
    Dispatch::Payment {
        account_id: AccountId(account),
        amount,
    }
}

fn reservation(account: i64, seats: u32) -> Dispatch {
    Dispatch::Reservation {
        account_id: AccountId(account),
        seats,
    }
}

// === Successful Purchases ===

#[test]
fn valid_purchase_pays_then_reserves() {
    let h = harness();
    let requests = [
        TicketRequest::adult(3),
        TicketRequest::child(2),
        TicketRequest::infant(2),
    ];

    let receipt = h.service.purchase_tickets(AccountId(1), &requests).unwrap();

    assert_eq!(receipt.account_id, AccountId(1));
    assert_eq!(receipt.amount, 80);
    assert_eq!(receipt.seats, 5);
    assert_eq!(h.log.snapshot(), vec![payment(1, 80), reservation(1, 5)]);
}

#[test]
fn adults_only_purchase() {
    let h = harness();
    let receipt = h
        .service
        .purchase_tickets(AccountId(9), &[TicketRequest::adult(1)])
        .unwrap();

    assert_eq!(receipt.amount, 20);
    assert_eq!(receipt.seats, 1);
    assert_eq!(h.log.snapshot(), vec![payment(9, 20), reservation(9, 1)]);
}

#[test]
fn repeated_categories_are_summed() {
    let h = harness();
    let requests = [
        TicketRequest::adult(1),
        TicketRequest::child(1),
        TicketRequest::adult(2),
        TicketRequest::child(3),
    ];

    let receipt = h.service.purchase_tickets(AccountId(2), &requests).unwrap();

    assert_eq!(receipt.amount, 3 * 20 + 4 * 10);
    assert_eq!(receipt.seats, 7);
}

#[test]
fn identical_purchases_dispatch_twice() {
    let h = harness();
    let requests = [TicketRequest::adult(2), TicketRequest::child(1)];

    h.service.purchase_tickets(AccountId(1), &requests).unwrap();
    h.service.purchase_tickets(AccountId(1), &requests).unwrap();

    assert_eq!(
        h.log.snapshot(),
        vec![
            payment(1, 50),
            reservation(1, 3),
            payment(1, 50),
            reservation(1, 3),
        ]
    );
}

// === Account Validation ===

#[test]
fn negative_account_with_no_requests_is_invalid_account() {
    let h = harness();
    let result = h.service.purchase_tickets(AccountId(-1), &[]);

    assert_eq!(result, Err(PurchaseError::InvalidAccount));
    assert!(h.log.is_empty());
}

#[test]
fn zero_account_is_invalid_even_for_valid_tickets() {
    let h = harness();
    let result = h
        .service
        .purchase_tickets(AccountId(0), &[TicketRequest::adult(2)]);

    let err = result.unwrap_err();
    assert!(err.is_account_error());
    assert_eq!(err.to_string(), "Invalid account id");
    assert!(h.log.is_empty());
}

// === Purchase Validation ===

#[test]
fn empty_purchase_has_no_adult() {
    let h = harness();
    let result = h.service.purchase_tickets(AccountId(1), &[]);

    assert_eq!(
        result,
        Err(PurchaseError::InvalidPurchase(PurchaseViolation::NoAdultTicket))
    );
    assert!(h.log.is_empty());
}

#[test]
fn children_and_infants_without_adult_rejected() {
    let h = harness();
    let result = h.service.purchase_tickets(
        AccountId(1),
        &[TicketRequest::child(2), TicketRequest::infant(1)],
    );

    assert_eq!(result.unwrap_err().reason(), "No adult ticket");
    assert!(h.log.is_empty());
}

#[test]
fn twenty_one_tickets_exceeds_ceiling() {
    let h = harness();
    let result = h.service.purchase_tickets(
        AccountId(1),
        &[
            TicketRequest::adult(10),
            TicketRequest::child(10),
            TicketRequest::infant(1),
        ],
    );

    assert_eq!(
        result.unwrap_err().to_string(),
        "Max number of allowed tickets exceeded"
    );
    assert!(h.log.is_empty());
}

#[test]
fn infants_count_towards_ceiling() {
    let h = harness();
    let result = h.service.purchase_tickets(
        AccountId(1),
        &[TicketRequest::adult(11), TicketRequest::infant(10)],
    );

    assert_eq!(
        result,
        Err(PurchaseError::from(PurchaseViolation::MaxTicketsExceeded))
    );
}

#[test]
fn more_infants_than_adults_rejected() {
    let h = harness();
    let result = h.service.purchase_tickets(
        AccountId(1),
        &[
            TicketRequest::adult(4),
            TicketRequest::child(10),
            TicketRequest::infant(6),
        ],
    );

    assert_eq!(
        result.unwrap_err().reason(),
        "Number of infant tickets exceeds number of adult tickets"
    );
    assert!(h.log.is_empty());
}

#[test]
fn rejection_does_not_affect_later_purchases() {
    let h = harness();
    assert!(
        h.service
            .purchase_tickets(AccountId(1), &[TicketRequest::child(1)])
            .is_err()
    );

    h.service
        .purchase_tickets(AccountId(1), &[TicketRequest::adult(1)])
        .unwrap();

    assert_eq!(h.log.snapshot(), vec![payment(1, 20), reservation(1, 1)]);
}

#[test]
fn validate_dispatches_nothing() {
    let h = harness();
    let tally = h
        .service
        .validate(AccountId(1), &[TicketRequest::adult(2), TicketRequest::infant(1)])
        .unwrap();

    assert_eq!(tally.adults, 2);
    assert_eq!(tally.infants, 1);
    assert!(h.log.is_empty());
}

#[test]
fn zero_count_adult_request_counts_as_adult_present() {
    let h = harness();
    let receipt = h
        .service
        .purchase_tickets(
            AccountId(1),
            &[TicketRequest::adult(0), TicketRequest::child(2)],
        )
        .unwrap();

    assert_eq!(receipt.amount, 20);
    assert_eq!(receipt.seats, 2);
    assert_eq!(h.log.snapshot(), vec![payment(1, 20), reservation(1, 2)]);
}
