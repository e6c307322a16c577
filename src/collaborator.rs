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

//! External services a purchase is dispatched to.
//!
//! Both services are treated as always succeeding: they return nothing and
//! the [`TicketService`](crate::TicketService) never inspects an outcome.

use crate::base::AccountId;
use std::sync::Arc;

/// Charges an account for a purchase.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(&self, account_id: AccountId, amount: u64);
}

/// Books seats for an account.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: AccountId, seats: u32);
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, amount: u64) {
        (**self).make_payment(account_id, amount);
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, amount: u64) {
        (**self).make_payment(account_id, amount);
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        (**self).reserve_seat(account_id, seats);
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        (**self).reserve_seat(account_id, seats);
    }
}

/// Payment service that accepts every charge and keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPaymentService;

impl TicketPaymentService for NoopPaymentService {
    fn make_payment(&self, _account_id: AccountId, _amount: u64) {}
}

/// Reservation service that accepts every booking and keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSeatReservationService;

impl SeatReservationService for NoopSeatReservationService {
    fn reserve_seat(&self, _account_id: AccountId, _seats: u32) {}
}
