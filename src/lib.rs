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

//! # Ticket Service
//!
//! This library validates ticket purchases for a venue, works out what the
//! purchase costs and how many seats it needs, and hands both figures to a
//! payment service and a seat reservation service.
//!
//! ## Core Components
//!
//! - [`TicketService`]: Validates a purchase and dispatches it
//! - [`TicketRequest`]: A (category, count) pair; a purchase is a list of them
//! - [`PurchasePolicy`]: Ticket prices and the per-purchase ceiling
//! - [`PurchaseError`]: Why a purchase was rejected
//! - [`TicketPaymentService`] / [`SeatReservationService`]: Collaborator seams
//! - [`PaymentLedger`] / [`SeatRegistry`]: In-memory collaborators
//!
//! ## Example
//!
//! ```
//! use ticket_service_rs::{
//!     AccountId, PaymentLedger, PurchaseError, SeatRegistry, TicketRequest, TicketService,
//! };
//!
//! let service = TicketService::new(PaymentLedger::new(), SeatRegistry::new());
//!
//! let receipt = service
//!     .purchase_tickets(
//!         AccountId(1),
//!         &[TicketRequest::adult(3), TicketRequest::child(2), TicketRequest::infant(2)],
//!     )
//!     .unwrap();
//! assert_eq!(receipt.amount, 80);
//! assert_eq!(receipt.seats, 5);
//!
//! let err = service.purchase_tickets(AccountId(-1), &[]).unwrap_err();
//! assert_eq!(err, PurchaseError::InvalidAccount);
//! ```
//!
//! ## Thread Safety
//!
//! [`TicketService`] holds no mutable state of its own. It is `Send + Sync`
//! whenever its collaborators are, and the in-memory collaborators are safe
//! to share across threads.

mod base;
pub mod collaborator;
mod dispatch_log;
pub mod error;
pub mod ledger;
mod policy;
mod service;
mod ticket;

pub use base::AccountId;
pub use collaborator::{
    NoopPaymentService, NoopSeatReservationService, SeatReservationService, TicketPaymentService,
};
pub use dispatch_log::{Dispatch, DispatchLog};
pub use error::{PurchaseError, PurchaseViolation};
pub use ledger::{AccountSummary, PaymentLedger, SeatRegistry, account_summaries};
pub use policy::PurchasePolicy;
pub use service::{PurchaseReceipt, TicketService};
pub use ticket::{TicketCategory, TicketRequest, TicketTally, UnknownCategory};
