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

//! Error types for ticket purchases.

use thiserror::Error;

/// Business rule broken by an otherwise well-formed purchase.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseViolation {
    /// Purchase contains no adult request
    #[error("{}", PurchaseViolation::NO_ADULT_TICKET)]
    NoAdultTicket,

    /// More tickets than the policy allows in one purchase
    #[error("{}", PurchaseViolation::MAX_TICKETS_EXCEEDED)]
    MaxTicketsExceeded,

    /// Every infant needs an accompanying adult
    #[error("{}", PurchaseViolation::INFANTS_EXCEED_ADULTS)]
    InfantsExceedAdults,
}

impl PurchaseViolation {
    pub const NO_ADULT_TICKET: &'static str = "No adult ticket";
    pub const MAX_TICKETS_EXCEEDED: &'static str = "Max number of allowed tickets exceeded";
    pub const INFANTS_EXCEED_ADULTS: &'static str =
        "Number of infant tickets exceeds number of adult tickets";

    /// Human-readable reason, identical to the `Display` output.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NoAdultTicket => Self::NO_ADULT_TICKET,
            Self::MaxTicketsExceeded => Self::MAX_TICKETS_EXCEEDED,
            Self::InfantsExceedAdults => Self::INFANTS_EXCEED_ADULTS,
        }
    }
}

/// Purchase errors.
///
/// Neither kind is retried; both are returned to the caller before any
/// payment or reservation is made.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    /// Account identifier is zero or negative
    #[error("{}", PurchaseError::INVALID_ACCOUNT_ID)]
    InvalidAccount,

    /// Ticket mix breaks a purchase rule
    #[error("{0}")]
    InvalidPurchase(PurchaseViolation),
}

impl PurchaseError {
    pub const INVALID_ACCOUNT_ID: &'static str = "Invalid account id";

    /// Human-readable reason, identical to the `Display` output.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidAccount => Self::INVALID_ACCOUNT_ID,
            Self::InvalidPurchase(violation) => violation.reason(),
        }
    }

    /// Returns `true` for a rejected account identifier.
    pub fn is_account_error(&self) -> bool {
        matches!(self, Self::InvalidAccount)
    }

    /// Returns `true` for a ticket mix that breaks a purchase rule.
    pub fn is_purchase_error(&self) -> bool {
        matches!(self, Self::InvalidPurchase(_))
    }
}

impl From<PurchaseViolation> for PurchaseError {
    fn from(violation: PurchaseViolation) -> Self {
        Self::InvalidPurchase(violation)
    }
}
