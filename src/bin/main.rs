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

use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;
use ticket_service_rs::{
    AccountId, PaymentLedger, PurchasePolicy, SeatRegistry, SeatReservationService,
    TicketCategory, TicketPaymentService, TicketRequest, TicketService, account_summaries,
};
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Ticket Service - Process ticket purchase CSV files
///
/// Reads purchase rows from a CSV file, validates and dispatches each
/// purchase, and writes a report to stdout.
#[derive(Parser, Debug)]
#[command(name = "ticket-service-rs")]
#[command(about = "Validates and prices ticket purchases from a CSV", long_about = None)]
struct Args {
    /// Path to CSV file with purchase rows
    ///
    /// Expected format: purchase,account,type,count
    /// Example: cargo run -- purchases.csv > report.csv
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Write per-account totals instead of the per-purchase report
    #[arg(long)]
    accounts: bool,

    /// Price of an adult ticket
    #[arg(long, env = "TICKET_ADULT_PRICE", default_value_t = PurchasePolicy::ADULT_PRICE)]
    adult_price: u32,

    /// Price of a child ticket
    #[arg(long, env = "TICKET_CHILD_PRICE", default_value_t = PurchasePolicy::CHILD_PRICE)]
    child_price: u32,

    /// Price of an infant ticket
    #[arg(long, env = "TICKET_INFANT_PRICE", default_value_t = PurchasePolicy::INFANT_PRICE)]
    infant_price: u32,

    /// Maximum number of tickets in one purchase
    #[arg(long, env = "TICKET_MAX_TICKETS", default_value_t = PurchasePolicy::MAX_TICKETS)]
    max_tickets: u32,
}

impl Args {
    fn policy(&self) -> PurchasePolicy {
        PurchasePolicy {
            adult_price: self.adult_price,
            child_price: self.child_price,
            infant_price: self.infant_price,
            max_tickets: self.max_tickets,
        }
    }
}

fn main() {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticket_service_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            error!("Error opening file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let attempts = match read_attempts(BufReader::new(file)) {
        Ok(attempts) => attempts,
        Err(e) => {
            error!("Error reading purchases: {}", e);
            process::exit(1);
        }
    };

    let payments = PaymentLedger::new();
    let seats = SeatRegistry::new();
    let service = TicketService::with_policy(&payments, &seats, args.policy());
    let report = run_attempts(&service, &attempts);

    let written = if args.accounts {
        write_accounts(&payments, &seats, std::io::stdout())
    } else {
        write_report(&report, std::io::stdout())
    };
    if let Err(e) = written {
        error!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Raw CSV record matching the input format.
///
/// Fields: `purchase, account, type, count`
#[derive(Debug, Deserialize)]
struct CsvRecord {
    purchase: u32,
    account: i64,
    #[serde(rename = "type")]
    ticket_type: String,
    count: u32,
}

/// All rows sharing one purchase id, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PurchaseAttempt {
    purchase: u32,
    account_id: AccountId,
    requests: Vec<TicketRequest>,
}

/// Groups CSV rows into purchase attempts.
///
/// Attempts are returned in order of first appearance. Malformed rows, rows
/// with an unknown ticket type, and rows whose account disagrees with the
/// purchase's first row are skipped with a warning.
///
/// # Errors
///
/// Returns a CSV error only if the underlying reader fails.
fn read_attempts<R: Read>(reader: R) -> Result<Vec<PurchaseAttempt>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .has_headers(true)
        .from_reader(reader);

    let mut attempts: Vec<PurchaseAttempt> = Vec::new();
    let mut index: HashMap<u32, usize> = HashMap::new();

    for result in rdr.deserialize::<CsvRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e),
            Err(e) => {
                warn!("Skipping malformed row: {}", e);
                continue;
            }
        };

        let category = match record.ticket_type.parse::<TicketCategory>() {
            Ok(category) => category,
            Err(e) => {
                warn!(purchase = record.purchase, "Skipping row: {}", e);
                continue;
            }
        };
        let request = TicketRequest::new(category, record.count);
        let account_id = AccountId(record.account);

        match index.get(&record.purchase) {
            Some(&slot) => {
                let attempt = &mut attempts[slot];
                if attempt.account_id != account_id {
                    warn!(
                        purchase = record.purchase,
                        expected = %attempt.account_id,
                        found = %account_id,
                        "Skipping row with mismatched account"
                    );
                    continue;
                }
                attempt.requests.push(request);
            }
            None => {
                index.insert(record.purchase, attempts.len());
                attempts.push(PurchaseAttempt {
                    purchase: record.purchase,
                    account_id,
                    requests: vec![request],
                });
            }
        }
    }

    Ok(attempts)
}

/// One line of the purchase report.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct ReportRow {
    purchase: u32,
    account: AccountId,
    status: &'static str,
    amount: Option<u64>,
    seats: Option<u32>,
    reason: Option<&'static str>,
}

fn run_attempts<P, R>(service: &TicketService<P, R>, attempts: &[PurchaseAttempt]) -> Vec<ReportRow>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    attempts
        .iter()
        .map(
            |attempt| match service.purchase_tickets(attempt.account_id, &attempt.requests) {
                Ok(receipt) => ReportRow {
                    purchase: attempt.purchase,
                    account: attempt.account_id,
                    status: "accepted",
                    amount: Some(receipt.amount),
                    seats: Some(receipt.seats),
                    reason: None,
                },
                Err(e) => ReportRow {
                    purchase: attempt.purchase,
                    account: attempt.account_id,
                    status: "rejected",
                    amount: None,
                    seats: None,
                    reason: Some(e.reason()),
                },
            },
        )
        .collect()
}

/// Write the purchase report as CSV.
///
/// Columns: `purchase, account, status, amount, seats, reason`
///
/// # Errors
///
/// Returns a CSV error if writing fails.
fn write_report<W: Write>(rows: &[ReportRow], writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write per-account totals as CSV.
///
/// Columns: `account, charged, payments, seats`
///
/// # Errors
///
/// Returns a CSV error if writing fails.
fn write_accounts<W: Write>(
    payments: &PaymentLedger,
    seats: &SeatRegistry,
    writer: W,
) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);
    for summary in account_summaries(payments, seats) {
        wtr.serialize(summary)?;
    }
    wtr.flush()?;
    Ok(())
}
