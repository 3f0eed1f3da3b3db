//! Flat CSV export of categorized transactions.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;
use fintrack_core::Transaction;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

pub const COLUMNS: [&str; 8] = [
    "Date",
    "Description",
    "Category",
    "Price",
    "Price USD",
    "Price CRC",
    "Bank",
    "Card",
];

/// One output row, in `COLUMNS` order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub date: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub price_usd: String,
    pub price_crc: String,
    pub bank: String,
    pub card: String,
}

impl ExportRow {
    /// `tz` decides which calendar day the transaction falls on.
    pub fn from_transaction(txn: &Transaction, tz: Tz) -> Self {
        Self {
            date: txn.timestamp.with_timezone(&tz).format("%Y-%m-%d").to_string(),
            description: txn.description.clone(),
            category: txn.category.clone(),
            price: txn.amount_raw.clone(),
            price_usd: txn.amount_usd.to_string(),
            price_crc: txn.amount_crc.to_string(),
            bank: txn.bank.clone(),
            card: txn.card.clone(),
        }
    }
}

/// Write the header and one row per transaction.
pub fn write_transactions<W: Write>(writer: W, txns: &[Transaction], tz: Tz) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(COLUMNS)?;
    for txn in txns {
        wtr.serialize(ExportRow::from_transaction(txn, tz))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export to `path`. Nothing is written for an empty list.
pub fn export_csv(path: impl AsRef<Path>, txns: &[Transaction], tz: Tz) -> Result<usize> {
    let path = path.as_ref();
    if txns.is_empty() {
        warn!("no data to export");
        return Ok(0);
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_transactions(file, txns, tz)
        .with_context(|| format!("writing {}", path.display()))?;

    info!(rows = txns.len(), path = %path.display(), "exported transactions");
    Ok(txns.len())
}

pub fn default_file_name(today: NaiveDate) -> String {
    format!("Finance-{}.csv", today.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use fintrack_core::TransactionKind;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn txn(timestamp: &str) -> Transaction {
        Transaction {
            timestamp: DateTime::parse_from_rfc3339(timestamp).unwrap(),
            description: "Starbucks, Escazú".to_string(),
            category: "Coffee".to_string(),
            amount_raw: "CRC 4,500.00".to_string(),
            amount_usd: Decimal::ZERO,
            amount_crc: Decimal::from_str("4500.00").unwrap(),
            bank: "BAC".to_string(),
            card: "1234".to_string(),
            kind: TransactionKind::CardMovement,
        }
    }

    #[test]
    fn test_row_columns() {
        let row = ExportRow::from_transaction(
            &txn("2024-03-05T14:30:00-06:00"),
            chrono_tz::America::Costa_Rica,
        );
        assert_eq!(row.date, "2024-03-05");
        assert_eq!(row.price, "CRC 4,500.00");
        assert_eq!(row.price_usd, "0");
        assert_eq!(row.price_crc, "4500.00");
    }

    #[test]
    fn test_date_follows_display_zone() {
        // 23:30 in Costa Rica is already the next day in UTC.
        let t = txn("2024-03-05T23:30:00-06:00");
        assert_eq!(ExportRow::from_transaction(&t, chrono_tz::UTC).date, "2024-03-06");
        assert_eq!(
            ExportRow::from_transaction(&t, chrono_tz::America::Costa_Rica).date,
            "2024-03-05"
        );
    }

    #[test]
    fn test_write_quotes_commas() {
        let mut out = Vec::new();
        write_transactions(&mut out, &[txn("2024-03-05T14:30:00-06:00")], chrono_tz::UTC).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Date,Description,Category,Price,Price USD,Price CRC,Bank,Card")
        );
        assert_eq!(
            lines.next(),
            Some("2024-03-05,\"Starbucks, Escazú\",Coffee,\"CRC 4,500.00\",0,4500.00,BAC,1234")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_default_file_name() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(default_file_name(d), "Finance-2024-03-05.csv");
    }
}
