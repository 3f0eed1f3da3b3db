use chrono::DateTime;
use fintrack_core::{Transaction, TransactionKind};
use fintrack_export::{COLUMNS, export_csv};
use rust_decimal::Decimal;
use std::str::FromStr;

fn sample(description: &str, usd: &str, crc: &str) -> Transaction {
    Transaction {
        timestamp: DateTime::parse_from_rfc2822("Tue, 05 Mar 2024 14:30:00 -0600").unwrap(),
        description: description.to_string(),
        category: String::new(),
        amount_raw: format!("USD {usd}"),
        amount_usd: Decimal::from_str(usd).unwrap(),
        amount_crc: Decimal::from_str(crc).unwrap(),
        bank: "Davibank".to_string(),
        card: "4321".to_string(),
        kind: TransactionKind::CardMovement,
    }
}

#[test]
fn test_export_round_trips_through_csv_reader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Finance-2024-03-05.csv");
    let txns = vec![sample("AMAZON", "12.99", "0"), sample("NETFLIX", "15.49", "0")];

    let written = export_csv(&path, &txns, chrono_tz::America::Costa_Rica).unwrap();
    assert_eq!(written, 2);

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, COLUMNS);

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][1], "AMAZON");
    assert_eq!(&rows[0][2], "");
    assert_eq!(&rows[1][4], "15.49");
    assert_eq!(&rows[1][6], "Davibank");
}

#[test]
fn test_empty_export_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    assert_eq!(export_csv(&path, &[], chrono_tz::UTC).unwrap(), 0);
    assert!(!path.exists());
}
