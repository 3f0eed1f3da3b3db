//! fintrack-export: CSV output for categorized transactions.

pub mod csv_export;

pub use csv_export::{COLUMNS, ExportRow, default_file_name, export_csv, write_transactions};
