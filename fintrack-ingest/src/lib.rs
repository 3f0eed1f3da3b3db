//! fintrack-ingest: bank identification and per-bank notification parsers.

pub mod batch;
pub mod markup;
pub mod parsers;
pub mod registry;
pub mod text;

pub use batch::{BatchOutcome, process_batch, process_email};
pub use markup::TableCursor;
pub use registry::{BankParser, REGISTRY, identify_bank};
