//! fintrack-core: transaction types, amount/date normalization and keyword
//! classification shared by the bank parsers.

pub mod currency;
pub mod date;
pub mod email;
pub mod error;
pub mod price;
pub mod rules;
pub mod transaction;

pub use currency::{Amounts, Currency};
pub use date::{DateFormat, DatePattern, normalize_date, parse_time_zone};
pub use email::InboundEmail;
pub use error::{EngineError, Result};
pub use price::normalize_price;
pub use rules::{CategoryRule, RuleSet, classify, normalize_description};
pub use transaction::{
    RawTransaction, Transaction, TransactionKind, TRANSFER_MARKER, UNKNOWN_CARD,
    transfer_description,
};
