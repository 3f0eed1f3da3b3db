//! Transaction records produced by the bank parsers.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Amounts;
use crate::rules::RuleSet;

/// Card column value when the notification does not name a card.
pub const UNKNOWN_CARD: &str = "?";

/// Separator between a peer transfer's reason and its counterparty.
pub const TRANSFER_MARKER: &str = " | TRANSFER → ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    CardMovement,
    #[serde(rename = "sinpe_movil")]
    PeerTransfer,
    #[serde(rename = "atm_withdrawal")]
    Withdrawal,
    Deposit,
    Transfer,
}

/// Fields pulled out of one email, before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTransaction {
    pub kind: TransactionKind,
    pub timestamp: DateTime<FixedOffset>,
    pub description: String,
    pub amount_raw: String,
    pub amounts: Amounts,
    pub bank: &'static str,
    pub card: String,
}

impl RawTransaction {
    /// Attach a category and freeze the record.
    pub fn classify(self, rules: &RuleSet) -> Transaction {
        let category = rules.classify(&self.description).to_string();
        Transaction {
            timestamp: self.timestamp,
            description: self.description,
            category,
            amount_raw: self.amount_raw,
            amount_usd: self.amounts.usd,
            amount_crc: self.amounts.crc,
            bank: self.bank.to_string(),
            card: self.card,
            kind: self.kind,
        }
    }
}

/// A finished, categorized transaction. Field order follows the export
/// columns: Date, Description, Category, Price, Price USD, Price CRC, Bank, Card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub timestamp: DateTime<FixedOffset>,
    pub description: String,
    /// Empty when no rule matched.
    pub category: String,
    /// Amount exactly as it appeared in the email.
    pub amount_raw: String,
    pub amount_usd: Decimal,
    pub amount_crc: Decimal,
    pub bank: String,
    pub card: String,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn is_categorized(&self) -> bool {
        !self.category.is_empty()
    }

    /// Declined or unrecognized-currency records carry no money.
    pub fn has_amount(&self) -> bool {
        !(self.amount_usd.is_zero() && self.amount_crc.is_zero())
    }
}

/// Description for a peer transfer: the reason, then the counterparty.
pub fn transfer_description(reason: &str, destination: &str) -> String {
    format!("{}{}{}", reason.trim(), TRANSFER_MARKER, destination.trim())
}
