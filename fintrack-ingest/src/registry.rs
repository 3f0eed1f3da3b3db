//! Bank identification.
//!
//! Parsers are tried in [`REGISTRY`] order and the first sender match wins.
//! Sender fragments must stay mutually exclusive; the tests below enforce
//! that instead of resolving overlaps at runtime.

use fintrack_core::{InboundEmail, Result, RuleSet, Transaction, TransactionKind};

use crate::parsers::{bac, bcr, davibank, scotiabank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BankParser {
    Davibank,
    Bac,
    Bcr,
    Scotiabank,
}

pub const REGISTRY: [BankParser; 4] = [
    BankParser::Davibank,
    BankParser::Bac,
    BankParser::Bcr,
    BankParser::Scotiabank,
];

impl BankParser {
    pub fn name(&self) -> &'static str {
        match self {
            BankParser::Davibank => davibank::NAME,
            BankParser::Bac => bac::NAME,
            BankParser::Bcr => bcr::NAME,
            BankParser::Scotiabank => scotiabank::NAME,
        }
    }

    /// Lower-case fragment looked for in the sender address.
    pub fn sender_fragment(&self) -> &'static str {
        match self {
            BankParser::Davibank => davibank::SENDER,
            BankParser::Bac => bac::SENDER,
            BankParser::Bcr => bcr::SENDER,
            BankParser::Scotiabank => scotiabank::SENDER,
        }
    }

    pub fn identify(&self, email: &InboundEmail) -> bool {
        email.sender_contains(self.sender_fragment())
    }

    /// Kind of notification, judged from the subject line. `None` means this
    /// bank sent something that is not a transaction.
    pub fn transaction_kind(&self, email: &InboundEmail) -> Option<TransactionKind> {
        match self {
            BankParser::Davibank => davibank::transaction_kind(email),
            BankParser::Bac => bac::transaction_kind(email),
            BankParser::Bcr => bcr::transaction_kind(email),
            BankParser::Scotiabank => scotiabank::transaction_kind(email),
        }
    }

    /// Extract and classify the transaction in `email`.
    pub fn process(&self, email: &InboundEmail, rules: &RuleSet) -> Result<Option<Transaction>> {
        let Some(kind) = self.transaction_kind(email) else {
            return Ok(None);
        };
        let raw = match self {
            BankParser::Davibank => davibank::parse(email, kind)?,
            BankParser::Bac => bac::parse(email, kind)?,
            BankParser::Bcr => bcr::parse(email, kind)?,
            BankParser::Scotiabank => scotiabank::parse(email, kind)?,
        };
        Ok(Some(raw.classify(rules)))
    }
}

/// The parser responsible for `email`, if any.
pub fn identify_bank(email: &InboundEmail) -> Option<BankParser> {
    REGISTRY.into_iter().find(|parser| parser.identify(email))
}
