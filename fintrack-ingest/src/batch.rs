//! The per-email boundary: one bad message never stops a run.

use fintrack_core::{InboundEmail, Result, RuleSet, Transaction};
use tracing::{debug, info, warn};

use crate::registry::identify_bank;

/// Result of running a batch of emails through the parsers.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub transactions: Vec<Transaction>,
    pub emails_seen: usize,
    /// No registered bank sent it.
    pub unidentified: usize,
    /// A known bank sent it, but not as a transaction notification.
    pub not_transactions: usize,
    /// Extraction failed and the email was skipped.
    pub failed: usize,
}

impl BatchOutcome {
    pub fn extracted(&self) -> usize {
        self.transactions.len()
    }
}

/// Identify and parse a single email. `Ok(None)` covers both unknown senders
/// and non-transaction subjects.
pub fn process_email(email: &InboundEmail, rules: &RuleSet) -> Result<Option<Transaction>> {
    match identify_bank(email) {
        Some(parser) => parser.process(email, rules),
        None => Ok(None),
    }
}

pub fn process_batch(emails: &[InboundEmail], rules: &RuleSet) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for (i, email) in emails.iter().enumerate() {
        outcome.emails_seen += 1;

        let Some(parser) = identify_bank(email) else {
            debug!(index = i, sender = %email.sender, "no parser for sender");
            outcome.unidentified += 1;
            continue;
        };

        match parser.process(email, rules) {
            Ok(Some(txn)) => {
                debug!(
                    index = i,
                    bank = parser.name(),
                    description = %txn.description,
                    category = %txn.category,
                    "extracted transaction"
                );
                outcome.transactions.push(txn);
            }
            Ok(None) => {
                debug!(index = i, bank = parser.name(), subject = %email.subject, "not a transaction");
                outcome.not_transactions += 1;
            }
            Err(e) => {
                warn!(
                    index = i,
                    bank = parser.name(),
                    subject = %email.subject,
                    error = %e,
                    "skipping email"
                );
                outcome.failed += 1;
            }
        }
    }

    info!(
        extracted = outcome.extracted(),
        seen = outcome.emails_seen,
        failed = outcome.failed,
        "batch finished"
    );
    outcome
}
