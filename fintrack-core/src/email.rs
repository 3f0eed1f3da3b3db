use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A fetched notification email, as handed over by the mailbox exporter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundEmail {
    pub sender: String,
    pub subject: String,
    /// RFC 2822 delivery time, e.g. `Tue, 05 Mar 2024 14:30:00 -0600`.
    pub date: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub html_body: Option<String>,
}

impl InboundEmail {
    pub fn delivered_at(&self) -> Result<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(self.date.trim()).map_err(|source| {
            EngineError::InvalidDeliveryDate {
                raw: self.date.clone(),
                source,
            }
        })
    }

    pub fn sender_contains(&self, fragment: &str) -> bool {
        self.sender.to_lowercase().contains(fragment)
    }

    pub fn subject_contains(&self, phrase: &str) -> bool {
        self.subject.to_lowercase().contains(phrase)
    }
}
