//! Loading the inputs the engine runs on: exported emails and the rule file.

use anyhow::{Context, Result};
use fintrack_core::{InboundEmail, RuleSet};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read a JSON array of emails as written by the mailbox exporter.
pub fn load_emails(path: &Path) -> Result<Vec<InboundEmail>> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let emails: Vec<InboundEmail> =
        serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    info!(count = emails.len(), path = %path.display(), "loaded emails");
    Ok(emails)
}

/// Read the rule file. A missing file means every transaction stays
/// uncategorized, which is allowed.
pub fn load_rules(path: &Path) -> Result<RuleSet> {
    if !path.exists() {
        warn!(path = %path.display(), "rule file not found, categories will be empty");
        return Ok(RuleSet::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let rules = RuleSet::parse(&s);
    info!(categories = rules.len(), path = %path.display(), "loaded rules");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_emails() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("emails.json");
        fs::write(
            &p,
            r#"[
  {"sender": "bcrtarjestcta@bancobcr.com", "subject": "Notificación de transacciones",
   "date": "Tue, 05 Mar 2024 20:40:00 -0600", "html_body": "<table></table>"},
  {"sender": "x@y.z", "subject": "", "date": "", "body": "hola"}
]"#,
        )
        .unwrap();
        let emails = load_emails(&p).unwrap();
        assert_eq!(emails.len(), 2);
        assert_eq!(emails[0].html_body.as_deref(), Some("<table></table>"));
        assert_eq!(emails[1].body, "hola");
    }

    #[test]
    fn test_malformed_emails_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("emails.json");
        fs::write(&p, "{not json").unwrap();
        assert!(load_emails(&p).is_err());
    }

    #[test]
    fn test_load_rules() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("classification.txt");
        fs::write(&p, "class: coffee\ninclude: starbucks\n").unwrap();
        let rules = load_rules(&p).unwrap();
        assert_eq!(rules.classify("STARBUCKS #12"), "Coffee");

        let missing = load_rules(&dir.path().join("nope.txt")).unwrap();
        assert!(missing.is_empty());
    }
}
