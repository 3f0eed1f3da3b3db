//! BAC Credomatic notifications (plain text, one labeled field per line).
//!
//! Card purchase body after blank-line collapsing:
//!   Comercio:
//!   STARBUCKS ESCAZU
//!   Fecha:
//!   Mar 5, 2024, 14:30
//!   Monto:
//!   CRC 4,500.00
//!   ************1234
//!   Autorización:
//!
//! SINPE Móvil transfers carry `Teléfono destino:` and `Motivo:` instead of
//! a merchant and card.

use fintrack_core::{
    Amounts, DateFormat, DatePattern, InboundEmail, RawTransaction, Result, TransactionKind,
    UNKNOWN_CARD, normalize_date, transfer_description,
};

use crate::markup::body_text;
use crate::text::{collapse_blank_lines, first_capture};

pub const NAME: &str = "BAC";
pub const SENDER: &str = "notificacionesbaccr";

const DESCRIPTION_PATTERN: &str = r"Comercio:[ \t]*\n(.*)\n";
const AMOUNT_PATTERN: &str = r"Monto:[ \t]*\n(.*)\n";
const CARD_PATTERN: &str = r"\*(\d+)[ \t]*\nAutorizaci";
const DESTINATION_PATTERN: &str = r"(?:Tel[eé]fono|N[uú]mero)(?: de)? destino:[ \t]*\n(.*)\n";
const REASON_PATTERN: &str = r"(?:Motivo|Descripci[oó]n):[ \t]*\n(.*)\n";

const DATE_FORMAT: DateFormat = DateFormat {
    datetime: Some(DatePattern {
        regex: r"Fecha:\s*\n?\s*([A-Za-z]{3} \d{1,2}, \d{4}), (\d{1,2}:\d{2})",
        format: "%b %d %Y %H:%M",
    }),
    date: Some(DatePattern {
        regex: r"Fecha:\s*\n?\s*([A-Za-z]{3} \d{1,2}, \d{4})",
        format: "%b %d %Y",
    }),
    spanish_months: true,
    tz: chrono_tz::America::Costa_Rica,
};

pub fn transaction_kind(email: &InboundEmail) -> Option<TransactionKind> {
    if email.subject_contains("sinpe móvil") || email.subject_contains("sinpe movil") {
        Some(TransactionKind::PeerTransfer)
    } else if email.subject_contains("notificación de transacción") {
        Some(TransactionKind::CardMovement)
    } else {
        None
    }
}

pub fn parse(email: &InboundEmail, kind: TransactionKind) -> Result<RawTransaction> {
    let text = collapse_blank_lines(&body_text(email));
    let timestamp = normalize_date(&text, &DATE_FORMAT, email.delivered_at()?);

    let amount_raw = first_capture(&text, AMOUNT_PATTERN)?;
    let amounts = Amounts::from_inline(&amount_raw)?;

    let (description, card) = match kind {
        TransactionKind::PeerTransfer => {
            let destination = first_capture(&text, DESTINATION_PATTERN)?;
            let reason = first_capture(&text, REASON_PATTERN)?;
            (
                transfer_description(&reason, &destination),
                UNKNOWN_CARD.to_string(),
            )
        }
        _ => (
            first_capture(&text, DESCRIPTION_PATTERN)?,
            first_capture(&text, CARD_PATTERN)?,
        ),
    };

    Ok(RawTransaction {
        kind,
        timestamp,
        description,
        amount_raw,
        amounts,
        bank: NAME,
        card,
    })
}
