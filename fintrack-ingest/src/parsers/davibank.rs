//! Davibank card alerts: a single sentence carrying every field.
//!
//!   Davibank le notifica que la transacción realizada en AUTO MERCADO, el día
//!   05/03/2024 a las 2:30 PM, con la tarjeta terminada en 4321 y referencia
//!   000123 por CRC 12,500.00, fue aprobada.

use fintrack_core::{
    Amounts, DateFormat, DatePattern, InboundEmail, RawTransaction, Result, TransactionKind,
    normalize_date,
};

use crate::markup::body_text;
use crate::text::first_capture;

pub const NAME: &str = "Davibank";
pub const SENDER: &str = "davibank";

const DESCRIPTION_PATTERN: &str = r"le notifica que la transacción realizada en (.+?), el día";
const AMOUNT_PATTERN: &str = r"referencia \d* por (.+?), fue ";
const CARD_PATTERN: &str = r"terminada en (\d*) ";

const DATE_FORMAT: DateFormat = DateFormat {
    datetime: Some(DatePattern {
        regex: r"el día (\d{2}/\d{2}/\d{4}) a las (\d{1,2}:\d{2} [AP]M)",
        format: "%d/%m/%Y %I:%M %p",
    }),
    date: Some(DatePattern {
        regex: r"el día (\d{2}/\d{2}/\d{4})",
        format: "%d/%m/%Y",
    }),
    spanish_months: false,
    tz: chrono_tz::America::Costa_Rica,
};

pub fn transaction_kind(email: &InboundEmail) -> Option<TransactionKind> {
    email
        .subject_contains("alerta transacción tarjeta")
        .then_some(TransactionKind::CardMovement)
}

pub fn parse(email: &InboundEmail, kind: TransactionKind) -> Result<RawTransaction> {
    parse_sentence(email, kind, NAME)
}

/// The alert sentence is shared with the Scotiabank notifications Davibank
/// took over; only the bank label differs.
pub(crate) fn parse_sentence(
    email: &InboundEmail,
    kind: TransactionKind,
    bank: &'static str,
) -> Result<RawTransaction> {
    let text = body_text(email).replace("&nbsp", " ");
    let timestamp = normalize_date(&text, &DATE_FORMAT, email.delivered_at()?);

    let description = first_capture(&text, DESCRIPTION_PATTERN)?;
    let card = first_capture(&text, CARD_PATTERN)?;
    let amount_raw = first_capture(&text, AMOUNT_PATTERN)?;
    let amounts = Amounts::from_inline(&amount_raw)?;

    Ok(RawTransaction {
        kind,
        timestamp,
        description,
        amount_raw,
        amounts,
        bank,
        card,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn alert(body: &str) -> InboundEmail {
        InboundEmail {
            sender: "alertas@davibank.cr".to_string(),
            subject: "Alerta Transacción Tarjeta".to_string(),
            date: "Wed, 06 Mar 2024 08:00:00 -0600".to_string(),
            body: body.to_string(),
            html_body: None,
        }
    }

    const BODY: &str = "Davibank le notifica que la transacción realizada en AUTO MERCADO, el día \
                        05/03/2024 a las 2:30 PM, con la tarjeta terminada en 4321 y referencia \
                        000123 por CRC 12,500.00, fue aprobada.";

    #[test]
    fn test_card_alert() {
        let e = alert(BODY);
        let kind = transaction_kind(&e).unwrap();
        let raw = parse(&e, kind).unwrap();
        assert_eq!(raw.description, "AUTO MERCADO");
        assert_eq!(raw.card, "4321");
        assert_eq!(raw.amount_raw, "CRC 12,500.00");
        assert_eq!(raw.amounts.crc, Decimal::from_str("12500.00").unwrap());
        assert_eq!((raw.timestamp.day(), raw.timestamp.month()), (5, 3));
        assert_eq!(raw.timestamp.hour(), 14);
    }

    #[test]
    fn test_nbsp_leftovers_are_spaces() {
        let body = BODY.replace("terminada en 4321 ", "terminada en 4321&nbsp");
        let raw = parse(&alert(&body), TransactionKind::CardMovement).unwrap();
        assert_eq!(raw.card, "4321");
    }

    #[test]
    fn test_date_without_time() {
        let body = BODY.replace(" a las 2:30 PM", " a las medianoche");
        let raw = parse(&alert(&body), TransactionKind::CardMovement).unwrap();
        assert_eq!((raw.timestamp.day(), raw.timestamp.hour()), (5, 0));
    }

    #[test]
    fn test_malformed_date_uses_delivery_time() {
        let body = BODY.replace("05/03/2024", "45/13/2024");
        let e = alert(&body);
        let raw = parse(&e, TransactionKind::CardMovement).unwrap();
        assert_eq!(raw.timestamp, e.delivered_at().unwrap());
    }

    #[test]
    fn test_other_subjects_ignored() {
        let mut e = alert(BODY);
        e.subject = "Promociones de temporada".to_string();
        assert_eq!(transaction_kind(&e), None);
    }
}
