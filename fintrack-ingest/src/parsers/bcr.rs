//! BCR card notifications (HTML table).
//!
//! The table row after the `Fecha` header has a fixed layout:
//!   | date | - | - | amount | currency name | description | status |

use fintrack_core::{
    Amounts, Currency, DateFormat, DatePattern, EngineError, InboundEmail, RawTransaction, Result,
    TransactionKind, UNKNOWN_CARD, normalize_date, normalize_price,
};

use crate::markup::TableCursor;

pub const NAME: &str = "BCR";
pub const SENDER: &str = "bcrtarjestcta";

const TABLE_HEADERS: [&str; 2] = ["Fecha", "Date"];
/// Status cell value for a declined charge.
pub const DECLINED: &str = "RECHAZADA";

const DATE_FORMAT: DateFormat = DateFormat {
    datetime: Some(DatePattern {
        regex: r"(\d{2}/\d{2}/\d{4})\s+(\d{1,2}:\d{2}:\d{2})",
        format: "%d/%m/%Y %H:%M:%S",
    }),
    date: Some(DatePattern {
        regex: r"(\d{2}/\d{2}/\d{4})",
        format: "%d/%m/%Y",
    }),
    spanish_months: false,
    tz: chrono_tz::America::Costa_Rica,
};

pub fn transaction_kind(email: &InboundEmail) -> Option<TransactionKind> {
    email
        .subject_contains("notificación de transacciones")
        .then_some(TransactionKind::CardMovement)
}

pub fn parse(email: &InboundEmail, kind: TransactionKind) -> Result<RawTransaction> {
    let missing = || EngineError::MissingTable {
        header: TABLE_HEADERS[0].to_string(),
    };
    let html = email.html_body.as_deref().ok_or_else(missing)?;
    let mut cursor = TableCursor::after_header(html, &TABLE_HEADERS).ok_or_else(missing)?;

    let date = cursor.next_cell();
    cursor.skip(2);
    let amount = cursor.next_cell();
    let currency = cursor.next_cell();
    let description = cursor.next_cell();
    let status = cursor.next_cell();

    let timestamp = normalize_date(&date, &DATE_FORMAT, email.delivered_at()?);

    let (amount_raw, amounts) = match Currency::from_name(&currency) {
        Some(currency) => {
            let raw = format!("{} {}", currency.code(), amount);
            if status.eq_ignore_ascii_case(DECLINED) {
                (raw, Amounts::default())
            } else {
                (raw, Amounts::in_currency(currency, normalize_price(&amount)?))
            }
        }
        None => (amount, Amounts::default()),
    };

    Ok(RawTransaction {
        kind,
        timestamp,
        description,
        amount_raw,
        amounts,
        bank: NAME,
        card: UNKNOWN_CARD.to_string(),
    })
}
