//! Scotiabank card alerts, still sent from the pre-merger address. The body
//! is the same sentence Davibank sends:
//!
//!   Scotiabank le notifica que la transacción realizada en FARMACIA FISCHEL,
//!   el día 12/01/2024 a las 9:05 AM, con la tarjeta terminada en 9876 y
//!   referencia 004512 por USD 15.90, fue aprobada.

use fintrack_core::{InboundEmail, RawTransaction, Result, TransactionKind};

use super::davibank;

pub const NAME: &str = "Scotiabank";
pub const SENDER: &str = "scotiabank";

pub fn transaction_kind(email: &InboundEmail) -> Option<TransactionKind> {
    davibank::transaction_kind(email)
}

pub fn parse(email: &InboundEmail, kind: TransactionKind) -> Result<RawTransaction> {
    davibank::parse_sentence(email, kind, NAME)
}
