//! Locale-ambiguous amount parsing.
//!
//! Costa Rican banks mix `1.234,56` and `1,234.56` freely, sometimes in the
//! same inbox, so the decimal separator is inferred per string.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{EngineError, Result};

/// Parse a raw amount into a decimal.
///
/// With both `.` and `,` present, whichever appears later is the decimal
/// point and the other is dropped as a thousands separator. With only one of
/// them, that one is the decimal point.
pub fn normalize_price(raw: &str) -> Result<Decimal> {
    let number = raw.trim();
    if number.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let mut number = number.to_string();
    if let (Some(period), Some(comma)) = (number.find('.'), number.find(',')) {
        if period < comma {
            number = number.replace('.', "");
        } else {
            number = number.replace(',', "");
        }
    }
    let number = number.replace(',', ".");

    Decimal::from_str(&number).map_err(|source| EngineError::InvalidAmount {
        raw: raw.to_string(),
        source,
    })
}
