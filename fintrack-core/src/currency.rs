//! Currency markers found in notification bodies.

use rust_decimal::Decimal;

use crate::error::Result;
use crate::price::normalize_price;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// Costa Rican colón, the local currency.
    Crc,
    /// US dollar, the only foreign currency the banks notify in.
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Crc => "CRC",
            Currency::Usd => "USD",
        }
    }

    /// Currency named by a spelled-out table cell, e.g. `COLON COSTA RICA`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "COLON COSTA RICA" => Some(Currency::Crc),
            "US DOLLAR" => Some(Currency::Usd),
            _ => None,
        }
    }

    /// Currency named by an inline three-letter code anywhere in `raw`.
    /// `USD` is checked before `CRC`.
    pub fn from_inline_code(raw: &str) -> Option<Self> {
        if raw.contains("USD") {
            Some(Currency::Usd)
        } else if raw.contains("CRC") {
            Some(Currency::Crc)
        } else {
            None
        }
    }
}

/// The pair of posted amounts. At most one side is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Amounts {
    pub crc: Decimal,
    pub usd: Decimal,
}

impl Amounts {
    pub fn in_currency(currency: Currency, value: Decimal) -> Self {
        match currency {
            Currency::Crc => Amounts { crc: value, usd: Decimal::ZERO },
            Currency::Usd => Amounts { crc: Decimal::ZERO, usd: value },
        }
    }

    /// Resolve a raw string like `CRC 4,500.00` or `12.99 USD`.
    ///
    /// Without a recognizable code both sides stay zero; the caller keeps the
    /// raw string for audit.
    pub fn from_inline(raw: &str) -> Result<Self> {
        match Currency::from_inline_code(raw) {
            Some(currency) => {
                let value = normalize_price(&raw.replace(currency.code(), ""))?;
                Ok(Self::in_currency(currency, value))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.crc.is_zero() && self.usd.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_inline_codes() {
        let a = Amounts::from_inline("CRC 4,500.00").unwrap();
        assert_eq!(a.crc, Decimal::from_str("4500.00").unwrap());
        assert!(a.usd.is_zero());

        let a = Amounts::from_inline("USD 12,99").unwrap();
        assert_eq!(a.usd, Decimal::from_str("12.99").unwrap());
        assert!(a.crc.is_zero());
    }

    #[test]
    fn test_unknown_marker_leaves_both_zero() {
        let a = Amounts::from_inline("EUR 10.00").unwrap();
        assert!(a.is_zero());
        let a = Amounts::from_inline("").unwrap();
        assert!(a.is_zero());
    }

    #[test]
    fn test_bad_number_with_known_code_errors() {
        assert!(Amounts::from_inline("CRC 1.234.567").is_err());
    }

    #[test]
    fn test_currency_names() {
        assert_eq!(Currency::from_name("COLON COSTA RICA"), Some(Currency::Crc));
        assert_eq!(Currency::from_name(" US DOLLAR "), Some(Currency::Usd));
        assert_eq!(Currency::from_name("EURO"), None);
    }
}
