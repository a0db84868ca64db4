// ============================================================================
// Bank Core - Balance Value Object
// File: crates/bank-core/src/domain/balance.rs
// Description: Money amount in a currency, kept at two decimals half-even
// ============================================================================

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const SCALE: u32 = 2;

/// ISO 4217 style currency code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(DomainError::ValidationError(format!(
                "Invalid currency code: {}",
                code
            )));
        }
        Ok(Self(code))
    }

    pub fn eur() -> Self {
        Self("EUR".to_string())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::new(value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Balance {
    amount: Decimal,
    currency: Currency,
}

impl Balance {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: normalize(amount),
            currency,
        }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn add(&self, amount: Decimal) -> Self {
        Self::new(self.amount + amount, self.currency.clone())
    }

    pub fn subtract(&self, amount: Decimal) -> Self {
        Self::new(self.amount - amount, self.currency.clone())
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    pub fn is_less_than(&self, other: &Balance) -> Result<bool, DomainError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount < other.amount)
    }

    pub(crate) fn ensure_same_currency(&self, other: &Balance) -> Result<(), DomainError> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                expected: self.currency.to_string(),
                actual: other.currency.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

fn normalize(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(SCALE);
    rounded
}
