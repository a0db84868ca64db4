//! Client type with account limits and fees

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientType {
    Individual,
    Business,
    Vip,
}

impl ClientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Individual => "INDIVIDUAL",
            ClientType::Business => "BUSINESS",
            ClientType::Vip => "VIP",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "INDIVIDUAL" => Some(ClientType::Individual),
            "BUSINESS" => Some(ClientType::Business),
            "VIP" => Some(ClientType::Vip),
            _ => None,
        }
    }

    pub fn can_have_multiple_accounts(&self) -> bool {
        *self != ClientType::Individual
    }

    pub fn max_accounts(&self) -> u32 {
        match self {
            ClientType::Individual => 3,
            ClientType::Business => 10,
            ClientType::Vip => 15,
        }
    }

    pub fn monthly_maintenance_fee(&self) -> Decimal {
        match self {
            ClientType::Individual => Decimal::new(500, 2),
            ClientType::Business => Decimal::new(1500, 2),
            ClientType::Vip => Decimal::ZERO,
        }
    }
}

impl Default for ClientType {
    fn default() -> Self {
        ClientType::Individual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_and_fees() {
        assert_eq!(ClientType::Individual.max_accounts(), 3);
        assert_eq!(ClientType::Business.max_accounts(), 10);
        assert_eq!(ClientType::Vip.max_accounts(), 15);

        assert_eq!(ClientType::Individual.monthly_maintenance_fee(), Decimal::new(5, 0));
        assert_eq!(ClientType::Business.monthly_maintenance_fee(), Decimal::new(15, 0));
        assert!(ClientType::Vip.monthly_maintenance_fee().is_zero());
    }

    #[test]
    fn test_multiple_accounts() {
        assert!(!ClientType::Individual.can_have_multiple_accounts());
        assert!(ClientType::Business.can_have_multiple_accounts());
        assert!(ClientType::Vip.can_have_multiple_accounts());
    }
}
