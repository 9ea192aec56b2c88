//! Order lifecycle and payment enums.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// An order is "active" until it has been completed; only active orders show
/// up on the staff order board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    New,
    Preparing,
    Delivering,
    Completed,
}

impl OrderStatus {
    /// Whether the order still needs staff attention.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Preparing => write!(f, "preparing"),
            Self::Delivering => write!(f, "delivering"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "preparing" => Ok(Self::Preparing),
            "delivering" => Ok(Self::Delivering),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Electronic,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::Electronic => write!(f, "electronic"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "electronic" => Ok(Self::Electronic),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_statuses() {
        assert!(OrderStatus::New.is_active());
        assert!(OrderStatus::Preparing.is_active());
        assert!(OrderStatus::Delivering.is_active());
        assert!(!OrderStatus::Completed.is_active());
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            OrderStatus::New,
            OrderStatus::Preparing,
            OrderStatus::Delivering,
            OrderStatus::Completed,
        ] {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_payment_parse_rejects_unknown() {
        assert!("card".parse::<PaymentMethod>().is_err());
    }
}
