//! Premium amounts with precise decimal arithmetic
//!
//! Premiums are entered by a user as text and sent to the backend as a
//! decimal. rust_decimal keeps "0.10" from turning into 0.1000000001.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building a premium
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PremiumError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Premium must be greater than zero")]
    NotPositive,
}

/// A policy premium, always strictly positive
///
/// Serialises as a JSON number. Deserialisation accepts both JSON numbers
/// and numeric strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Premium(Decimal);

impl Premium {
    /// Creates a premium, rejecting zero and negative amounts
    pub fn new(amount: Decimal) -> Result<Self, PremiumError> {
        if amount.is_sign_negative() || amount.is_zero() {
            return Err(PremiumError::NotPositive);
        }
        Ok(Self(amount.normalize()))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Rounds to two decimal places for display
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp(2)
    }
}

impl TryFrom<Decimal> for Premium {
    type Error = PremiumError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Premium> for Decimal {
    fn from(premium: Premium) -> Decimal {
        premium.0
    }
}

impl Serialize for Premium {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl FromStr for Premium {
    type Err = PremiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|_| PremiumError::InvalidAmount(s.to_string()))?;
        Self::new(amount)
    }
}

impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
