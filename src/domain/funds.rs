//! Funds value object.

use std::fmt;

use crate::domain::error::TycoonError;

/// Immutable non-negative monetary value.
///
/// Arithmetic returns new instances; `subtract` refuses to go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Funds {
    amount: i64,
}

impl Funds {
    pub const ZERO: Funds = Funds { amount: 0 };

    pub fn new(amount: i64) -> Result<Self, TycoonError> {
        if amount < 0 {
            return Err(TycoonError::InvalidFunds { amount });
        }
        Ok(Self { amount })
    }

    pub fn amount(self) -> i64 {
        self.amount
    }

    #[must_use]
    pub fn add(self, other: Funds) -> Funds {
        Funds {
            amount: self.amount + other.amount,
        }
    }

    pub fn subtract(self, other: Funds) -> Result<Funds, TycoonError> {
        if self.amount < other.amount {
            return Err(TycoonError::InvalidFunds {
                amount: self.amount - other.amount,
            });
        }
        Ok(Funds {
            amount: self.amount - other.amount,
        })
    }
}

impl From<u32> for Funds {
    fn from(amount: u32) -> Self {
        Self {
            amount: i64::from(amount),
        }
    }
}

impl fmt::Display for Funds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.amount)
    }
}
