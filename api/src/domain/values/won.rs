//! Won price value object

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A price in Korean won. Won has no sub-unit, so the amount is a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Won {
    value: u64,
}

/// Returned when a signed amount (e.g. a database column) is below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("price must not be negative, got {0}")]
pub struct NegativeAmount(pub i64);

impl Won {
    pub const ZERO: Won = Won { value: 0 };

    pub const fn new(value: u64) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> u64 {
        self.value
    }
}

impl TryFrom<i64> for Won {
    type Error = NegativeAmount;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Won::new)
            .map_err(|_| NegativeAmount(value))
    }
}

impl std::fmt::Display for Won {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} won", self.value)
    }
}
