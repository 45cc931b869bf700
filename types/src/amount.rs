//! Token amount types for the stable unit (mobUSD) and the reserve asset (RSV).
//!
//! Any finite JSON number is a valid amount, fractional or negative. Decoding
//! rejects only NaN and the infinities, which formats such as TOML can carry.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AuditorError;

/// mobUSD amount, the stable-unit side of a mint or burn.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct MobUsdAmount(f64);

impl MobUsdAmount {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Sum, or `None` if it leaves the finite range.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        let sum = self.0 + other.0;
        sum.is_finite().then_some(Self(sum))
    }
}

impl TryFrom<f64> for MobUsdAmount {
    type Error = AuditorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(AuditorError::NonFiniteAmount {
                asset: "mobUSD",
                value,
            })
        }
    }
}

impl From<MobUsdAmount> for f64 {
    fn from(amount: MobUsdAmount) -> Self {
        amount.0
    }
}

impl fmt::Display for MobUsdAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mobUSD", self.0)
    }
}

/// RSV amount, the reserve asset deposited on mint and released on burn.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct RsvAmount(f64);

impl RsvAmount {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        let sum = self.0 + other.0;
        sum.is_finite().then_some(Self(sum))
    }
}

impl TryFrom<f64> for RsvAmount {
    type Error = AuditorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(AuditorError::NonFiniteAmount {
                asset: "RSV",
                value,
            })
        }
    }
}

impl From<RsvAmount> for f64 {
    fn from(amount: RsvAmount) -> Self {
        amount.0
    }
}

impl fmt::Display for RsvAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} RSV", self.0)
    }
}
