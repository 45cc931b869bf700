//! The mint/burn pair and its JSON codec.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PairTypeError, TransactionError};
use crate::leg::{Leg, LegKind};

/// The event a pair records. Closed: no value other than `mint` or `burn`
/// can be constructed or decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairType {
    Mint,
    Burn,
}

impl PairType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mint => "mint",
            Self::Burn => "burn",
        }
    }

    /// Expected leg kinds for `(first, second)`.
    ///
    /// A mint takes reserve in and issues stable units; a burn is the reverse.
    /// This is a convention only: decoding never relies on it.
    pub fn conventional_legs(&self) -> (LegKind, LegKind) {
        match self {
            Self::Mint => (LegKind::Rsv, LegKind::MobUsd),
            Self::Burn => (LegKind::MobUsd, LegKind::Rsv),
        }
    }

    pub fn conventional_kind(&self, position: LegPosition) -> LegKind {
        let (first, second) = self.conventional_legs();
        match position {
            LegPosition::First => first,
            LegPosition::Second => second,
        }
    }
}

impl fmt::Display for PairType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PairType {
    type Err = PairTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mint" => Ok(Self::Mint),
            "burn" => Ok(Self::Burn),
            other => Err(PairTypeError(other.to_string())),
        }
    }
}

/// Slot a leg occupies within a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegPosition {
    First,
    Second,
}

impl fmt::Display for LegPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// A single mint or burn event with up to two legs.
///
/// Both legs are optional and either may hold either shape; see
/// [`crate::validation::check_pair`] for what is expected of them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionPair {
    #[serde(rename = "type")]
    pub kind: PairType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<Leg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<Leg>,
    pub confirmed: bool,
}

impl TransactionPair {
    /// A pair with no legs yet.
    pub fn new(kind: PairType, confirmed: bool) -> Self {
        Self {
            kind,
            first: None,
            second: None,
            confirmed,
        }
    }

    pub fn with_first(mut self, leg: impl Into<Leg>) -> Self {
        self.first = Some(leg.into());
        self
    }

    pub fn with_second(mut self, leg: impl Into<Leg>) -> Self {
        self.second = Some(leg.into());
        self
    }

    pub fn leg(&self, position: LegPosition) -> Option<&Leg> {
        match position {
            LegPosition::First => self.first.as_ref(),
            LegPosition::Second => self.second.as_ref(),
        }
    }

    /// Present legs with their slot, in slot order.
    pub fn legs(&self) -> impl Iterator<Item = (LegPosition, &Leg)> {
        [LegPosition::First, LegPosition::Second]
            .into_iter()
            .filter_map(move |position| self.leg(position).map(|leg| (position, leg)))
    }

    pub fn is_complete(&self) -> bool {
        self.first.is_some() && self.second.is_some()
    }

    pub fn confirm(&mut self) {
        self.confirmed = true;
    }

    pub fn from_json(json: &str) -> Result<Self, TransactionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, TransactionError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Decode a JSON document holding either one pair object or an array of them.
pub fn parse_pairs(json: &str) -> Result<Vec<TransactionPair>, TransactionError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}
