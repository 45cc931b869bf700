//! The two leg shapes and the union that holds either of them.

use mint_auditor_types::{MobUsdAmount, RsvAmount, RsvHash, TxoId};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Field names of a mobUSD leg on the wire.
pub const MOB_USD_FIELDS: [&str; 3] = ["mobUsdAmount", "txoId", "memo"];

/// Field names of an RSV leg on the wire.
pub const RSV_FIELDS: [&str; 2] = ["rsvAmount", "rsvHash"];

/// The stable-unit side of a pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobUsdTransaction {
    pub mob_usd_amount: MobUsdAmount,
    pub txo_id: TxoId,
    /// Free-form; may be empty.
    pub memo: String,
    /// Fields beyond the three above, kept so they survive re-encoding.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl MobUsdTransaction {
    pub fn new(amount: MobUsdAmount, txo_id: TxoId, memo: impl Into<String>) -> Self {
        Self {
            mob_usd_amount: amount,
            txo_id,
            memo: memo.into(),
            extra: BTreeMap::new(),
        }
    }
}

/// The reserve side of a pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvTransaction {
    pub rsv_amount: RsvAmount,
    pub rsv_hash: RsvHash,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RsvTransaction {
    pub fn new(amount: RsvAmount, rsv_hash: RsvHash) -> Self {
        Self {
            rsv_amount: amount,
            rsv_hash,
            extra: BTreeMap::new(),
        }
    }
}

/// Which shape a leg has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegKind {
    MobUsd,
    Rsv,
}

impl LegKind {
    pub fn wire_fields(&self) -> &'static [&'static str] {
        match self {
            Self::MobUsd => &MOB_USD_FIELDS,
            Self::Rsv => &RSV_FIELDS,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::MobUsd => Self::Rsv,
            Self::Rsv => Self::MobUsd,
        }
    }

    /// Pick a shape from the keys of a leg object.
    ///
    /// The amount key decides. When both amount keys are present, the shape
    /// whose fields are all there wins, mobUSD first.
    fn infer(object: &Map<String, Value>) -> Option<Self> {
        let has_all = |kind: Self| kind.wire_fields().iter().all(|f| object.contains_key(*f));
        match (
            object.contains_key("mobUsdAmount"),
            object.contains_key("rsvAmount"),
        ) {
            (true, false) => Some(Self::MobUsd),
            (false, true) => Some(Self::Rsv),
            (true, true) if !has_all(Self::MobUsd) && has_all(Self::Rsv) => Some(Self::Rsv),
            (true, true) => Some(Self::MobUsd),
            (false, false) if object.contains_key("txoId") => Some(Self::MobUsd),
            (false, false) if object.contains_key("rsvHash") => Some(Self::Rsv),
            (false, false) => None,
        }
    }
}

impl fmt::Display for LegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MobUsd => f.write_str("mobUSD"),
            Self::Rsv => f.write_str("RSV"),
        }
    }
}

/// One side of a pair.
///
/// Legs carry no tag on the wire; the shape is read off the object's keys.
/// Unrecognised fields are kept, and a leg holding fields of both shapes is
/// decoded as one of them and left for [`crate::validation::check_pair`] to
/// report.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Leg {
    MobUsd(MobUsdTransaction),
    Rsv(RsvTransaction),
}

impl<'de> Deserialize<'de> for Leg {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let kind = LegKind::infer(&object).ok_or_else(|| {
            <D::Error as de::Error>::custom("leg has neither mobUSD fields nor RSV fields")
        })?;
        let value = Value::Object(object);
        match kind {
            LegKind::MobUsd => serde_json::from_value(value)
                .map(Self::MobUsd)
                .map_err(|e| de::Error::custom(format!("mobUSD leg: {e}"))),
            LegKind::Rsv => serde_json::from_value(value)
                .map(Self::Rsv)
                .map_err(|e| de::Error::custom(format!("RSV leg: {e}"))),
        }
    }
}

impl Leg {
    pub fn kind(&self) -> LegKind {
        match self {
            Self::MobUsd(_) => LegKind::MobUsd,
            Self::Rsv(_) => LegKind::Rsv,
        }
    }

    pub fn as_mob_usd(&self) -> Option<&MobUsdTransaction> {
        match self {
            Self::MobUsd(tx) => Some(tx),
            Self::Rsv(_) => None,
        }
    }

    pub fn as_rsv(&self) -> Option<&RsvTransaction> {
        match self {
            Self::Rsv(tx) => Some(tx),
            Self::MobUsd(_) => None,
        }
    }

    pub fn is_zero_amount(&self) -> bool {
        match self {
            Self::MobUsd(tx) => tx.mob_usd_amount.is_zero(),
            Self::Rsv(tx) => tx.rsv_amount.is_zero(),
        }
    }

    pub fn extra(&self) -> &BTreeMap<String, Value> {
        match self {
            Self::MobUsd(tx) => &tx.extra,
            Self::Rsv(tx) => &tx.extra,
        }
    }

    /// Fields of the other shape that this leg also carries.
    pub fn foreign_fields(&self) -> Vec<&'static str> {
        let extra = self.extra();
        self.kind()
            .other()
            .wire_fields()
            .iter()
            .copied()
            .filter(|field| extra.contains_key(*field))
            .collect()
    }
}

impl From<MobUsdTransaction> for Leg {
    fn from(tx: MobUsdTransaction) -> Self {
        Self::MobUsd(tx)
    }
}

impl From<RsvTransaction> for Leg {
    fn from(tx: RsvTransaction) -> Self {
        Self::Rsv(tx)
    }
}
