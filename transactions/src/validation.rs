//! Stateless checks of a pair against the leg conventions.
//!
//! Nothing here rejects a pair at decode time. Each deviation is reported
//! as a [`Finding`] and the caller decides whether it matters.

use serde::Serialize;
use std::fmt;

use crate::error::TransactionError;
use crate::leg::LegKind;
use crate::pair::{LegPosition, TransactionPair};

/// How much a finding should worry the reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// A deviation from the expected shape of a pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "finding", rename_all = "snake_case")]
pub enum Finding {
    MissingLeg {
        position: LegPosition,
        confirmed: bool,
    },
    SameKindLegs {
        kind: LegKind,
    },
    UnconventionalLeg {
        position: LegPosition,
        expected: LegKind,
        found: LegKind,
    },
    MixedLegFields {
        position: LegPosition,
        kind: LegKind,
        fields: Vec<&'static str>,
    },
    ZeroAmount {
        position: LegPosition,
    },
}

impl Finding {
    /// An absent leg is expected while a pair is still pending.
    pub fn severity(&self) -> Severity {
        match self {
            Self::MissingLeg {
                confirmed: false, ..
            } => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLeg {
                position,
                confirmed,
            } => {
                let state = if *confirmed { "confirmed" } else { "pending" };
                write!(f, "{position} leg is missing on {state} pair")
            }
            Self::SameKindLegs { kind } => write!(f, "both legs are {kind} transactions"),
            Self::UnconventionalLeg {
                position,
                expected,
                found,
            } => write!(f, "{position} leg is {found}, expected {expected}"),
            Self::MixedLegFields {
                position,
                kind,
                fields,
            } => write!(
                f,
                "{position} leg read as {kind} also carries {} fields: {}",
                kind.other(),
                fields.join(", ")
            ),
            Self::ZeroAmount { position } => write!(f, "{position} leg has a zero amount"),
        }
    }
}

/// Report every way `pair` departs from the mint/burn leg conventions.
///
/// Findings come out in a fixed order: missing legs, leg kinds, mixed
/// fields, zero amounts.
pub fn check_pair(pair: &TransactionPair) -> Vec<Finding> {
    let mut findings = Vec::new();

    for position in [LegPosition::First, LegPosition::Second] {
        if pair.leg(position).is_none() {
            findings.push(Finding::MissingLeg {
                position,
                confirmed: pair.confirmed,
            });
        }
    }

    match (&pair.first, &pair.second) {
        (Some(first), Some(second)) if first.kind() == second.kind() => {
            findings.push(Finding::SameKindLegs { kind: first.kind() });
        }
        _ => {
            for (position, leg) in pair.legs() {
                let expected = pair.kind.conventional_kind(position);
                if leg.kind() != expected {
                    findings.push(Finding::UnconventionalLeg {
                        position,
                        expected,
                        found: leg.kind(),
                    });
                }
            }
        }
    }

    for (position, leg) in pair.legs() {
        let fields = leg.foreign_fields();
        if !fields.is_empty() {
            findings.push(Finding::MixedLegFields {
                position,
                kind: leg.kind(),
                fields,
            });
        }
    }

    for (position, leg) in pair.legs() {
        if leg.is_zero_amount() {
            findings.push(Finding::ZeroAmount { position });
        }
    }

    findings
}

/// Run [`check_pair`]; in strict mode the first warning becomes an error.
pub fn validate_pair(
    pair: &TransactionPair,
    strict: bool,
) -> Result<Vec<Finding>, TransactionError> {
    let findings = check_pair(pair);
    if strict {
        if let Some(finding) = findings
            .iter()
            .find(|finding| finding.severity() == Severity::Warning)
        {
            return Err(TransactionError::Convention(finding.clone()));
        }
    }
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leg::{MobUsdTransaction, RsvTransaction};
    use crate::pair::PairType;
    use mint_auditor_types::{MobUsdAmount, RsvAmount, RsvHash, TxoId};

    fn mob_usd(amount: f64) -> MobUsdTransaction {
        MobUsdTransaction::new(MobUsdAmount::new(amount), TxoId::new("txo1"), "")
    }

    fn rsv(amount: f64) -> RsvTransaction {
        RsvTransaction::new(RsvAmount::new(amount), RsvHash::new("abc123"))
    }

    #[test]
    fn conventional_mint_has_no_findings() {
        let pair = TransactionPair::new(PairType::Mint, true)
            .with_first(rsv(100.0))
            .with_second(mob_usd(100.0));
        assert!(check_pair(&pair).is_empty());
    }

    #[test]
    fn conventional_burn_has_no_findings() {
        let pair = TransactionPair::new(PairType::Burn, true)
            .with_first(mob_usd(100.0))
            .with_second(rsv(100.0));
        assert!(check_pair(&pair).is_empty());
    }

    #[test]
    fn swapped_mint_legs_are_flagged() {
        let pair = TransactionPair::new(PairType::Mint, false)
            .with_first(mob_usd(100.0))
            .with_second(rsv(100.0));
        assert_eq!(
            check_pair(&pair),
            vec![
                Finding::UnconventionalLeg {
                    position: LegPosition::First,
                    expected: LegKind::Rsv,
                    found: LegKind::MobUsd,
                },
                Finding::UnconventionalLeg {
                    position: LegPosition::Second,
                    expected: LegKind::MobUsd,
                    found: LegKind::Rsv,
                },
            ]
        );
    }

    #[test]
    fn same_kind_legs_reported_once() {
        let pair = TransactionPair::new(PairType::Burn, true)
            .with_first(rsv(1.0))
            .with_second(rsv(2.0));
        assert_eq!(
            check_pair(&pair),
            vec![Finding::SameKindLegs { kind: LegKind::Rsv }]
        );
    }

    #[test]
    fn missing_legs_on_pending_pair_are_info() {
        let pair = TransactionPair::new(PairType::Mint, false).with_first(rsv(10.0));
        let findings = check_pair(&pair);
        assert_eq!(
            findings,
            vec![Finding::MissingLeg {
                position: LegPosition::Second,
                confirmed: false,
            }]
        );
        assert_eq!(findings[0].severity(), Severity::Info);
    }

    #[test]
    fn missing_legs_on_confirmed_pair_are_warnings() {
        let pair = TransactionPair::new(PairType::Burn, true);
        let findings = check_pair(&pair);
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.severity() == Severity::Warning));
    }

    #[test]
    fn single_misplaced_leg_is_flagged() {
        let pair = TransactionPair::new(PairType::Burn, false).with_second(mob_usd(3.0));
        let findings = check_pair(&pair);
        assert!(findings.contains(&Finding::UnconventionalLeg {
            position: LegPosition::Second,
            expected: LegKind::Rsv,
            found: LegKind::MobUsd,
        }));
    }

    #[test]
    fn zero_amount_is_flagged() {
        let pair = TransactionPair::new(PairType::Mint, true)
            .with_first(rsv(0.0))
            .with_second(mob_usd(100.0));
        assert_eq!(
            check_pair(&pair),
            vec![Finding::ZeroAmount {
                position: LegPosition::First
            }]
        );
    }

    #[test]
    fn leg_with_both_shapes_fields_is_flagged() {
        let json = r#"{
            "type": "mint",
            "first": { "rsvAmount": 100, "rsvHash": "abc123", "mobUsdAmount": 100 },
            "second": { "mobUsdAmount": 100, "txoId": "txo1", "memo": "" },
            "confirmed": true
        }"#;
        let pair = TransactionPair::from_json(json).unwrap();
        let findings = check_pair(&pair);
        assert_eq!(
            findings,
            vec![Finding::MixedLegFields {
                position: LegPosition::First,
                kind: LegKind::Rsv,
                fields: vec!["mobUsdAmount"],
            }]
        );
        assert_eq!(findings[0].severity(), Severity::Warning);
        assert_eq!(
            findings[0].to_string(),
            "first leg read as RSV also carries mobUSD fields: mobUsdAmount"
        );
    }

    #[test]
    fn unrelated_extra_fields_are_not_flagged() {
        let json = r#"{
            "type": "burn",
            "first": { "mobUsdAmount": 1, "txoId": "t", "memo": "", "blockIndex": 3 },
            "second": { "rsvAmount": 1, "rsvHash": "h" },
            "confirmed": true
        }"#;
        let pair = TransactionPair::from_json(json).unwrap();
        assert!(check_pair(&pair).is_empty());
    }

    #[test]
    fn strict_mode_rejects_warnings() {
        let pair = TransactionPair::new(PairType::Mint, true)
            .with_first(mob_usd(1.0))
            .with_second(rsv(1.0));
        let err = validate_pair(&pair, true).unwrap_err();
        assert!(matches!(
            err,
            TransactionError::Convention(Finding::UnconventionalLeg { .. })
        ));
        assert_eq!(validate_pair(&pair, false).unwrap().len(), 2);
    }

    #[test]
    fn strict_mode_tolerates_info() {
        let pair = TransactionPair::new(PairType::Mint, false);
        let findings = validate_pair(&pair, true).unwrap();
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn findings_render_readably() {
        let finding = Finding::UnconventionalLeg {
            position: LegPosition::First,
            expected: LegKind::Rsv,
            found: LegKind::MobUsd,
        };
        assert_eq!(finding.to_string(), "first leg is mobUSD, expected RSV");
        let missing = Finding::MissingLeg {
            position: LegPosition::Second,
            confirmed: true,
        };
        assert_eq!(missing.to_string(), "second leg is missing on confirmed pair");
    }
}
