//! Batch totals of minted and burned value.

use mint_auditor_types::{AuditorError, MobUsdAmount, RsvAmount};
use serde::Serialize;

use crate::error::TransactionError;
use crate::leg::Leg;
use crate::pair::{PairType, TransactionPair};

/// Counts and totals over a batch of pairs.
///
/// Amounts are attributed by leg kind, not by slot, so a pair with swapped
/// legs still lands in the right column. Only confirmed pairs count toward
/// the amount totals.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PairSummary {
    pub mints: usize,
    pub burns: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub mob_usd_minted: MobUsdAmount,
    pub rsv_deposited: RsvAmount,
    pub mob_usd_burned: MobUsdAmount,
    pub rsv_released: RsvAmount,
}

impl PairSummary {
    pub fn from_pairs(pairs: &[TransactionPair]) -> Result<Self, TransactionError> {
        let mut summary = Self::default();
        for pair in pairs {
            summary.record(pair)?;
        }
        Ok(summary)
    }

    /// Fold one pair into the totals.
    pub fn record(&mut self, pair: &TransactionPair) -> Result<(), TransactionError> {
        match pair.kind {
            PairType::Mint => self.mints += 1,
            PairType::Burn => self.burns += 1,
        }
        if !pair.confirmed {
            self.pending += 1;
            return Ok(());
        }
        self.confirmed += 1;

        for (_, leg) in pair.legs() {
            match (pair.kind, leg) {
                (PairType::Mint, Leg::MobUsd(tx)) => {
                    self.mob_usd_minted = add_mob_usd(self.mob_usd_minted, tx.mob_usd_amount)?
                }
                (PairType::Mint, Leg::Rsv(tx)) => {
                    self.rsv_deposited = add_rsv(self.rsv_deposited, tx.rsv_amount)?
                }
                (PairType::Burn, Leg::MobUsd(tx)) => {
                    self.mob_usd_burned = add_mob_usd(self.mob_usd_burned, tx.mob_usd_amount)?
                }
                (PairType::Burn, Leg::Rsv(tx)) => {
                    self.rsv_released = add_rsv(self.rsv_released, tx.rsv_amount)?
                }
            }
        }
        Ok(())
    }

    /// mobUSD issued minus mobUSD destroyed; negative when more was burned.
    pub fn net_mob_usd(&self) -> MobUsdAmount {
        MobUsdAmount::new(self.mob_usd_minted.value() - self.mob_usd_burned.value())
    }
}

fn add_mob_usd(total: MobUsdAmount, addend: MobUsdAmount) -> Result<MobUsdAmount, AuditorError> {
    total
        .checked_add(addend)
        .ok_or(AuditorError::AmountOverflow {
            asset: "mobUSD",
            total: total.value(),
            addend: addend.value(),
        })
}

fn add_rsv(total: RsvAmount, addend: RsvAmount) -> Result<RsvAmount, AuditorError> {
    total.checked_add(addend).ok_or(AuditorError::AmountOverflow {
        asset: "RSV",
        total: total.value(),
        addend: addend.value(),
    })
}
