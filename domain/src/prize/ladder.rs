//! Prize ladder value object
//!
//! Maps a 1-based question ordinal to its prize and checkpoint flag. Lookups
//! are queries: out-of-range ordinals answer `None`, `0` or `false` rather
//! than failing.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of rungs (and questions) in a game
pub const LADDER_LENGTH: usize = 15;

/// Amounts of the standard ladder, question 1 first
pub const STANDARD_AMOUNTS: [u64; LADDER_LENGTH] = [
    100, 200, 300, 500, 1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 125_000, 250_000,
    500_000, 1_000_000,
];

/// Checkpoint ordinals of the standard ladder
pub const STANDARD_CHECKPOINTS: [usize; 2] = [5, 10];

/// One rung of the ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rung {
    pub ordinal: usize,
    pub amount: u64,
    pub is_checkpoint: bool,
}

/// Ordered table of 15 prize rungs (Value Object)
///
/// Invariants: exactly 15 rungs, ordinals `1..=15` in order, amounts strictly
/// increasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrizeLadder {
    rungs: Vec<Rung>,
}

impl PrizeLadder {
    /// Build a ladder from explicit rungs
    pub fn new(rungs: Vec<Rung>) -> Result<Self, DomainError> {
        if rungs.len() != LADDER_LENGTH {
            return Err(DomainError::InvalidLadder(format!(
                "expected {} rungs, got {}",
                LADDER_LENGTH,
                rungs.len()
            )));
        }

        for (offset, rung) in rungs.iter().enumerate() {
            if rung.ordinal != offset + 1 {
                return Err(DomainError::InvalidLadder(format!(
                    "rung at position {} has ordinal {}",
                    offset + 1,
                    rung.ordinal
                )));
            }
        }

        if let Some(pair) = rungs.windows(2).find(|w| w[1].amount <= w[0].amount) {
            return Err(DomainError::InvalidLadder(format!(
                "amount for question {} ({}) does not exceed question {} ({})",
                pair[1].ordinal, pair[1].amount, pair[0].ordinal, pair[0].amount
            )));
        }

        Ok(Self { rungs })
    }

    /// Build a ladder from 15 amounts and a list of checkpoint ordinals
    pub fn from_amounts(amounts: &[u64], checkpoints: &[usize]) -> Result<Self, DomainError> {
        if let Some(bad) = checkpoints
            .iter()
            .find(|&&c| c == 0 || c > LADDER_LENGTH)
        {
            return Err(DomainError::InvalidLadder(format!(
                "checkpoint ordinal {} is outside 1..={}",
                bad, LADDER_LENGTH
            )));
        }

        let rungs = amounts
            .iter()
            .enumerate()
            .map(|(offset, &amount)| Rung {
                ordinal: offset + 1,
                amount,
                is_checkpoint: checkpoints.contains(&(offset + 1)),
            })
            .collect();
        Self::new(rungs)
    }

    /// The canonical ladder: checkpoints at 5 and 10, top prize at 15
    pub fn standard() -> Self {
        let rungs = STANDARD_AMOUNTS
            .iter()
            .enumerate()
            .map(|(offset, &amount)| Rung {
                ordinal: offset + 1,
                amount,
                is_checkpoint: STANDARD_CHECKPOINTS.contains(&(offset + 1)),
            })
            .collect();
        Self { rungs }
    }

    pub fn rungs(&self) -> &[Rung] {
        &self.rungs
    }

    pub fn rung(&self, ordinal: usize) -> Option<&Rung> {
        ordinal.checked_sub(1).and_then(|offset| self.rungs.get(offset))
    }

    /// Prize for a 1-based question ordinal
    pub fn amount_for(&self, ordinal: usize) -> Option<u64> {
        self.rung(ordinal).map(|r| r.amount)
    }

    pub fn is_checkpoint(&self, ordinal: usize) -> bool {
        self.rung(ordinal).is_some_and(|r| r.is_checkpoint)
    }

    /// Amount of the most recent checkpoint strictly before `ordinal`, or 0
    pub fn checkpoint_amount_before(&self, ordinal: usize) -> u64 {
        self.rungs
            .iter()
            .filter(|r| r.is_checkpoint && r.ordinal < ordinal)
            .next_back()
            .map_or(0, |r| r.amount)
    }

    /// The rung after `ordinal`, if any
    pub fn next_rung(&self, ordinal: usize) -> Option<&Rung> {
        self.rung(ordinal + 1)
    }

    pub fn top_prize(&self) -> u64 {
        self.rungs.last().map_or(0, |r| r.amount)
    }

    pub fn checkpoint_ordinals(&self) -> Vec<usize> {
        self.rungs
            .iter()
            .filter(|r| r.is_checkpoint)
            .map(|r| r.ordinal)
            .collect()
    }
}

impl Default for PrizeLadder {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'de> Deserialize<'de> for PrizeLadder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            rungs: Vec<Rung>,
        }

        let raw = Raw::deserialize(deserializer)?;
        PrizeLadder::new(raw.rungs).map_err(serde::de::Error::custom)
    }
}
