//! The five-stage payout pipeline.
//!
//! ```text
//! stake ──value_per_guess──▶ value per guess
//!        ──value_per_unit───▶ value per unit   (÷ units)
//!        ──prize_per_unit───▶ prize per unit   (× odd)
//!        ──prize_per_guess──▶ prize per guess  (× hits)
//! ```
//!
//! Every stage is a pure function of the previous value and one extra
//! input. Amounts keep full `Decimal` precision between stages; rounding
//! only happens when an amount leaves the engine (see `round_currency`).
//!
//! Division by zero never errors. A wager with no palpites or no units
//! settles to zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::PositionRange;

/// How the entered stake is spread over the palpites of a wager.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionMode {
    /// The stake applies to each palpite.
    #[default]
    Each,
    /// The stake is split evenly across all palpites.
    All,
}

/// Stage 1: amount wagered on a single palpite.
#[must_use]
pub fn value_per_guess(stake: Decimal, guess_count: u64, mode: DivisionMode) -> Decimal {
    match mode {
        DivisionMode::Each => stake,
        DivisionMode::All if guess_count == 0 => Decimal::ZERO,
        DivisionMode::All => stake / Decimal::from(guess_count),
    }
}

/// Stage 2: scoring units a palpite is spread over.
///
/// One unit per combination per position in `range`.
#[must_use]
pub fn units(combination_count: u64, range: PositionRange) -> u64 {
    units_over(combination_count, range.len())
}

/// Stage 2 for an explicit number of scoring positions.
#[must_use]
pub fn units_over(combination_count: u64, positions: u32) -> u64 {
    combination_count * u64::from(positions)
}

/// Stage 3: amount riding on each unit.
#[must_use]
pub fn value_per_unit(value_per_guess: Decimal, units: u64) -> Decimal {
    if units == 0 {
        return Decimal::ZERO;
    }
    value_per_guess / Decimal::from(units)
}

/// Stage 4: prize paid by one winning unit.
#[must_use]
pub fn prize_per_unit(odd: Decimal, value_per_unit: Decimal) -> Decimal {
    odd * value_per_unit
}

/// Stage 5: prize for a palpite that matched `hits` units.
#[must_use]
pub fn prize_per_guess(hits: u64, prize_per_unit: Decimal) -> Decimal {
    Decimal::from(hits) * prize_per_unit
}

/// Total amount debited for a wager.
///
/// With `Each` the stake is paid once per palpite; with `All` it is the
/// whole wager.
#[must_use]
pub fn total_stake(stake: Decimal, guess_count: u64, mode: DivisionMode) -> Decimal {
    match mode {
        DivisionMode::Each => stake * Decimal::from(guess_count),
        DivisionMode::All => stake,
    }
}

/// Every value of the pipeline for one palpite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutChain {
    pub value_per_guess: Decimal,
    pub combinations: u64,
    pub units: u64,
    pub value_per_unit: Decimal,
    pub odd: Decimal,
    pub prize_per_unit: Decimal,
    pub hits: u64,
    pub prize_per_guess: Decimal,
}

impl PayoutChain {
    /// Run stages 2 to 5 for a palpite.
    #[must_use]
    pub fn compute(value_per_guess: Decimal, combinations: u64, positions: u32, odd: Decimal, hits: u64) -> Self {
        let units = units_over(combinations, positions);
        let value_per_unit = value_per_unit(value_per_guess, units);
        let prize_per_unit = prize_per_unit(odd, value_per_unit);
        let prize_per_guess = prize_per_guess(hits, prize_per_unit);

        Self {
            value_per_guess,
            combinations,
            units,
            value_per_unit,
            odd,
            prize_per_unit,
            hits,
            prize_per_guess,
        }
    }

    /// True when the palpite pays anything.
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.prize_per_guess > Decimal::ZERO
    }
}
