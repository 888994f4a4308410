//! Settlement engine.
//!
//! Ties the pieces together: a wager's palpites are conferred against a
//! draw and each one runs through the payout pipeline. The engine holds
//! only its configuration, so one instance can settle any number of
//! wagers from any number of threads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DomainError, DomainResult, PositionRange, ResultSequence, SettlementConfig};
use crate::finance::{round_currency, value_per_guess, PayoutChain};

use super::palpite::Palpite;
use super::wager::Wager;

/// Outcome of one palpite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessSettlement {
    pub palpite: Palpite,
    pub chain: PayoutChain,
}

impl GuessSettlement {
    /// Prize for this palpite, at full precision.
    #[must_use]
    pub fn prize(&self) -> Decimal {
        self.chain.prize_per_guess
    }
}

/// Outcome of a whole wager.
///
/// Amounts are kept at full precision; use `rounded_total_prize` when the
/// prize leaves the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub guesses: Vec<GuessSettlement>,
    pub total_stake: Decimal,
    pub total_prize: Decimal,
}

impl Settlement {
    /// True when any palpite pays.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.total_prize > Decimal::ZERO
    }

    /// Palpites that pay something.
    pub fn winning_guesses(&self) -> impl Iterator<Item = &GuessSettlement> {
        self.guesses.iter().filter(|g| g.chain.is_winning())
    }

    /// Total prize rounded half away from zero to `scale` places.
    #[must_use]
    pub fn rounded_total_prize(&self, scale: u32) -> Decimal {
        round_currency(self.total_prize, scale)
    }
}

/// Settles wagers against drawn results.
#[derive(Clone, Debug, Default)]
pub struct SettlementEngine {
    config: SettlementConfig,
}

impl SettlementEngine {
    pub fn new(config: SettlementConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }

    /// Check a wager against the configured position limits.
    ///
    /// A no-op unless `enforce_position_limits` is set.
    pub fn validate_wager(&self, wager: &Wager) -> DomainResult<()> {
        if !self.config.enforce_position_limits {
            return Ok(());
        }
        self.config
            .position_limits
            .check(wager.modality(), wager.range())
            .inspect_err(|e| warn!(modality = %wager.modality(), range = %wager.range(), "wager rejected: {}", e))
    }

    /// Settle a wager with an explicit odd.
    ///
    /// `results` is the validated draw, 1st prize first. It may be shorter
    /// than the wager's range; missing positions simply never hit.
    pub fn settle_with_odd(&self, wager: &Wager, results: &ResultSequence, odd: Decimal) -> DomainResult<Settlement> {
        if odd.is_sign_negative() && !odd.is_zero() {
            return Err(DomainError::NegativeOdd);
        }
        self.validate_wager(wager)?;

        let range = wager.range();
        let per_guess = value_per_guess(wager.stake(), wager.guess_count(), wager.division());

        let guesses: Vec<GuessSettlement> = wager
            .palpites()
            .iter()
            .map(|palpite| {
                let hits = palpite.hits(results, range, self.config.simple_group_policy);
                let chain = PayoutChain::compute(
                    per_guess,
                    palpite.combinations(),
                    palpite.scoring_positions(range),
                    odd,
                    hits,
                );
                GuessSettlement {
                    palpite: palpite.clone(),
                    chain,
                }
            })
            .collect();

        let total_prize = guesses.iter().map(GuessSettlement::prize).sum();
        let settlement = Settlement {
            guesses,
            total_stake: wager.total_stake(),
            total_prize,
        };

        debug!(
            modality = %wager.modality(),
            %range,
            palpites = settlement.guesses.len(),
            total_prize = %settlement.total_prize,
            "settled wager"
        );
        Ok(settlement)
    }

    /// Settle a wager with the odd configured for its modality and range.
    ///
    /// Passe wagers always score the 1st and 2nd prize, so their odd is
    /// looked up under that range whatever range the wager carries.
    pub fn settle(&self, wager: &Wager, results: &ResultSequence) -> DomainResult<Settlement> {
        let modality = wager.modality();
        let lookup = if modality.is_passe() {
            PositionRange::first_two()
        } else {
            wager.range()
        };
        let odd = self
            .config
            .odds
            .odd(modality, lookup)
            .inspect_err(|e| warn!("cannot settle: {}", e))?;
        self.settle_with_odd(wager, results, odd)
    }
}
