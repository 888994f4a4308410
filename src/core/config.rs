//! Settlement configuration.
//!
//! The settlement layer configures the engine with:
//! - `SimpleGroupPolicy`: how a simple group bet pays when its group is
//!   drawn at several positions
//! - `PositionLimits`: which position ranges each modality may be offered on
//! - `OddsTable`: the payout multiplier per modality and position range
//!
//! The engine never prices anything itself. Odds are opaque inputs supplied
//! by the operator.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::modality::Modality;

use super::error::{DomainError, DomainResult};
use super::position::PositionRange;

/// How a simple group bet is paid when its group shows up more than once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleGroupPolicy {
    /// One hit per palpite, however many positions drew the group.
    #[default]
    OncePerGuess,
    /// One hit per position that drew the group.
    PerOccurrence,
}

/// Position ranges each modality may be wagered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionLimits {
    /// Highest position any modality may reach.
    pub max_position: u32,

    /// Highest position for thousand modalities.
    pub max_thousand_position: u32,

    /// The only range passe bets may use.
    pub passe_range: PositionRange,
}

impl Default for PositionLimits {
    fn default() -> Self {
        Self {
            max_position: 7,
            max_thousand_position: 5,
            passe_range: PositionRange::first_two(),
        }
    }
}

impl PositionLimits {
    /// Check that `range` is allowed for `modality`.
    pub fn check(&self, modality: Modality, range: PositionRange) -> DomainResult<()> {
        let allowed = if modality.is_passe() {
            range == self.passe_range
        } else if modality.is_thousand() {
            range.last() <= self.max_thousand_position
        } else {
            range.last() <= self.max_position
        };

        if allowed {
            Ok(())
        } else {
            Err(DomainError::PositionNotAllowed { modality, range })
        }
    }
}

/// One configured odd.
///
/// `range: None` makes it the fallback for every range of the modality
/// without an exact entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddEntry {
    pub modality: Modality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<PositionRange>,
    pub odd: Decimal,
}

/// Payout multipliers keyed by modality and position range.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<OddEntry>", into = "Vec<OddEntry>")]
pub struct OddsTable {
    exact: FxHashMap<(Modality, PositionRange), Decimal>,
    fallback: FxHashMap<Modality, Decimal>,
}

impl OddsTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the odd for a modality on one position range.
    pub fn with_odd(mut self, modality: Modality, range: PositionRange, odd: Decimal) -> DomainResult<Self> {
        if odd.is_sign_negative() {
            return Err(DomainError::NegativeOdd);
        }
        self.exact.insert((modality, range), odd);
        Ok(self)
    }

    /// Set the odd used for ranges of a modality without an exact entry.
    pub fn with_fallback(mut self, modality: Modality, odd: Decimal) -> DomainResult<Self> {
        if odd.is_sign_negative() {
            return Err(DomainError::NegativeOdd);
        }
        self.fallback.insert(modality, odd);
        Ok(self)
    }

    /// Look up the odd for a modality and range.
    pub fn odd(&self, modality: Modality, range: PositionRange) -> DomainResult<Decimal> {
        self.exact
            .get(&(modality, range))
            .or_else(|| self.fallback.get(&modality))
            .copied()
            .ok_or(DomainError::MissingOdd { modality, range })
    }

    /// Number of configured entries, fallbacks included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len() + self.fallback.len()
    }

    /// True when nothing is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<OddEntry>> for OddsTable {
    fn from(entries: Vec<OddEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            match entry.range {
                Some(range) => table.exact.insert((entry.modality, range), entry.odd),
                None => table.fallback.insert(entry.modality, entry.odd),
            };
        }
        table
    }
}

impl From<OddsTable> for Vec<OddEntry> {
    fn from(table: OddsTable) -> Self {
        let mut entries: Vec<OddEntry> = table
            .fallback
            .into_iter()
            .map(|(modality, odd)| OddEntry { modality, range: None, odd })
            .chain(table.exact.into_iter().map(|((modality, range), odd)| OddEntry {
                modality,
                range: Some(range),
                odd,
            }))
            .collect();
        entries.sort_by_key(|e| (e.modality, e.range.map(|r| (r.first(), r.last()))));
        entries
    }
}

/// Complete settlement configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementConfig {
    /// Payout policy for simple group bets.
    pub simple_group_policy: SimpleGroupPolicy,

    /// Allowed position ranges per modality.
    pub position_limits: PositionLimits,

    /// Reject wagers whose range falls outside `position_limits`.
    pub enforce_position_limits: bool,

    /// Decimal places kept when amounts leave the engine.
    pub currency_scale: u32,

    /// Odds used by `SettlementEngine::settle`.
    #[serde(default)]
    pub odds: OddsTable,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            simple_group_policy: SimpleGroupPolicy::OncePerGuess,
            position_limits: PositionLimits::default(),
            enforce_position_limits: false,
            currency_scale: 2,
            odds: OddsTable::default(),
        }
    }
}

impl SettlementConfig {
    /// Set the simple group payout policy.
    #[must_use]
    pub fn with_simple_group_policy(mut self, policy: SimpleGroupPolicy) -> Self {
        self.simple_group_policy = policy;
        self
    }

    /// Enforce the given position limits on every wager.
    #[must_use]
    pub fn with_position_limits(mut self, limits: PositionLimits) -> Self {
        self.position_limits = limits;
        self.enforce_position_limits = true;
        self
    }

    /// Set the number of decimal places for reported amounts.
    #[must_use]
    pub fn with_currency_scale(mut self, scale: u32) -> Self {
        self.currency_scale = scale;
        self
    }

    /// Set the odds table.
    #[must_use]
    pub fn with_odds(mut self, odds: OddsTable) -> Self {
        self.odds = odds;
        self
    }
}
