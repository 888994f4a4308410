//! Wagers: palpites of one modality on one position range.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{DomainError, DomainResult, PositionRange};
use crate::finance::{total_stake, DivisionMode};

use super::kind::Modality;
use super::palpite::Palpite;

/// A bet as placed on a ticket.
///
/// All palpites share the wager's modality, range and stake. A wager with
/// no palpites is valid and settles to zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWager")]
pub struct Wager {
    modality: Modality,
    palpites: Vec<Palpite>,
    range: PositionRange,
    stake: Decimal,
    division: DivisionMode,
}

#[derive(Deserialize)]
struct RawWager {
    modality: Modality,
    #[serde(default)]
    palpites: Vec<Palpite>,
    range: PositionRange,
    stake: Decimal,
    #[serde(default)]
    division: DivisionMode,
}

impl TryFrom<RawWager> for Wager {
    type Error = DomainError;

    fn try_from(raw: RawWager) -> DomainResult<Self> {
        raw.palpites.into_iter().try_fold(
            Wager::new(raw.modality, raw.range, raw.stake, raw.division)?,
            Wager::with_palpite,
        )
    }
}

impl Wager {
    /// Create an empty wager.
    pub fn new(modality: Modality, range: PositionRange, stake: Decimal, division: DivisionMode) -> DomainResult<Self> {
        if stake.is_sign_negative() && !stake.is_zero() {
            return Err(DomainError::NegativeStake);
        }
        Ok(Self {
            modality,
            palpites: Vec::new(),
            range,
            stake,
            division,
        })
    }

    /// Add a palpite, which must belong to the wager's modality.
    pub fn with_palpite(mut self, palpite: Palpite) -> DomainResult<Self> {
        self.push(palpite)?;
        Ok(self)
    }

    /// Add several palpites.
    pub fn with_palpites(self, palpites: impl IntoIterator<Item = Palpite>) -> DomainResult<Self> {
        palpites.into_iter().try_fold(self, Self::with_palpite)
    }

    /// Add a palpite in place.
    pub fn push(&mut self, palpite: Palpite) -> DomainResult<()> {
        if palpite.modality() != self.modality {
            return Err(DomainError::ModalityMismatch {
                expected: self.modality,
                found: palpite.modality(),
            });
        }
        self.palpites.push(palpite);
        Ok(())
    }

    #[must_use]
    pub const fn modality(&self) -> Modality {
        self.modality
    }

    #[must_use]
    pub fn palpites(&self) -> &[Palpite] {
        &self.palpites
    }

    #[must_use]
    pub const fn range(&self) -> PositionRange {
        self.range
    }

    /// The entered stake, before division.
    #[must_use]
    pub const fn stake(&self) -> Decimal {
        self.stake
    }

    #[must_use]
    pub const fn division(&self) -> DivisionMode {
        self.division
    }

    /// Number of palpites.
    #[must_use]
    pub fn guess_count(&self) -> u64 {
        self.palpites.len() as u64
    }

    /// Amount debited for the whole wager.
    #[must_use]
    pub fn total_stake(&self) -> Decimal {
        total_stake(self.stake, self.guess_count(), self.division)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn range() -> PositionRange {
        PositionRange::new(1, 5).unwrap()
    }

    #[test]
    fn test_build_wager() {
        let wager = Wager::new(Modality::Group, range(), dec!(2.00), DivisionMode::Each)
            .unwrap()
            .with_palpites([Palpite::group(1).unwrap(), Palpite::group(9).unwrap()])
            .unwrap();

        assert_eq!(wager.guess_count(), 2);
        assert_eq!(wager.total_stake(), dec!(4.00));
    }

    #[test]
    fn test_rejects_negative_stake() {
        assert_eq!(
            Wager::new(Modality::Group, range(), dec!(-0.01), DivisionMode::Each),
            Err(DomainError::NegativeStake)
        );
        assert!(Wager::new(Modality::Group, range(), Decimal::ZERO, DivisionMode::All).is_ok());
    }

    #[test]
    fn test_rejects_foreign_palpite() {
        let result = Wager::new(Modality::Group, range(), dec!(1), DivisionMode::Each)
            .unwrap()
            .with_palpite(Palpite::number(Modality::Decade, 5).unwrap());

        assert_eq!(
            result,
            Err(DomainError::ModalityMismatch {
                expected: Modality::Group,
                found: Modality::Decade,
            })
        );
    }

    #[test]
    fn test_serde_validates_palpites() {
        let wager = Wager::new(Modality::Group, range(), dec!(1.50), DivisionMode::All)
            .unwrap()
            .with_palpite(Palpite::group(3).unwrap())
            .unwrap();
        let json = serde_json::to_string(&wager).unwrap();
        assert_eq!(serde_json::from_str::<Wager>(&json).unwrap(), wager);

        let mismatched = json.replacen("\"GROUP\"", "\"DECADE\"", 1);
        assert!(serde_json::from_str::<Wager>(&mismatched).is_err());
    }
}
