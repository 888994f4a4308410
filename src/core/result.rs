//! Drawn result sequences.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};
use super::group::{group_of_thousand, Group};
use super::position::PositionRange;

/// Largest value a drawn prize can take.
pub const MAX_THOUSAND: u16 = 9999;

/// Ordered prizes of one draw, index 0 being the first prize.
///
/// Every value is in [0, 9999]. The sequence is immutable once built and
/// can be shared freely between threads settling different wagers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct ResultSequence {
    prizes: Vec<u16>,
}

impl ResultSequence {
    /// Build a sequence from drawn thousands, rejecting values above 9999.
    pub fn new(prizes: impl IntoIterator<Item = u32>) -> DomainResult<Self> {
        let prizes = prizes
            .into_iter()
            .map(|value| {
                if value > MAX_THOUSAND as u32 {
                    Err(DomainError::ThousandOutOfRange(value))
                } else {
                    Ok(value as u16)
                }
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { prizes })
    }

    /// Wrap values already known to be in range.
    pub(crate) fn from_checked(prizes: Vec<u16>) -> Self {
        debug_assert!(prizes.iter().all(|&p| p <= MAX_THOUSAND));
        Self { prizes }
    }

    /// The drawn prizes.
    #[must_use]
    pub fn prizes(&self) -> &[u16] {
        &self.prizes
    }

    /// Group of every drawn prize, in position order.
    #[must_use]
    pub fn groups(&self) -> Vec<Group> {
        self.prizes.iter().map(|&p| group_of_thousand(p)).collect()
    }

    /// Groups of the prizes inside `range`.
    #[must_use]
    pub fn groups_in_range(&self, range: PositionRange) -> Vec<Group> {
        super::group::groups_in_range(self, range)
    }

    /// Prize at a 1-indexed position, if drawn.
    #[must_use]
    pub fn at_position(&self, position: u32) -> Option<u16> {
        let index = (position as usize).checked_sub(1)?;
        self.prizes.get(index).copied()
    }
}

impl Deref for ResultSequence {
    type Target = [u16];

    fn deref(&self) -> &[u16] {
        &self.prizes
    }
}

impl TryFrom<Vec<u32>> for ResultSequence {
    type Error = DomainError;

    fn try_from(prizes: Vec<u32>) -> DomainResult<Self> {
        Self::new(prizes)
    }
}

impl From<ResultSequence> for Vec<u32> {
    fn from(results: ResultSequence) -> Vec<u32> {
        results.prizes.into_iter().map(u32::from).collect()
    }
}

impl std::fmt::Display for ResultSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, prize) in self.prizes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:04}", prize)?;
        }
        Ok(())
    }
}
