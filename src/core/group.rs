//! Group encoding.
//!
//! The 100 decades (last two digits of a drawn number) are split into 25
//! groups of four consecutive decades. Group 1 covers 01-04, group 2 covers
//! 05-08 and so on up to group 25, which covers 97, 98, 99 and wraps around
//! to include 00.
//!
//! The mapping is computed rather than tabulated, so there is no table to
//! keep consistent.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};
use super::position::PositionRange;
use super::result::ResultSequence;

/// Number of betting groups.
pub const GROUP_COUNT: u8 = 25;

/// Betting group identifier (1-25).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Group(u8);

impl Group {
    /// Create a group, rejecting anything outside 1-25.
    pub fn new(id: u8) -> DomainResult<Self> {
        if (1..=GROUP_COUNT).contains(&id) {
            Ok(Self(id))
        } else {
            Err(DomainError::GroupOutOfRange(id as u32))
        }
    }

    /// Get the raw group number.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The four decades covered by this group.
    ///
    /// ```
    /// use bicho_engine::core::Group;
    ///
    /// assert_eq!(Group::new(1).unwrap().decades(), [1, 2, 3, 4]);
    /// assert_eq!(Group::new(25).unwrap().decades(), [97, 98, 99, 0]);
    /// ```
    #[must_use]
    pub fn decades(self) -> [u8; 4] {
        if self.0 == GROUP_COUNT {
            return [97, 98, 99, 0];
        }
        let start = (self.0 - 1) * 4 + 1;
        [start, start + 1, start + 2, start + 3]
    }

    /// Iterate over all 25 groups in order.
    pub fn all() -> impl Iterator<Item = Group> {
        (1..=GROUP_COUNT).map(Group)
    }
}

impl TryFrom<u8> for Group {
    type Error = DomainError;

    fn try_from(id: u8) -> DomainResult<Self> {
        Self::new(id)
    }
}

impl From<Group> for u8 {
    fn from(group: Group) -> u8 {
        group.0
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Map a decade (0-99) to its group.
///
/// Decade 0 ("00") belongs to group 25.
pub fn decade_to_group(decade: u32) -> DomainResult<Group> {
    if decade > 99 {
        return Err(DomainError::DecadeOutOfRange(decade));
    }
    Ok(group_of_decade(decade as u8))
}

/// Map a thousand (0-9999) to the group of its last two digits.
pub fn thousand_to_group(thousand: u32) -> DomainResult<Group> {
    if thousand > 9999 {
        return Err(DomainError::ThousandOutOfRange(thousand));
    }
    Ok(group_of_decade((thousand % 100) as u8))
}

/// Groups of the results inside `range`, in position order.
///
/// Positions past the end of `results` are skipped silently. Prizes were
/// validated when the sequence was built, so this never fails.
#[must_use]
pub fn groups_in_range(results: &ResultSequence, range: PositionRange) -> Vec<Group> {
    range
        .slice(results.prizes())
        .iter()
        .map(|&thousand| group_of_thousand(thousand))
        .collect()
}

/// Group of an in-domain thousand.
pub(crate) fn group_of_thousand(thousand: u16) -> Group {
    group_of_decade((thousand % 100) as u8)
}

fn group_of_decade(decade: u8) -> Group {
    debug_assert!(decade <= 99);
    if decade == 0 {
        Group(GROUP_COUNT)
    } else {
        Group((decade - 1) / 4 + 1)
    }
}
