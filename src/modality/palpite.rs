//! Palpites: validated bet targets.
//!
//! Every constructor checks its targets against the modality, so a
//! `Palpite` that exists is always settleable. Domain errors surface here,
//! never during settlement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DomainError, DomainResult, Group};
use crate::permutation::count_distinct_permutations;

use super::kind::Modality;

/// Groups of a group-set palpite, sorted and distinct.
pub type GroupSet = SmallVec<[Group; 5]>;

/// What a palpite bets on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// One to five distinct groups.
    Groups(GroupSet),
    /// Decade, hundred or thousand value.
    Number(u16),
    /// Digit string whose arrangements are all accepted.
    Digits(String),
    /// Groups expected at the 1st and 2nd prize.
    Pair { first: Group, second: Group },
}

/// A single validated guess within a wager.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPalpite")]
pub struct Palpite {
    modality: Modality,
    target: Target,
}

#[derive(Deserialize)]
struct RawPalpite {
    modality: Modality,
    target: Target,
}

impl TryFrom<RawPalpite> for Palpite {
    type Error = DomainError;

    fn try_from(raw: RawPalpite) -> DomainResult<Self> {
        Self::validate(raw.modality, raw.target)
    }
}

impl Palpite {
    /// Simple group palpite.
    pub fn group(group: u8) -> DomainResult<Self> {
        Self::groups(Modality::Group, &[group])
    }

    /// Group-set palpite (simple, double, triple, quadruple or quintuple).
    ///
    /// The number of groups must match the modality and no group may repeat.
    pub fn groups(modality: Modality, groups: &[u8]) -> DomainResult<Self> {
        let groups = groups
            .iter()
            .map(|&g| Group::new(g))
            .collect::<DomainResult<GroupSet>>()?;
        Self::validate(modality, Target::Groups(groups))
    }

    /// Decade, hundred or thousand palpite.
    pub fn number(modality: Modality, value: u32) -> DomainResult<Self> {
        if modality.digit_count().is_none() || modality.is_inverted() {
            return Err(DomainError::UnsupportedTarget(modality));
        }
        let value = u16::try_from(value).map_err(|_| out_of_range(modality, value))?;
        Self::validate(modality, Target::Number(value))
    }

    /// Inverted palpite from its digit string, leading zeros included.
    pub fn inverted(modality: Modality, digits: &str) -> DomainResult<Self> {
        Self::validate(modality, Target::Digits(digits.to_string()))
    }

    /// Ordered passe: `first` at the 1st prize, `second` at the 2nd.
    pub fn passe(first: u8, second: u8) -> DomainResult<Self> {
        Self::pair(Modality::Passe, first, second)
    }

    /// Passe accepting the two groups in either order.
    pub fn passe_vai_e_vem(first: u8, second: u8) -> DomainResult<Self> {
        Self::pair(Modality::PasseVaiEVem, first, second)
    }

    fn pair(modality: Modality, first: u8, second: u8) -> DomainResult<Self> {
        Self::validate(
            modality,
            Target::Pair {
                first: Group::new(first)?,
                second: Group::new(second)?,
            },
        )
    }

    /// Parse a palpite as typed on a ticket.
    ///
    /// Group lists and passe pairs are separated by `-`, `,`, `/` or spaces
    /// ("01-06-15-25"). Number and inverted palpites are plain digits, with
    /// leading zeros ("0589").
    ///
    /// ```
    /// use bicho_engine::modality::{Modality, Palpite};
    ///
    /// let palpite = Palpite::parse(Modality::DoubleGroup, "07-19").unwrap();
    /// assert_eq!(palpite.modality(), Modality::DoubleGroup);
    /// assert!(Palpite::parse(Modality::DoubleGroup, "07").is_err());
    /// ```
    pub fn parse(modality: Modality, text: &str) -> DomainResult<Self> {
        let text = text.trim();

        if modality.group_arity().is_some() || modality.is_passe() {
            let groups = text
                .split(|c: char| c == '-' || c == ',' || c == '/' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .map(parse_group)
                .collect::<DomainResult<Vec<u8>>>()?;

            if modality.is_passe() {
                return match groups.as_slice() {
                    [first, second] => Self::pair(modality, *first, *second),
                    _ => Err(DomainError::WrongGroupCount {
                        modality,
                        expected: 2,
                        actual: groups.len(),
                    }),
                };
            }
            return Self::groups(modality, &groups);
        }

        if modality.is_inverted() {
            return Self::inverted(modality, text);
        }

        let expected = modality.digit_count().unwrap_or(0);
        if text.len() != expected || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidDigits {
                digits: text.to_string(),
                expected,
            });
        }
        let value = text.parse().map_err(|_| DomainError::InvalidDigits {
            digits: text.to_string(),
            expected,
        })?;
        Self::number(modality, value)
    }

    fn validate(modality: Modality, target: Target) -> DomainResult<Self> {
        let target = match (modality, target) {
            (m, Target::Groups(mut groups)) if m.group_arity().is_some() => {
                let expected = m.group_arity().unwrap_or(0);
                if groups.len() != expected {
                    return Err(DomainError::WrongGroupCount {
                        modality: m,
                        expected,
                        actual: groups.len(),
                    });
                }
                groups.sort_unstable();
                if let Some(pair) = groups.windows(2).find(|w| w[0] == w[1]) {
                    return Err(DomainError::DuplicateGroup(pair[0].raw()));
                }
                Target::Groups(groups)
            }
            (m @ (Modality::Decade | Modality::Hundred | Modality::Thousand), Target::Number(value)) => {
                let limit = match m.digit_count() {
                    Some(2) => 99,
                    Some(3) => 999,
                    _ => 9999,
                };
                if u32::from(value) > limit {
                    return Err(out_of_range(m, u32::from(value)));
                }
                Target::Number(value)
            }
            (m, Target::Digits(digits)) if m.is_inverted() => {
                let expected = m.digit_count().unwrap_or(0);
                if digits.len() != expected || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DomainError::InvalidDigits { digits, expected });
                }
                Target::Digits(digits)
            }
            (m, pair @ Target::Pair { .. }) if m.is_passe() => pair,
            (m, _) => return Err(DomainError::UnsupportedTarget(m)),
        };

        Ok(Self { modality, target })
    }

    /// The modality this palpite is scored under.
    #[must_use]
    pub const fn modality(&self) -> Modality {
        self.modality
    }

    /// The validated target.
    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    /// Combinations the palpite covers, for the payout pipeline.
    ///
    /// Inverted palpites cover one combination per distinct arrangement of
    /// their digits; everything else covers one.
    #[must_use]
    pub fn combinations(&self) -> u64 {
        match &self.target {
            // validated digits are at most four long, so the count always fits
            Target::Digits(digits) => count_distinct_permutations(digits).unwrap_or(u64::MAX),
            _ => 1,
        }
    }
}

impl std::fmt::Display for Palpite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.modality)?;
        match &self.target {
            Target::Groups(groups) => {
                for (i, group) in groups.iter().enumerate() {
                    if i > 0 {
                        write!(f, "-")?;
                    }
                    write!(f, "{}", group)?;
                }
                Ok(())
            }
            Target::Number(value) => {
                let width = self.modality.digit_count().unwrap_or(4);
                write!(f, "{:0width$}", value, width = width)
            }
            Target::Digits(digits) => f.write_str(digits),
            Target::Pair { first, second } => write!(f, "{}-{}", first, second),
        }
    }
}

fn parse_group(part: &str) -> DomainResult<u8> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvalidDigits {
            digits: part.to_string(),
            expected: 2,
        });
    }
    match part.parse::<u32>() {
        Ok(value) => u8::try_from(value).map_err(|_| DomainError::GroupOutOfRange(value)),
        Err(_) => Err(DomainError::GroupOutOfRange(u32::MAX)),
    }
}

fn out_of_range(modality: Modality, value: u32) -> DomainError {
    match modality {
        Modality::Decade => DomainError::DecadeOutOfRange(value),
        Modality::Hundred => DomainError::HundredOutOfRange(value),
        _ => DomainError::ThousandOutOfRange(value),
    }
}
