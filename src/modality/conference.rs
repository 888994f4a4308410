//! Conferencing: scoring a palpite against a draw.
//!
//! Each rule takes a validated draw, the palpite's targets and a position
//! range, and returns the number of hits. Rules are total: positions past
//! the end of the draw contribute nothing, and nothing here can fail.
//!
//! | Rule            | Hits                                              |
//! |-----------------|---------------------------------------------------|
//! | simple group    | 1 if drawn in range (or 1 per position, by policy) |
//! | group set       | 1 if every target group is drawn in range         |
//! | number          | 1 per position whose trailing digits match        |
//! | inverted        | 1 per position matching any digit arrangement     |
//! | passe           | 1 if the 1st/2nd prizes carry the pair            |

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::core::group::group_of_thousand;
use crate::core::{groups_in_range, Group, PositionRange, ResultSequence, SimpleGroupPolicy};
use crate::permutation::distinct_permutations;

use super::kind::Modality;
use super::palpite::{Palpite, Target};

/// Simple group rule.
#[must_use]
pub fn simple_group_hits(results: &ResultSequence, group: Group, range: PositionRange, policy: SimpleGroupPolicy) -> u64 {
    let occurrences = groups_in_range(results, range)
        .into_iter()
        .filter(|&g| g == group)
        .count() as u64;

    match policy {
        SimpleGroupPolicy::OncePerGuess => occurrences.min(1),
        SimpleGroupPolicy::PerOccurrence => occurrences,
    }
}

/// Double, triple, quadruple and quintuple group rule.
///
/// One hit when every target group is among the groups drawn in range,
/// regardless of which positions or how often.
#[must_use]
pub fn group_set_hits(results: &ResultSequence, groups: &[Group], range: PositionRange) -> u64 {
    let present: FxHashSet<Group> = groups_in_range(results, range).into_iter().collect();
    u64::from(groups.iter().all(|g| present.contains(g)))
}

/// Decade, hundred and thousand rule: one hit per matching position.
#[must_use]
pub fn number_hits(results: &ResultSequence, value: u16, digits: usize, range: PositionRange) -> u64 {
    let modulus = modulus(digits);
    range
        .slice(results.prizes())
        .iter()
        .filter(|&&prize| prize % modulus == value)
        .count() as u64
}

/// Inverted rule: one hit per position matching any arrangement of `digits`.
///
/// Arrangements are compared as integers on the trailing `digits.len()`
/// digits, so "0258" matches a drawn 258.
#[must_use]
pub fn inverted_hits(results: &ResultSequence, digits: &str, range: PositionRange) -> u64 {
    let modulus = modulus(digits.len());
    let accepted: FxHashSet<u16> = distinct_permutations(digits)
        .iter()
        .filter_map(|p| p.parse().ok())
        .collect();

    range
        .slice(results.prizes())
        .iter()
        .filter(|&&prize| accepted.contains(&(prize % modulus)))
        .count() as u64
}

/// Passe rule on the 1st and 2nd prizes.
///
/// `either_order` accepts the pair reversed (vai-e-vem). Draws with fewer
/// than two prizes never hit.
#[must_use]
pub fn passe_hits(results: &ResultSequence, first: Group, second: Group, either_order: bool) -> u64 {
    let [p1, p2, ..] = results.prizes() else {
        return 0;
    };
    let drawn = (group_of_thousand(*p1), group_of_thousand(*p2));

    let hit = drawn == (first, second) || (either_order && drawn == (second, first));
    u64::from(hit)
}

fn modulus(digits: usize) -> u16 {
    match digits {
        2 => 100,
        3 => 1000,
        _ => 10_000,
    }
}

impl Palpite {
    /// Score this palpite against drawn prizes.
    ///
    /// `range` is ignored by the passe modalities, which always look at the
    /// 1st and 2nd prize.
    #[must_use]
    pub fn hits(&self, results: &ResultSequence, range: PositionRange, policy: SimpleGroupPolicy) -> u64 {
        let modality = self.modality();
        let hits = match self.target() {
            Target::Groups(groups) if modality == Modality::Group => {
                simple_group_hits(results, groups[0], range, policy)
            }
            Target::Groups(groups) => group_set_hits(results, groups, range),
            Target::Number(value) => number_hits(results, *value, modality.digit_count().unwrap_or(4), range),
            Target::Digits(digits) => inverted_hits(results, digits, range),
            Target::Pair { first, second } => {
                passe_hits(results, *first, *second, modality == Modality::PasseVaiEVem)
            }
        };

        trace!(palpite = %self, %range, hits, "conferred");
        hits
    }

    /// Scoring positions the palpite's units are spread over.
    ///
    /// Passe bets occupy one slot, the 1st-2nd pair; every other modality
    /// has one slot per position in range.
    #[must_use]
    pub fn scoring_positions(&self, range: PositionRange) -> u32 {
        if self.modality().is_passe() {
            1
        } else {
            range.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(id: u8) -> Group {
        Group::new(id).unwrap()
    }

    fn range(from: u32, to: u32) -> PositionRange {
        PositionRange::new(from, to).unwrap()
    }

    fn draw(prizes: &[u32]) -> ResultSequence {
        ResultSequence::new(prizes.iter().copied()).unwrap()
    }

    // 4321 -> 6, 0589 -> 23, 7704 -> 1, 1297 -> 25, 5060 -> 15
    fn reference() -> ResultSequence {
        draw(&[4321, 589, 7704, 1297, 5060])
    }

    #[test]
    fn test_simple_group() {
        assert_eq!(simple_group_hits(&reference(), g(6), range(1, 5), SimpleGroupPolicy::OncePerGuess), 1);
        assert_eq!(simple_group_hits(&reference(), g(6), range(2, 5), SimpleGroupPolicy::OncePerGuess), 0);
        assert_eq!(simple_group_hits(&reference(), g(2), range(1, 5), SimpleGroupPolicy::OncePerGuess), 0);
    }

    #[test]
    fn test_simple_group_policy() {
        let results = draw(&[1221, 3422, 5601]);
        assert_eq!(simple_group_hits(&results, g(6), range(1, 3), SimpleGroupPolicy::OncePerGuess), 1);
        assert_eq!(simple_group_hits(&results, g(6), range(1, 3), SimpleGroupPolicy::PerOccurrence), 2);
    }

    #[test]
    fn test_group_set() {
        assert_eq!(group_set_hits(&reference(), &[g(1), g(6), g(15), g(25)], range(1, 5)), 1);
        assert_eq!(group_set_hits(&reference(), &[g(1), g(6), g(15), g(24)], range(1, 5)), 0);
        assert_eq!(group_set_hits(&reference(), &[g(6), g(23)], range(1, 2)), 1);
        assert_eq!(group_set_hits(&reference(), &[g(6), g(1)], range(1, 2)), 0);
    }

    #[test]
    fn test_number_counts_positions() {
        let results = draw(&[1234, 5534, 9934, 1000]);
        assert_eq!(number_hits(&results, 34, 2, range(1, 4)), 3);
        assert_eq!(number_hits(&results, 534, 3, range(1, 4)), 1);
        assert_eq!(number_hits(&results, 1000, 4, range(1, 3)), 0);
        assert_eq!(number_hits(&results, 0, 2, range(1, 7)), 1);
    }

    #[test]
    fn test_inverted() {
        let results = draw(&[2580, 258, 8520, 1111]);
        assert_eq!(inverted_hits(&results, "2580", range(1, 4)), 3);
        assert_eq!(inverted_hits(&results, "0258", range(2, 2)), 1);
        assert_eq!(inverted_hits(&results, "1111", range(1, 4)), 1);
        assert_eq!(inverted_hits(&draw(&[1252]), "25", range(1, 1)), 1);
        assert_eq!(inverted_hits(&draw(&[1520]), "25", range(1, 1)), 0);
    }

    #[test]
    fn test_passe() {
        assert_eq!(passe_hits(&reference(), g(6), g(23), false), 1);
        assert_eq!(passe_hits(&reference(), g(23), g(6), false), 0);
        assert_eq!(passe_hits(&reference(), g(23), g(6), true), 1);
        assert_eq!(passe_hits(&draw(&[4321]), g(6), g(23), true), 0);
        assert_eq!(passe_hits(&draw(&[]), g(6), g(23), false), 0);
    }

    #[test]
    fn test_out_of_range_positions_are_silent() {
        let results = draw(&[4321, 589]);
        assert_eq!(number_hits(&results, 21, 2, range(3, 7)), 0);
        assert_eq!(group_set_hits(&results, &[g(6), g(23)], range(1, 25)), 1);
        assert_eq!(simple_group_hits(&draw(&[]), g(6), range(1, 5), SimpleGroupPolicy::PerOccurrence), 0);
    }

    #[test]
    fn test_palpite_dispatch() {
        let policy = SimpleGroupPolicy::OncePerGuess;
        let all = range(1, 5);

        let quadra = Palpite::groups(Modality::QuadrupleGroup, &[1, 6, 15, 25]).unwrap();
        assert_eq!(quadra.hits(&reference(), all, policy), 1);

        let milhar = Palpite::number(Modality::Thousand, 589).unwrap();
        assert_eq!(milhar.hits(&reference(), all, policy), 1);

        let centena = Palpite::number(Modality::Hundred, 704).unwrap();
        assert_eq!(centena.hits(&reference(), all, policy), 1);

        let invertida = Palpite::inverted(Modality::InvertedThousand, "1234").unwrap();
        assert_eq!(invertida.hits(&reference(), all, policy), 1);

        let passe = Palpite::passe_vai_e_vem(23, 6).unwrap();
        assert_eq!(passe.hits(&reference(), range(3, 5), policy), 1);
    }

    #[test]
    fn test_scoring_positions() {
        let passe = Palpite::passe(1, 2).unwrap();
        assert_eq!(passe.scoring_positions(PositionRange::first_two()), 1);

        let grupo = Palpite::group(1).unwrap();
        assert_eq!(grupo.scoring_positions(range(1, 5)), 5);
    }
}
