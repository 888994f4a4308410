//! Derived prizes for extractions that pay beyond the 5th position.
//!
//! Some extractions publish 6th and 7th prizes computed from the first ones
//! instead of drawing them:
//! - 6th: sum of the first five prizes, last four digits
//! - 7th: first prize times second prize, dropping the last three digits
//!   and keeping the next three

use crate::core::{DomainError, DomainResult, ResultSequence};

use super::source::DrawSource;

/// Number of prizes that are actually drawn; the rest are derived.
pub const DRAWN_PRIZES: usize = 5;

/// Highest prize position that can be derived.
pub const MAX_DERIVED_PRIZES: usize = 7;

fn require(prizes: &[u16], required: usize) -> DomainResult<()> {
    if prizes.len() < required {
        return Err(DomainError::InsufficientPrizes {
            required,
            actual: prizes.len(),
        });
    }
    Ok(())
}

/// The 6th prize: sum of the first five, modulo 10000.
pub fn derive_sixth_prize(results: &ResultSequence) -> DomainResult<u16> {
    require(results.prizes(), DRAWN_PRIZES)?;
    Ok(sum_rule(results.prizes()))
}

/// The 7th prize: `floor(1st * 2nd / 1000) mod 1000`.
pub fn derive_seventh_prize(results: &ResultSequence) -> DomainResult<u16> {
    require(results.prizes(), 2)?;
    Ok(product_rule(results.prizes()))
}

fn sum_rule(prizes: &[u16]) -> u16 {
    let sum: u32 = prizes[..DRAWN_PRIZES].iter().map(|&p| u32::from(p)).sum();
    (sum % 10_000) as u16
}

fn product_rule(prizes: &[u16]) -> u16 {
    let product = u32::from(prizes[0]) * u32::from(prizes[1]);
    (product / 1000 % 1000) as u16
}

/// Extend the first five prizes with derived ones up to `total` positions.
///
/// Only the first five prizes of `results` are kept. `total` above 7 stops
/// at the 7th prize, since no later derivation rule exists.
pub fn with_derived_prizes(results: &ResultSequence, total: usize) -> DomainResult<ResultSequence> {
    require(results.prizes(), DRAWN_PRIZES)?;

    let mut prizes = results.prizes()[..DRAWN_PRIZES].to_vec();
    if total > DRAWN_PRIZES {
        prizes.push(sum_rule(&prizes));
    }
    if total >= MAX_DERIVED_PRIZES {
        prizes.push(product_rule(&prizes));
    }
    Ok(ResultSequence::from_checked(prizes))
}

/// Draw an extraction of `prize_count` prizes.
///
/// Up to five prizes are drawn from `source`; positions 6 and 7 are derived.
pub fn generate_extended_result<S: DrawSource + ?Sized>(
    source: &mut S,
    prize_count: usize,
) -> ResultSequence {
    let drawn = source.draw(prize_count.min(DRAWN_PRIZES));
    if prize_count <= DRAWN_PRIZES {
        return drawn;
    }

    let mut prizes = drawn.prizes().to_vec();
    prizes.push(sum_rule(&prizes));
    if prize_count >= MAX_DERIVED_PRIZES {
        prizes.push(product_rule(&prizes));
    }
    ResultSequence::from_checked(prizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::SeededDrawSource;

    fn sample() -> ResultSequence {
        ResultSequence::new([4321, 589, 7704, 1297, 5060]).unwrap()
    }

    #[test]
    fn test_sixth_prize() {
        // 4321 + 589 + 7704 + 1297 + 5060 = 18971
        assert_eq!(derive_sixth_prize(&sample()).unwrap(), 8971);
    }

    #[test]
    fn test_seventh_prize() {
        // 4321 * 589 = 2545069 -> 2545 -> 545
        assert_eq!(derive_seventh_prize(&sample()).unwrap(), 545);
    }

    #[test]
    fn test_insufficient_prizes() {
        let three = ResultSequence::new([1, 2, 3]).unwrap();
        assert_eq!(
            derive_sixth_prize(&three),
            Err(DomainError::InsufficientPrizes { required: 5, actual: 3 })
        );
        assert!(derive_seventh_prize(&ResultSequence::new([1]).unwrap()).is_err());

        let short = ResultSequence::new([1, 2, 3, 4]).unwrap();
        assert!(with_derived_prizes(&short, 7).is_err());
    }

    #[test]
    fn test_with_derived_prizes() {
        let six = with_derived_prizes(&sample(), 6).unwrap();
        assert_eq!(six.prizes(), &[4321, 589, 7704, 1297, 5060, 8971]);

        let seven = with_derived_prizes(&sample(), 7).unwrap();
        assert_eq!(seven.prizes(), &[4321, 589, 7704, 1297, 5060, 8971, 545]);

        let ten = with_derived_prizes(&sample(), 10).unwrap();
        assert_eq!(ten.len(), 7);

        let five = with_derived_prizes(&sample(), 5).unwrap();
        assert_eq!(five, sample());
    }

    #[test]
    fn test_generate_extended() {
        let mut source = SeededDrawSource::new(9);
        let results = generate_extended_result(&mut source, 7);
        assert_eq!(results.len(), 7);

        let drawn = ResultSequence::new(results[..5].iter().map(|&p| u32::from(p))).unwrap();
        assert_eq!(with_derived_prizes(&drawn, 7).unwrap(), results);

        assert_eq!(generate_extended_result(&mut source, 3).len(), 3);
        assert_eq!(generate_extended_result(&mut source, 6).len(), 6);
    }
}
