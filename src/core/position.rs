//! Prize position ranges.
//!
//! Positions are 1-indexed: position 1 is the first prize. A range is a
//! closed interval `[from, to]` and may extend past the number of prizes
//! actually drawn; the extra positions simply never match.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};

/// Closed, 1-indexed interval of prize positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct PositionRange {
    from: u32,
    to: u32,
}

#[derive(Deserialize)]
struct RawRange {
    from: u32,
    to: u32,
}

impl TryFrom<RawRange> for PositionRange {
    type Error = DomainError;

    fn try_from(raw: RawRange) -> DomainResult<Self> {
        Self::new(raw.from, raw.to)
    }
}

impl PositionRange {
    /// Create a range. Both bounds must be at least 1 and `from <= to`.
    pub fn new(from: u32, to: u32) -> DomainResult<Self> {
        if from < 1 || to < 1 || from > to {
            return Err(DomainError::InvalidPositionRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// A range covering a single position.
    pub fn single(position: u32) -> DomainResult<Self> {
        Self::new(position, position)
    }

    /// The first and second prize, the fixed range of passe bets.
    #[must_use]
    pub const fn first_two() -> Self {
        Self { from: 1, to: 2 }
    }

    /// First position (1-indexed).
    #[must_use]
    pub const fn first(self) -> u32 {
        self.from
    }

    /// Last position (1-indexed, inclusive).
    #[must_use]
    pub const fn last(self) -> u32 {
        self.to
    }

    /// Number of positions covered.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.to - self.from + 1
    }

    /// Always false; a valid range covers at least one position.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Zero-based indices covered by the range.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (self.from as usize - 1)..(self.to as usize)
    }

    /// The part of `items` this range covers.
    ///
    /// Positions past the end of `items` are dropped, so the result may be
    /// shorter than `len()` or empty.
    #[must_use]
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let start = (self.from as usize - 1).min(items.len());
        let end = (self.to as usize).min(items.len());
        &items[start..end]
    }

    /// Parse position text as entered by players and operators.
    ///
    /// Accepts a single position or a `from-to` pair, each written as digits
    /// with an optional `º`, `st`, `nd`, `rd` or `th` suffix: `"1st"`,
    /// `"1º"`, `"3"`, `"1-5"` and `"1º-3º"`. Anything else is rejected.
    ///
    /// ```
    /// use bicho_engine::core::PositionRange;
    ///
    /// let range = PositionRange::parse("1-5").unwrap();
    /// assert_eq!((range.first(), range.last()), (1, 5));
    /// assert_eq!(PositionRange::parse("1st").unwrap().len(), 1);
    /// assert!(PositionRange::parse("1-5-9").is_err());
    /// ```
    pub fn parse(text: &str) -> DomainResult<Self> {
        let text = text.trim();
        let unparsable = || DomainError::UnparsablePosition(text.to_string());

        let positions = text
            .split('-')
            .map(|part| parse_ordinal(part.trim()).ok_or_else(unparsable))
            .collect::<DomainResult<Vec<u32>>>()?;

        match positions[..] {
            [single] => Self::single(single),
            [from, to] => Self::new(from, to),
            _ => Err(unparsable()),
        }
    }
}

/// Digits followed by an optional ordinal suffix.
fn parse_ordinal(part: &str) -> Option<u32> {
    let end = part.find(|c: char| !c.is_ascii_digit()).unwrap_or(part.len());
    let (digits, suffix) = part.split_at(end);
    if digits.is_empty() {
        return None;
    }

    let known_suffix = suffix.is_empty()
        || suffix == "º"
        || ["st", "nd", "rd", "th"].iter().any(|s| suffix.eq_ignore_ascii_case(s));
    if !known_suffix {
        return None;
    }
    digits.parse().ok()
}

impl std::fmt::Display for PositionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.from == self.to {
            write!(f, "{}º", self.from)
        } else {
            write!(f, "{}º ao {}º", self.from, self.to)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert!(PositionRange::new(1, 5).is_ok());
        assert!(PositionRange::new(3, 3).is_ok());
        assert_eq!(
            PositionRange::new(0, 5),
            Err(DomainError::InvalidPositionRange { from: 0, to: 5 })
        );
        assert!(PositionRange::new(4, 2).is_err());
    }

    #[test]
    fn test_len() {
        assert_eq!(PositionRange::new(1, 5).unwrap().len(), 5);
        assert_eq!(PositionRange::first_two().len(), 2);
        assert_eq!(PositionRange::single(7).unwrap().len(), 1);
    }

    #[test]
    fn test_indices() {
        let indices: Vec<usize> = PositionRange::new(2, 4).unwrap().indices().collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_slice_is_lenient() {
        let items = [10, 20, 30];
        assert_eq!(PositionRange::new(1, 5).unwrap().slice(&items), &[10, 20, 30]);
        assert_eq!(PositionRange::new(2, 2).unwrap().slice(&items), &[20]);
        assert!(PositionRange::new(4, 7).unwrap().slice(&items).is_empty());

        let empty: [u16; 0] = [];
        assert!(PositionRange::new(1, 5).unwrap().slice(&empty).is_empty());
    }

    #[test]
    fn test_parse() {
        assert_eq!(PositionRange::parse("1st").unwrap(), PositionRange::single(1).unwrap());
        assert_eq!(PositionRange::parse("1º").unwrap(), PositionRange::single(1).unwrap());
        assert_eq!(PositionRange::parse("1-3").unwrap(), PositionRange::new(1, 3).unwrap());
        assert_eq!(PositionRange::parse("1º-7º").unwrap(), PositionRange::new(1, 7).unwrap());
        assert_eq!(PositionRange::parse(" 4 ").unwrap(), PositionRange::single(4).unwrap());

        assert!(matches!(
            PositionRange::parse("abc"),
            Err(DomainError::UnparsablePosition(_))
        ));
        assert!(PositionRange::parse("5-1").is_err());

        assert_eq!(PositionRange::parse("2nd").unwrap(), PositionRange::single(2).unwrap());
        assert_eq!(PositionRange::parse("3rd-5th").unwrap(), PositionRange::new(3, 5).unwrap());
        assert_eq!(PositionRange::parse("1 - 5").unwrap(), PositionRange::new(1, 5).unwrap());
        for text in ["1-5-9", "x1y", "1abc-5zz", "", "-", "1-", "5x"] {
            assert_eq!(
                PositionRange::parse(text),
                Err(DomainError::UnparsablePosition(text.to_string())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(PositionRange::single(1).unwrap().to_string(), "1º");
        assert_eq!(PositionRange::new(1, 5).unwrap().to_string(), "1º ao 5º");
    }

    #[test]
    fn test_serde_validates() {
        let range: PositionRange = serde_json::from_str(r#"{"from":1,"to":5}"#).unwrap();
        assert_eq!(range.len(), 5);
        assert!(serde_json::from_str::<PositionRange>(r#"{"from":5,"to":1}"#).is_err());
    }
}
