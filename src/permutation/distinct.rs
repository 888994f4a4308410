//! Distinct permutations of a digit string.

/// Every distinct arrangement of the characters of `digits`, in
/// lexicographic order.
///
/// Enumerates every arrangement, so it is meant for the short digit strings
/// of inverted palpites. Leading zeros are kept: "0258" and "2580" are different arrangements.
/// Repeated characters do not produce duplicates.
///
/// ```
/// use bicho_engine::permutation::distinct_permutations;
///
/// assert_eq!(distinct_permutations("112"), vec!["112", "121", "211"]);
/// ```
#[must_use]
pub fn distinct_permutations(digits: &str) -> Vec<String> {
    let mut chars: Vec<char> = digits.chars().collect();
    chars.sort_unstable();

    let mut out = vec![chars.iter().collect::<String>()];
    while next_permutation(&mut chars) {
        out.push(chars.iter().collect());
    }
    out
}

/// Number of distinct arrangements of the characters of `digits`.
///
/// Computed as the multinomial `n! / (c1! * c2! * ...)` over the character
/// counts, without enumerating. `None` when the count does not fit in a
/// `u64`; 21 distinct characters already overflow.
///
/// ```
/// use bicho_engine::permutation::count_distinct_permutations;
///
/// assert_eq!(count_distinct_permutations("2580"), Some(24));
/// assert_eq!(count_distinct_permutations("abcdefghijklmnopqrstu"), None);
/// ```
#[must_use]
pub fn count_distinct_permutations(digits: &str) -> Option<u64> {
    let mut chars: Vec<char> = digits.chars().collect();
    chars.sort_unstable();

    let mut total = 1u64;
    let mut placed = 0u64;
    for run in chars.chunk_by(|a, b| a == b) {
        // Multiply in C(placed + run, run) one factor at a time. Each step
        // lands on a binomial, so `k / g` divides `total` exactly.
        for k in 1..=run.len() as u64 {
            placed += 1;
            let g = gcd(placed, k);
            total = (total / (k / g)).checked_mul(placed / g)?;
        }
    }
    Some(total)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Advance `items` to the next lexicographic permutation.
///
/// Returns false, leaving `items` untouched, when it is already the last one.
fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot] {
        successor -= 1;
    }

    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_counts() {
        assert_eq!(count_distinct_permutations("1234"), Some(24));
        assert_eq!(count_distinct_permutations("1122"), Some(6));
        assert_eq!(count_distinct_permutations("1112"), Some(4));
        assert_eq!(count_distinct_permutations("0000"), Some(1));
        assert_eq!(count_distinct_permutations("25"), Some(2));
        assert_eq!(count_distinct_permutations("255"), Some(3));
        assert_eq!(count_distinct_permutations(""), Some(1));
    }

    #[test]
    fn test_count_overflow() {
        // 20! fits in a u64, 21! does not
        assert_eq!(count_distinct_permutations("abcdefghijklmnopqrst"), Some(2_432_902_008_176_640_000));
        assert_eq!(count_distinct_permutations("abcdefghijklmnopqrstu"), None);

        // Long runs stay exact: 40! / (20! * 20!) = C(40, 20)
        let halves = format!("{}{}", "0".repeat(20), "1".repeat(20));
        assert_eq!(count_distinct_permutations(&halves), Some(137_846_528_820));
        assert_eq!(count_distinct_permutations(&"7".repeat(1000)), Some(1));
    }

    #[test]
    fn test_permutations_with_zero() {
        let perms = distinct_permutations("2580");
        assert_eq!(perms.len(), 24);
        for expected in ["2580", "0258", "8520"] {
            assert!(perms.iter().any(|p| p == expected), "missing {}", expected);
        }

        let unique: HashSet<_> = perms.iter().collect();
        assert_eq!(unique.len(), perms.len());
    }

    #[test]
    fn test_permutations_sorted() {
        let perms = distinct_permutations("2580");
        let mut sorted = perms.clone();
        sorted.sort();
        assert_eq!(perms, sorted);
        assert_eq!(perms.first().map(String::as_str), Some("0258"));
        assert_eq!(perms.last().map(String::as_str), Some("8520"));
    }

    #[test]
    fn test_repeated_digits() {
        assert_eq!(
            distinct_permutations("1122"),
            vec!["1122", "1212", "1221", "2112", "2121", "2211"]
        );
        assert_eq!(distinct_permutations("0000"), vec!["0000"]);
    }

    #[test]
    fn test_count_matches_enumeration() {
        for digits in ["1234", "1122", "0001", "9099", "12", "11", "123", "101"] {
            assert_eq!(
                count_distinct_permutations(digits),
                Some(distinct_permutations(digits).len() as u64),
                "mismatch for {}",
                digits
            );
        }
    }

    #[test]
    fn test_next_permutation_last() {
        let mut items = [3, 2, 1];
        assert!(!next_permutation(&mut items));
        assert_eq!(items, [3, 2, 1]);
    }
}
