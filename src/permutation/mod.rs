//! Distinct digit permutations for the inverted modalities.
//!
//! An inverted bet on "2580" wins with any arrangement of its digits, so
//! the engine needs the set of distinct arrangements (to match draws) and
//! its size (to count combinations in the payout pipeline).

pub mod distinct;

pub use distinct::{count_distinct_permutations, distinct_permutations};
