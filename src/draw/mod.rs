//! Draw sources and derived prizes.
//!
//! The engine settles against any externally supplied `ResultSequence`.
//! This module only covers the instant draws it can produce itself.

pub mod source;
pub mod extended;

pub use source::{generate_instant_result, DrawSeedState, DrawSource, SecureDrawSource, SeededDrawSource};
pub use extended::{
    derive_seventh_prize, derive_sixth_prize, generate_extended_result, with_derived_prizes, DRAWN_PRIZES,
    MAX_DERIVED_PRIZES,
};
