//! Domain errors raised while building wagers and draws.
//!
//! Every variant describes an input that lies outside its valid domain.
//! They are raised eagerly at construction time, so settlement of an
//! already-built wager never has to deal with them.
//!
//! A `DomainError` means "reject the wager". It must never be folded into
//! a zero-payout settlement.

use thiserror::Error;

use crate::core::PositionRange;
use crate::modality::Modality;

/// An input value outside its valid domain.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Decade outside [0, 99].
    #[error("decade {0} is outside 0..=99")]
    DecadeOutOfRange(u32),

    /// Hundred outside [0, 999].
    #[error("hundred {0} is outside 0..=999")]
    HundredOutOfRange(u32),

    /// Thousand outside [0, 9999].
    #[error("thousand {0} is outside 0..=9999")]
    ThousandOutOfRange(u32),

    /// Group outside [1, 25].
    #[error("group {0} is outside 1..=25")]
    GroupOutOfRange(u32),

    /// Position range with `from > to` or a bound below 1.
    #[error("invalid position range {from}-{to}")]
    InvalidPositionRange { from: u32, to: u32 },

    /// Position text that could not be parsed.
    #[error("cannot parse position '{0}'")]
    UnparsablePosition(String),

    /// Position range rejected by the configured limits.
    #[error("position range {range} is not allowed for {modality}")]
    PositionNotAllowed { modality: Modality, range: PositionRange },

    /// Fixed-arity group modality given the wrong number of groups.
    #[error("{modality} takes exactly {expected} groups, got {actual}")]
    WrongGroupCount {
        modality: Modality,
        expected: usize,
        actual: usize,
    },

    /// The same group appears twice in a group set.
    #[error("group {0} appears more than once")]
    DuplicateGroup(u8),

    /// Digit string that is not all ASCII digits or has the wrong length.
    #[error("'{digits}' is not a {expected}-digit number")]
    InvalidDigits { digits: String, expected: usize },

    /// Palpite built for one modality added to a wager of another.
    #[error("palpite for {found} cannot be placed in a {expected} wager")]
    ModalityMismatch { expected: Modality, found: Modality },

    /// Modality that does not take the requested kind of target.
    #[error("{0} does not take this kind of target")]
    UnsupportedTarget(Modality),

    /// Negative stake.
    #[error("stake must not be negative")]
    NegativeStake,

    /// Negative odd.
    #[error("odd must not be negative")]
    NegativeOdd,

    /// No odd configured for the modality and range.
    #[error("no odd configured for {modality} at {range}")]
    MissingOdd { modality: Modality, range: PositionRange },

    /// Not enough drawn prizes to derive the extended ones.
    #[error("need at least {required} prizes, got {actual}")]
    InsufficientPrizes { required: usize, actual: usize },
}

/// Result alias used by all fallible constructors.
pub type DomainResult<T> = Result<T, DomainError>;
