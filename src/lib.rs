//! # bicho-engine
//!
//! Settlement rules engine for jogo do bicho wagers.
//!
//! Given a wager (modality, palpites, position range, stake) and a drawn
//! result sequence, the engine decides how many scoring units hit and how
//! much the wager pays.
//!
//! ## Design Principles
//!
//! 1. **Validate Early**: Every domain value is checked when it is built.
//!    Settling an existing wager cannot fail on bad input.
//!
//! 2. **Exact Money**: Amounts are `rust_decimal::Decimal` at full precision
//!    through the pipeline and rounded once, on the way out.
//!
//! 3. **Odds Are Inputs**: The engine never prices a bet. Odds come from
//!    the caller or from a configured `OddsTable`.
//!
//! ## Modules
//!
//! - `core`: Groups, position ranges, result sequences, errors, configuration
//! - `permutation`: Distinct digit permutations for inverted modalities
//! - `draw`: Secure and seeded draw sources, derived 6th/7th prizes
//! - `finance`: The five-stage payout pipeline and currency rounding
//! - `modality`: Palpites, conferencing rules, wagers and the settlement engine
//!
//! ## Example
//!
//! ```
//! use bicho_engine::{DivisionMode, Modality, Palpite, PositionRange, ResultSequence, SettlementEngine, Wager};
//! use rust_decimal::Decimal;
//!
//! let palpite = Palpite::groups(Modality::QuadrupleGroup, &[1, 6, 15, 25]).unwrap();
//! let wager = Wager::new(
//!     Modality::QuadrupleGroup,
//!     PositionRange::new(1, 5).unwrap(),
//!     Decimal::ONE,
//!     DivisionMode::Each,
//! )
//! .unwrap()
//! .with_palpite(palpite)
//! .unwrap();
//!
//! let results = ResultSequence::new([4321, 589, 7704, 1297, 5060]).unwrap();
//! let engine = SettlementEngine::default();
//! let settlement = engine
//!     .settle_with_odd(&wager, &results, Decimal::from(5000))
//!     .unwrap();
//! assert_eq!(settlement.rounded_total_prize(2), Decimal::from(1000));
//! ```

pub mod core;
pub mod permutation;
pub mod draw;
pub mod finance;
pub mod modality;

// Re-export commonly used types
pub use crate::core::{
    DomainError, DomainResult,
    Group, PositionRange, ResultSequence,
    decade_to_group, thousand_to_group, groups_in_range,
    SettlementConfig, SimpleGroupPolicy, PositionLimits, OddsTable, OddEntry,
};

pub use crate::permutation::{count_distinct_permutations, distinct_permutations};

pub use crate::draw::{
    DrawSource, SecureDrawSource, SeededDrawSource, DrawSeedState,
    generate_instant_result, generate_extended_result,
};

pub use crate::finance::{DivisionMode, PayoutChain, round_currency};

pub use crate::modality::{
    Modality, Palpite, Target, Wager,
    SettlementEngine, Settlement, GuessSettlement,
};
