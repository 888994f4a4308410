//! Modalities, palpites and settlement.
//!
//! - `kind`: the `Modality` tag
//! - `palpite`: validated bet targets
//! - `conference`: scoring rules, one per modality family
//! - `wager`: palpites grouped under one stake and range
//! - `engine`: conferencing plus the payout pipeline

pub mod kind;
pub mod palpite;
pub mod conference;
pub mod wager;
pub mod engine;

pub use kind::Modality;
pub use palpite::{GroupSet, Palpite, Target};
pub use conference::{group_set_hits, inverted_hits, number_hits, passe_hits, simple_group_hits};
pub use wager::Wager;
pub use engine::{GuessSettlement, Settlement, SettlementEngine};
