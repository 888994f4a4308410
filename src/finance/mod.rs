//! Financial calculation: the payout pipeline and money rounding.

pub mod pipeline;
pub mod money;

pub use pipeline::{
    prize_per_guess, prize_per_unit, total_stake, units, units_over, value_per_guess, value_per_unit, DivisionMode,
    PayoutChain,
};
pub use money::round_currency;
