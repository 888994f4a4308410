//! Core types: groups, position ranges, result sequences, errors, configuration.
//!
//! Everything here is plain data with validated constructors. Nothing holds
//! mutable state, so values can be shared across settlement threads.

pub mod error;
pub mod group;
pub mod position;
pub mod result;
pub mod config;

pub use error::{DomainError, DomainResult};
pub use group::{decade_to_group, groups_in_range, thousand_to_group, Group, GROUP_COUNT};
pub use position::PositionRange;
pub use result::{ResultSequence, MAX_THOUSAND};
pub use config::{OddEntry, OddsTable, PositionLimits, SettlementConfig, SimpleGroupPolicy};
