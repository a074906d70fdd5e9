//! Match domain module

mod entity;

pub use entity::{Match, MatchId, MatchStatus};
