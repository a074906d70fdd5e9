//! Standings domain module
//!
//! Derives per-team win/loss/points tables from a tournament's match results.
//! Pure computation: no I/O and no mutation of the inputs.

mod engine;
mod error;
mod row;
mod tiebreak;

pub use engine::{compute_standings, tournament_standings, StandingsOutcome};
pub use error::{IntegrityViolation, StandingsError};
pub use row::{StandingsRow, POINTS_PER_WIN};
pub use tiebreak::{apply_tie_breakers, TieBreaker};
