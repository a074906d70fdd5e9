//! Tournament domain module

mod entity;

pub use entity::{
    active_tournaments, Tournament, TournamentId, TournamentStatus, HOME_TOURNAMENT_LIMIT,
};
