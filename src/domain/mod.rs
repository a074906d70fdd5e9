//! Domain layer - Core entities, standings and access decisions

pub mod error;
pub mod identifier;
pub mod matches;
pub mod session;
pub mod standings;
pub mod team;
pub mod tournament;

pub use error::DomainError;
pub use identifier::IdentifierError;
pub use matches::{Match, MatchId, MatchStatus};
pub use session::{
    redirect_for, resolve_access, AccessDecision, AccessGuard, Redirect, Role, RouteAccess,
    RouteTable, Session, SessionRecord, SessionStore, UnauthorizedReason,
};
pub use standings::{
    apply_tie_breakers, compute_standings, tournament_standings, StandingsError,
    StandingsOutcome, StandingsRow, TieBreaker,
};
pub use team::{Team, TeamId};
pub use tournament::{active_tournaments, Tournament, TournamentId, TournamentStatus};
