//! Esports Hub
//!
//! Core of an esports tournament console backed by a remote REST service:
//! - Standings computed from a tournament's match results
//! - Session-based access decisions for protected views, with role-scoped redirects
//! - A typed client for the tournament service's teams, matches and tournaments

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use domain::{
    compute_standings, resolve_access, AccessDecision, AccessGuard, DomainError, Match, Role,
    Session, SessionRecord, StandingsError, StandingsRow, Team, UnauthorizedReason,
};
