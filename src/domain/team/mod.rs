//! Team domain module
//!
//! Teams are the participants whose match results feed the standings table.

mod entity;
mod validation;

pub use entity::{Team, TeamId};
pub use validation::{validate_team_id, validate_team_name, TeamValidationError};
