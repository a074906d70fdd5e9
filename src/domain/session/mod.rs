//! Session domain
//!
//! Client-side authorization: validating the persisted session, deciding
//! whether it may open a view, and where to send the caller otherwise.

mod entity;
mod guard;
mod redirect;
mod route;
mod store;

pub use entity::{Role, Session, SessionRecord, SessionValidationError};
pub use guard::{resolve_access, AccessDecision, AccessGuard, UnauthorizedReason};
pub use redirect::{
    redirect_for, Redirect, ADMIN_LANDING_PATH, LOGIN_PATH, USER_LANDING_PATH,
};
pub use route::{RouteAccess, RouteRule, RouteTable};
pub use store::SessionStore;

#[cfg(test)]
pub use store::MockSessionStore;
