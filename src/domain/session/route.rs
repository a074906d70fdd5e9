//! Route table: which views need a session, and with which role

use serde::Serialize;

use super::entity::Role;

/// Access requirement of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteAccess {
    /// Reachable without a session
    Public,
    /// Needs a session, optionally with a specific role
    Protected(Option<Role>),
}

/// A path pattern and its requirement.
///
/// Patterns are matched segment by segment; `:name` matches any single
/// segment and a trailing `*` matches any remainder, including none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pattern: String,
    access: RouteAccess,
}

impl RouteRule {
    pub fn new(pattern: impl Into<String>, access: RouteAccess) -> Self {
        Self {
            pattern: pattern.into(),
            access,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn access(&self) -> RouteAccess {
        self.access
    }

    fn matches(&self, path: &str) -> bool {
        let mut expected = segments(&self.pattern);
        let mut actual = segments(path);

        loop {
            match (expected.next(), actual.next()) {
                (Some("*"), _) => return true,
                (None, None) => return true,
                (Some(p), Some(a)) if p.starts_with(':') || p == a => continue,
                _ => return false,
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty())
}

/// Ordered list of route rules; the first matching rule wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Requirement for `path`. Paths no rule covers still need a session.
    pub fn access_for(&self, path: &str) -> RouteAccess {
        self.rules
            .iter()
            .find(|rule| rule.matches(path))
            .map(RouteRule::access)
            .unwrap_or(RouteAccess::Protected(None))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        use RouteAccess::{Protected, Public};

        Self::new(vec![
            RouteRule::new("/", Public),
            RouteRule::new("/login", Public),
            RouteRule::new("/register", Public),
            RouteRule::new("/dashboard/*", Protected(Some(Role::Admin))),
            RouteRule::new("/home", Protected(Some(Role::User))),
            RouteRule::new("/tournaments/:id", Protected(Some(Role::User))),
            RouteRule::new("/my-tickets", Protected(Some(Role::User))),
        ])
    }
}
