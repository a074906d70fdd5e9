//! Access command - resolves the persisted session against a route's requirement

use std::process::ExitCode;

use clap::Args;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{
    redirect_for, AccessDecision, AccessGuard, Redirect, Role, RouteAccess, RouteTable,
    SessionStore, UnauthorizedReason,
};

/// Arguments for the access command
#[derive(Args, Clone)]
pub struct AccessArgs {
    /// Route path to check, e.g. `/dashboard/teams`
    pub path: String,

    /// Require this role instead of the route table's requirement
    #[arg(long)]
    pub role: Option<Role>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Exit status for a refused caller
const EXIT_UNAUTHORIZED: u8 = 2;

/// Run the access command
pub async fn run(args: AccessArgs) -> anyhow::Result<ExitCode> {
    let config = super::bootstrap();
    let store = super::session_store(&config);

    let access = match args.role {
        Some(role) => RouteAccess::Protected(Some(role)),
        None => RouteTable::default().access_for(&args.path),
    };

    let report = check(&args.path, access, &store).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }

    Ok(if report.allowed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_UNAUTHORIZED)
    })
}

#[derive(Debug, Serialize)]
struct AccessReport {
    path: String,
    access: RouteAccess,
    #[serde(skip_serializing_if = "Option::is_none")]
    decision: Option<AccessDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect: Option<String>,
    allowed: bool,
}

async fn check(path: &str, access: RouteAccess, store: &dyn SessionStore) -> AccessReport {
    let RouteAccess::Protected(required_role) = access else {
        debug!(path, "Public route");
        return AccessReport {
            path: path.to_string(),
            access,
            decision: None,
            redirect: None,
            allowed: true,
        };
    };

    let mut guard = AccessGuard::new(required_role);
    debug!(path, decision = ?guard.decision(), "Checking access");

    let decision = guard.resolve_from(store).await.clone();
    let redirect = redirect_for(&decision);
    info!(path, allowed = decision.is_authorized(), redirect = ?redirect.map(|r| r.path()), "Access resolved");

    AccessReport {
        path: path.to_string(),
        access,
        allowed: decision.is_authorized(),
        redirect: redirect.as_ref().map(Redirect::to_string),
        decision: Some(decision),
    }
}

impl AccessReport {
    fn render(&self) -> String {
        let requirement = match self.access {
            RouteAccess::Public => "public".to_string(),
            RouteAccess::Protected(None) => "any session".to_string(),
            RouteAccess::Protected(Some(role)) => format!("role {}", role),
        };

        let outcome = match &self.decision {
            None => "allowed".to_string(),
            Some(AccessDecision::Loading) => "loading".to_string(),
            Some(AccessDecision::Authorized(session)) => {
                format!("authorized as {} ({})", session.user_id(), session.role())
            }
            Some(AccessDecision::Unauthorized(UnauthorizedReason::NoSession)) => {
                "unauthorized: no valid session".to_string()
            }
            Some(AccessDecision::Unauthorized(UnauthorizedReason::RoleMismatch {
                actual,
                required,
            })) => format!("unauthorized: role {} cannot open a {} view", actual, required),
        };

        let mut out = format!("{}\n  requires: {}\n  decision: {}\n", self.path, requirement, outcome);
        if let Some(redirect) = &self.redirect {
            out.push_str(&format!("  redirect: {}\n", redirect));
        }
        out
    }
}
