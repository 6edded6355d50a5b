use crate::claims::Claims;
use crate::role::Role;
use tracing::{debug, warn};

//--------------------------------------------------------------------------------------------------
// Well-known redirect targets
//--------------------------------------------------------------------------------------------------

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

//--------------------------------------------------------------------------------------------------
// Guard decision
//--------------------------------------------------------------------------------------------------

// Exactly one of these per navigation; no guard state survives between navigations

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Public,
    Unauthenticated,
    Forbidden,
    Allowed,
}

//--------------------------------------------------------------------------------------------------
// Navigation seam
//--------------------------------------------------------------------------------------------------

// The guard decides, an adapter navigates - keeps the decision logic testable on its own

pub trait Navigator {
    fn go(&mut self, path: &str);
}

//--------------------------------------------------------------------------------------------------
// Role policy table
//--------------------------------------------------------------------------------------------------

struct PolicyEntry {
    prefix: String,
    roles: Vec<Role>,
}

pub struct RouteGuard {
    public_prefixes: Vec<String>,
    entries: Vec<PolicyEntry>,
}

// Prefixes match on whole path segments, so "/admin" covers "/admin/reports" but not "/administer"
fn prefix_matches(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
        None => false,
    }
}

impl RouteGuard {
    pub fn new(public_prefixes: &[&str], entries: &[(&str, &[Role])]) -> Self {
        RouteGuard {
            public_prefixes: public_prefixes.iter().map(|p| p.to_string()).collect(),
            entries: entries
                .iter()
                .map(|(prefix, roles)| PolicyEntry {
                    prefix: prefix.to_string(),
                    roles: roles.to_vec(),
                })
                .collect(),
        }
    }

    // The table the application ships with. Admin and HR run the back office; employees get
    // their own area, except face enrollment which every role must be able to reach.
    pub fn standard() -> Self {
        RouteGuard::new(
            &[LOGIN_PATH, UNAUTHORIZED_PATH, "/assets"],
            &[
                ("/admin", &[Role::Hr, Role::Admin]),
                ("/employee", &[Role::Employee]),
                ("/employee/enroll-face", &[Role::Employee, Role::Hr, Role::Admin]),
            ],
        )
    }

    pub fn evaluate(&self, path: &str, user: Option<&Claims>) -> GuardDecision {
        if self.public_prefixes.iter().any(|prefix| prefix_matches(prefix, path)) {
            return GuardDecision::Public;
        }

        let Some(user) = user else {
            debug!("No session for protected path {}", path);
            return GuardDecision::Unauthenticated;
        };

        // Longest matching prefix wins; a path no entry covers stays closed to everyone
        let entry = self
            .entries
            .iter()
            .filter(|entry| prefix_matches(&entry.prefix, path))
            .max_by_key(|entry| entry.prefix.len());

        match entry {
            Some(entry) if user.role().in_role_set(&entry.roles) => {
                debug!("Role {} allowed on {}", user.role(), path);
                GuardDecision::Allowed
            }
            Some(_) => {
                warn!("Role {} not permitted on {}", user.role(), path);
                GuardDecision::Forbidden
            }
            None => {
                warn!("No policy entry covers {} - refusing", path);
                GuardDecision::Forbidden
            }
        }
    }

    // Evaluate and act: allowed navigations proceed, the rest redirect
    pub fn enforce<N: Navigator>(
        &self,
        path: &str,
        user: Option<&Claims>,
        navigator: &mut N,
    ) -> GuardDecision {
        let decision = self.evaluate(path, user);

        match decision {
            GuardDecision::Public | GuardDecision::Allowed => navigator.go(path),
            GuardDecision::Unauthenticated => navigator.go(LOGIN_PATH),
            GuardDecision::Forbidden => navigator.go(UNAUTHORIZED_PATH),
        }

        decision
    }
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
