//! # Route guards as pure decisions
//!
//! A [`Guard`] looks at a [`Session`] snapshot and the requested location and
//! returns a [`Decision`]. Rendering adapters (router layouts) only translate
//! the decision into "render", "render nothing" or a navigation.
//!
//! | Guard | Loading | Signed out | Signed in |
//! |-------|---------|------------|-----------|
//! | [`Guard::Authenticated`] | `Pending` | `ToLogin { from }` | `Render`, or `ToDashboard` when the required permission is missing |
//! | [`Guard::Public`] | `Pending` | `Render` | `ToReturn(from)`, falling back to the dashboard |
//! | [`Guard::Default`] | `Pending` | `ToLogin` | `ToDashboard` |

use crate::permissions::Permission;
use crate::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Pages only reachable while signed out; never valid return targets.
const PUBLIC_PATHS: [&str; 2] = [LOGIN_PATH, REGISTER_PATH];

/// The page a user tried to reach before being sent to a public page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReturnTo {
    target_path: String,
}

impl ReturnTo {
    /// Accepts absolute in-app paths only. Protocol-relative URLs (`//host`),
    /// external URLs and the public pages themselves are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if !raw.starts_with('/') || raw.starts_with("//") {
            return None;
        }
        let path = raw.split(['?', '#']).next().unwrap_or(raw);
        let path = path.trim_end_matches('/');
        if path.is_empty() || PUBLIC_PATHS.contains(&path) {
            return None;
        }
        Some(Self {
            target_path: raw.to_string(),
        })
    }

    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    /// The path to navigate to after signing in.
    pub fn resolve(candidate: Option<&ReturnTo>) -> &str {
        candidate.map_or(DASHBOARD_PATH, ReturnTo::target_path)
    }
}

/// What a guarded route should do right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The identity check is still running; render nothing and do not navigate.
    Pending,
    Render,
    ToLogin { from: Option<ReturnTo> },
    ToDashboard,
    ToReturn(ReturnTo),
}

impl Decision {
    /// The in-app path this decision navigates to, if any. The login target
    /// does not include the `from` argument.
    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            Decision::Pending | Decision::Render => None,
            Decision::ToLogin { .. } => Some(LOGIN_PATH),
            Decision::ToDashboard => Some(DASHBOARD_PATH),
            Decision::ToReturn(target) => Some(target.target_path()),
        }
    }
}

/// Gate in front of a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Signed-in users only, optionally requiring a permission.
    Authenticated(Option<Permission>),
    /// Signed-out users only; signed-in users are sent back where they came from.
    Public(Option<ReturnTo>),
    /// `/` and unknown paths.
    Default,
}

impl Guard {
    pub fn decide(&self, session: &Session, location: &str) -> Decision {
        if session.is_loading() {
            return Decision::Pending;
        }
        match self {
            Guard::Authenticated(required) => {
                if !session.is_authenticated() {
                    Decision::ToLogin {
                        from: ReturnTo::parse(location),
                    }
                } else if required.is_some_and(|p| !session.check_permission(p)) {
                    Decision::ToDashboard
                } else {
                    Decision::Render
                }
            }
            Guard::Public(return_to) => {
                if !session.is_authenticated() {
                    Decision::Render
                } else {
                    match return_to {
                        Some(target) => Decision::ToReturn(target.clone()),
                        None => Decision::ToDashboard,
                    }
                }
            }
            Guard::Default => {
                if session.is_authenticated() {
                    Decision::ToDashboard
                } else {
                    Decision::ToLogin { from: None }
                }
            }
        }
    }
}
