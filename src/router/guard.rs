//! Navigation guard: the per-navigation access decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated for every navigation, including the guard's own redirects, so a
//! redirect target is checked by the same policy. Login, dashboard and 404
//! terminate any chain within one hop.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{self, Resolution, RouteDef, RouteId};
use crate::state::notice::NoticeLevel;
use crate::state::session::Session;

pub const LOGIN_REQUIRED: &str = "请先登录";
pub const PERMISSION_DENIED: &str = "权限不足，无法访问该页面";

/// Upper bound on redirect hops; the route table needs at most two.
const MAX_HOPS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardNotice {
    pub level: NoticeLevel,
    pub message: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect { to: RouteId, notice: Option<GuardNotice> },
}

/// Decide whether `route` may be entered with `session`.
pub fn decide(route: &RouteDef, session: &Session) -> Decision {
    let policy = route.policy();

    if !policy.requires_auth {
        if route.is_auth_entry() && session.is_logged_in() {
            return Decision::Redirect { to: RouteId::Dashboard, notice: None };
        }
        return Decision::Allow;
    }

    if !session.is_logged_in() {
        return Decision::Redirect {
            to: RouteId::Login,
            notice: Some(GuardNotice { level: NoticeLevel::Warning, message: LOGIN_REQUIRED }),
        };
    }

    match session.role() {
        Some(role) if policy.permits(role) => Decision::Allow,
        _ => Decision::Redirect {
            to: RouteId::Dashboard,
            notice: Some(GuardNotice { level: NoticeLevel::Error, message: PERMISSION_DENIED }),
        },
    }
}

/// Notice to show for `decision`.
///
/// Only the navigation that entered a page shows one; redirects caused by a
/// later session change (logout, a failed refresh) are silent.
pub fn notice_for(decision: Decision, first_run: bool) -> Option<GuardNotice> {
    match decision {
        Decision::Redirect { notice, .. } if first_run => notice,
        _ => None,
    }
}

/// Window title for `route`: `"<title> - <system>"`, or the system name alone.
pub fn page_title(route: Option<&RouteDef>, system_name: &str) -> String {
    match route.and_then(|r| r.title) {
        Some(title) => format!("{title} - {system_name}"),
        None => system_name.to_owned(),
    }
}

/// One evaluated hop of a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub route: RouteId,
    /// Title applied before the decision for this hop.
    pub title: String,
    pub decision: Decision,
}

/// Full outcome of navigating to a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub steps: Vec<Step>,
}

impl Navigation {
    /// The route the user ends up on.
    pub fn destination(&self) -> RouteId {
        self.steps.last().map_or(RouteId::NotFound, |s| s.route)
    }

    /// Title left on the window after the last hop.
    pub fn title(&self) -> &str {
        self.steps.last().map_or("", |s| s.title.as_str())
    }

    /// Notices emitted along the way, in order.
    pub fn notices(&self) -> Vec<GuardNotice> {
        self.steps
            .iter()
            .filter_map(|s| match s.decision {
                Decision::Redirect { notice, .. } => notice,
                Decision::Allow => None,
            })
            .collect()
    }
}

/// Resolve `path` and follow guard redirects until a route is allowed.
pub fn navigate(path: &str, session: &Session, system_name: &str) -> Navigation {
    let mut target = match routes::resolve(path) {
        Resolution::Route(id) | Resolution::Redirect(id) => id,
    };
    let mut steps = Vec::new();

    for _ in 0..MAX_HOPS {
        let route = routes::route(target);
        let title = page_title(Some(route), system_name);
        let decision = decide(route, session);
        steps.push(Step { route: target, title, decision });
        match decision {
            Decision::Allow => return Navigation { steps },
            Decision::Redirect { to, .. } => target = to,
        }
    }

    log::error!("navigation to {path} did not settle after {MAX_HOPS} hops");
    let route = routes::route(RouteId::NotFound);
    steps.push(Step {
        route: RouteId::NotFound,
        title: page_title(Some(route), system_name),
        decision: Decision::Allow,
    });
    Navigation { steps }
}
