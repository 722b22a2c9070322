//! Path table and navigation.
//!
//! Known paths: `/login` (public), `/user` (any session), `/admin`
//! (admin), `/worker` (worker). `/` and every unknown path fall back to
//! `/user`.

use crate::access::guard::{check, GuardDecision};
use crate::auth::identity::IdentityStore;
use crate::model::role::Role;
use crate::storage::local_storage::LocalStorage;

pub const PATH_LOGIN: &str = "/login";
pub const PATH_USER: &str = "/user";
pub const PATH_ADMIN: &str = "/admin";
pub const PATH_WORKER: &str = "/worker";

/// Routable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    UserHome,
    AdminHome,
    WorkerHome,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => PATH_LOGIN,
            Self::UserHome => PATH_USER,
            Self::AdminHome => PATH_ADMIN,
            Self::WorkerHome => PATH_WORKER,
        }
    }

    pub fn access(self) -> RouteAccess {
        match self {
            Self::Login => RouteAccess::Public,
            Self::UserHome => RouteAccess::SignedIn,
            Self::AdminHome => RouteAccess::RequiresRole(Role::Admin),
            Self::WorkerHome => RouteAccess::RequiresRole(Role::Worker),
        }
    }
}

/// Who may render a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    SignedIn,
    RequiresRole(Role),
}

/// Result of looking up a path in the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Page(Route),
    Redirect(Route),
}

/// Resolves a path. Query strings, fragments and one trailing slash are
/// ignored.
pub fn resolve_path(path: &str) -> RouteTarget {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };
    match path {
        PATH_LOGIN => RouteTarget::Page(Route::Login),
        PATH_USER => RouteTarget::Page(Route::UserHome),
        PATH_ADMIN => RouteTarget::Page(Route::AdminHome),
        PATH_WORKER => RouteTarget::Page(Route::WorkerHome),
        _ => RouteTarget::Redirect(Route::UserHome),
    }
}

/// What the shell should do for a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Show the loading indicator; do not retry automatically.
    Loading,
    /// Render `Route`.
    Render(Route),
}

/// Resolves `path` and applies the guard, following redirects.
///
/// Redirect chains are short and acyclic: fallback -> `/user` -> `/login`,
/// or role page -> role home, which always authorizes.
pub fn navigate<S: LocalStorage>(identity: &IdentityStore<S>, path: &str) -> Navigation {
    let mut route = match resolve_path(path) {
        RouteTarget::Page(route) | RouteTarget::Redirect(route) => route,
    };
    for _ in 0..3 {
        let required_role = match route.access() {
            RouteAccess::Public => return Navigation::Render(route),
            RouteAccess::SignedIn => None,
            RouteAccess::RequiresRole(role) => Some(role),
        };
        match check(identity, required_role) {
            GuardDecision::Loading => return Navigation::Loading,
            GuardDecision::Authorized => return Navigation::Render(route),
            GuardDecision::Redirect(next) => route = next,
        }
    }
    Navigation::Render(route)
}

/// Header navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
}

/// Header links for a role: the dashboard plus the role's own panel.
pub fn nav_links(role: Role) -> Vec<NavLink> {
    let dashboard = NavLink {
        route: Route::UserHome,
        label: "Dashboard",
    };
    match role {
        Role::Admin => vec![
            dashboard,
            NavLink {
                route: Route::AdminHome,
                label: "Admin Panel",
            },
        ],
        Role::Worker => vec![
            dashboard,
            NavLink {
                route: Route::WorkerHome,
                label: "Worker Panel",
            },
        ],
        Role::User => vec![dashboard],
    }
}

#[cfg(test)]
mod tests {
    use super::{nav_links, resolve_path, Route, RouteTarget};
    use crate::model::role::Role;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(resolve_path("/login"), RouteTarget::Page(Route::Login));
        assert_eq!(resolve_path("/admin/"), RouteTarget::Page(Route::AdminHome));
        assert_eq!(
            resolve_path("/worker?tab=1"),
            RouteTarget::Page(Route::WorkerHome)
        );
    }

    #[test]
    fn root_and_unknown_paths_fall_back_to_user_home() {
        assert_eq!(resolve_path("/"), RouteTarget::Redirect(Route::UserHome));
        assert_eq!(resolve_path(""), RouteTarget::Redirect(Route::UserHome));
        assert_eq!(
            resolve_path("/admin/users"),
            RouteTarget::Redirect(Route::UserHome)
        );
    }

    #[test]
    fn nav_links_follow_role() {
        let labels = |role| {
            nav_links(role)
                .into_iter()
                .map(|link| link.label)
                .collect::<Vec<_>>()
        };
        assert_eq!(labels(Role::Admin), vec!["Dashboard", "Admin Panel"]);
        assert_eq!(labels(Role::Worker), vec!["Dashboard", "Worker Panel"]);
        assert_eq!(labels(Role::User), vec!["Dashboard"]);
    }
}
