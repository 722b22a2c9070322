//! Access guard decisions.

use crate::access::routes::Route;
use crate::auth::identity::IdentityStore;
use crate::model::role::Role;
use crate::model::session::Session;
use crate::storage::local_storage::LocalStorage;

/// Outcome of guarding one protected page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore has not finished yet.
    Loading,
    /// Render the protected content unchanged.
    Authorized,
    /// Navigate elsewhere instead of rendering.
    Redirect(Route),
}

/// Landing page for a role.
pub fn home_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminHome,
        Role::Worker => Route::WorkerHome,
        Role::User => Route::UserHome,
    }
}

/// Decides whether protected content may render.
///
/// - Loading wins over everything else.
/// - No session redirects to login.
/// - A role mismatch redirects to the session role's home.
pub fn evaluate(
    is_loading: bool,
    session: Option<&Session>,
    required_role: Option<Role>,
) -> GuardDecision {
    if is_loading {
        return GuardDecision::Loading;
    }
    let Some(session) = session else {
        return GuardDecision::Redirect(Route::Login);
    };
    match required_role {
        Some(required) if required != session.role => {
            GuardDecision::Redirect(home_route(session.role))
        }
        _ => GuardDecision::Authorized,
    }
}

/// Guards against the identity store's current state.
pub fn check<S: LocalStorage>(
    identity: &IdentityStore<S>,
    required_role: Option<Role>,
) -> GuardDecision {
    evaluate(
        identity.is_loading(),
        identity.current_session(),
        required_role,
    )
}

#[cfg(test)]
mod tests {
    use super::{evaluate, home_route, GuardDecision};
    use crate::access::routes::Route;
    use crate::model::role::Role;
    use crate::model::session::Session;

    fn session(role: Role) -> Session {
        Session {
            id: "9".to_string(),
            email: "x@example.com".to_string(),
            name: "X".to_string(),
            role,
        }
    }

    #[test]
    fn loading_takes_precedence() {
        assert_eq!(evaluate(true, None, Some(Role::Admin)), GuardDecision::Loading);
        assert_eq!(
            evaluate(true, Some(&session(Role::User)), None),
            GuardDecision::Loading
        );
    }

    #[test]
    fn matching_role_is_authorized() {
        for role in Role::ALL {
            assert_eq!(
                evaluate(false, Some(&session(role)), Some(role)),
                GuardDecision::Authorized
            );
        }
    }

    #[test]
    fn user_requesting_worker_page_goes_home() {
        assert_eq!(
            evaluate(false, Some(&session(Role::User)), Some(Role::Worker)),
            GuardDecision::Redirect(Route::UserHome)
        );
        assert_eq!(home_route(Role::Admin), Route::AdminHome);
    }
}
