use roledesk_core::{
    check_access, evaluate_access, nav_links, navigate, resolve_path, GuardDecision,
    IdentityStore, MemoryLocalStorage, Navigation, Role, Route, RouteTarget, Session,
};

fn signed_in(email: &str, secret: &str) -> IdentityStore<MemoryLocalStorage> {
    let mut identity = IdentityStore::open(MemoryLocalStorage::new());
    assert!(identity.login(email, secret).unwrap());
    identity
}

fn session(role: Role) -> Session {
    Session {
        id: "1".to_string(),
        email: "someone@example.com".to_string(),
        name: "Someone".to_string(),
        role,
    }
}

#[test]
fn guard_matrix_over_all_roles() {
    for required in Role::ALL {
        assert_eq!(
            evaluate_access(false, None, Some(required)),
            GuardDecision::Redirect(Route::Login)
        );
        for actual in Role::ALL {
            let expected = if actual == required {
                GuardDecision::Authorized
            } else {
                GuardDecision::Redirect(roledesk_core::home_route(actual))
            };
            assert_eq!(
                evaluate_access(false, Some(&session(actual)), Some(required)),
                expected
            );
        }
    }
}

#[test]
fn no_required_role_only_needs_a_session() {
    for role in Role::ALL {
        assert_eq!(
            evaluate_access(false, Some(&session(role)), None),
            GuardDecision::Authorized
        );
    }
    assert_eq!(
        evaluate_access(false, None, None),
        GuardDecision::Redirect(Route::Login)
    );
}

#[test]
fn unrestored_identity_reports_loading() {
    let identity = IdentityStore::new(MemoryLocalStorage::new());
    assert_eq!(check_access(&identity, Some(Role::Admin)), GuardDecision::Loading);
    assert_eq!(navigate(&identity, "/admin"), Navigation::Loading);
}

#[test]
fn resolve_known_and_fallback_paths() {
    assert_eq!(resolve_path("/login"), RouteTarget::Page(Route::Login));
    assert_eq!(resolve_path("/admin/"), RouteTarget::Page(Route::AdminHome));
    assert_eq!(resolve_path("/worker?tab=1"), RouteTarget::Page(Route::WorkerHome));
    assert_eq!(resolve_path("/"), RouteTarget::Redirect(Route::UserHome));
    assert_eq!(resolve_path("/nowhere"), RouteTarget::Redirect(Route::UserHome));
}

#[test]
fn navigation_for_each_role() {
    let admin = signed_in("admin@example.com", "admin123");
    assert_eq!(navigate(&admin, "/admin"), Navigation::Render(Route::AdminHome));
    assert_eq!(navigate(&admin, "/worker"), Navigation::Render(Route::AdminHome));
    assert_eq!(navigate(&admin, "/"), Navigation::Render(Route::UserHome));

    let worker = signed_in("worker@example.com", "worker123");
    assert_eq!(navigate(&worker, "/admin"), Navigation::Render(Route::WorkerHome));

    let user = signed_in("user@example.com", "user123");
    assert_eq!(navigate(&user, "/worker"), Navigation::Render(Route::UserHome));
    assert_eq!(navigate(&user, "/login"), Navigation::Render(Route::Login));
}

#[test]
fn signed_out_navigation_lands_on_login() {
    let identity = IdentityStore::open(MemoryLocalStorage::new());
    for path in ["/", "/user", "/admin", "/worker", "/unknown"] {
        assert_eq!(navigate(&identity, path), Navigation::Render(Route::Login));
    }
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
