use navigation::{RouteDecision, SessionRouter};
use shared_types::{PortalConfig, Session, UserId, UserRole};

/// Page keys stand in for page components; the router is generic over them.
pub type Key = String;

/// Router built from the default `PortalConfig`, resolving every page key
/// to itself.
pub fn default_router() -> SessionRouter<Key> {
    router_from(&PortalConfig::default())
}

pub fn router_from(config: &PortalConfig) -> SessionRouter<Key> {
    SessionRouter::from_config(config, |key| Some(key.to_string()))
        .expect("default config must build a valid router")
}

pub fn signed_in(role: UserRole) -> Session {
    Session::authenticated(UserId::new(format!("user-{}", role.as_str())), Some(role))
}

pub fn signed_in_without_role() -> Session {
    Session::authenticated(UserId::new("user-norole"), None)
}

/// Page key of a layout render, panicking on any other decision.
pub fn rendered_page(decision: RouteDecision<Key>) -> Key {
    match decision {
        RouteDecision::Render { page, .. } => page,
        other => panic!("expected a render, got {other:?}"),
    }
}

/// Follow redirects the way the host does until something other than a
/// redirect comes back. Returns every path visited, the first included.
pub fn follow(router: &SessionRouter<Key>, start: &str, session: &Session) -> (Vec<String>, RouteDecision<Key>) {
    let mut visited = vec![start.to_string()];
    let mut decision = router.evaluate(start, session);
    while let RouteDecision::Redirect(target) = &decision {
        assert!(visited.len() < 8, "redirect loop: {visited:?}");
        visited.push(target.clone());
        decision = router.evaluate(target, session);
    }
    (visited, decision)
}
