use navigation::{RouteDecision, GENERIC_DASHBOARD};
use pretty_assertions::assert_eq;
use shared_types::UserRole;

use crate::common::{default_router, follow, rendered_page, signed_in, signed_in_without_role};

#[test]
fn clinician_at_root_goes_to_clinician_dashboard_once() {
    let router = default_router();
    let session = signed_in(UserRole::Clinician);

    assert_eq!(
        router.evaluate("/", &session),
        RouteDecision::Redirect("/dashboard/clinician".to_string())
    );
    let settled = router.evaluate("/dashboard/clinician", &session);
    assert_eq!(settled.kind(), "render");
    assert_eq!(settled.redirect_target(), None);
}

#[test]
fn every_role_reaches_its_dashboard_from_each_entry_point() {
    let router = default_router();
    for role in UserRole::ALL {
        for entry in ["/", "/dashboard", "/dashboard/"] {
            let (visited, decision) = follow(&router, entry, &signed_in(role));
            assert_eq!(visited.last(), Some(&role.dashboard_path()), "{role} from {entry}");
            assert_eq!(decision.kind(), "render");
        }
    }
}

#[test]
fn recruiter_on_clinician_dashboard_bounces_through_generic_entry() {
    let router = default_router();
    let (visited, decision) = follow(&router, "/dashboard/clinician", &signed_in(UserRole::Recruiter));
    assert_eq!(
        visited,
        vec![
            "/dashboard/clinician".to_string(),
            GENERIC_DASHBOARD.to_string(),
            "/dashboard/recruiter".to_string(),
        ]
    );
    assert_eq!(rendered_page(decision), "recruiter-dashboard");
}

#[test]
fn role_restricted_pages_redirect_other_roles() {
    let router = default_router();
    let denied = [
        (UserRole::Leadership, "/rewards"),
        (UserRole::Recruiter, "/rewards"),
        (UserRole::Clinician, "/analytics"),
        (UserRole::Leadership, "/referrals/new"),
    ];
    for (role, path) in denied {
        assert_eq!(
            router.evaluate(path, &signed_in(role)),
            RouteDecision::Redirect(GENERIC_DASHBOARD.to_string()),
            "{role} at {path}"
        );
    }
}

#[test]
fn account_without_role_never_loops() {
    let router = default_router();
    let session = signed_in_without_role();
    for start in ["/", "/dashboard/clinician", "/rewards", "/analytics"] {
        let (visited, decision) = follow(&router, start, &session);
        assert_eq!(visited.last().map(String::as_str), Some(GENERIC_DASHBOARD), "{start}");
        assert_eq!(rendered_page(decision), "dashboard-home");
    }
}

#[test]
fn redirects_never_point_at_public_pages() {
    let router = default_router();
    for role in UserRole::ALL {
        let (visited, _) = follow(&router, "/", &signed_in(role));
        assert!(visited.iter().all(|p| !router.is_public(p)));
    }
}
