use navigation::RouteDecision;
use pretty_assertions::assert_eq;
use shared_types::{Session, UserRole};

use crate::common::{default_router, rendered_page, signed_in, signed_in_without_role};

#[test]
fn loading_session_yields_loading_for_every_path() {
    let router = default_router();
    for path in [
        "/",
        "/dashboard",
        "/dashboard/leadership",
        "/referrals/42",
        "/complete-profile/abc",
        "/no/such/page",
    ] {
        assert_eq!(router.evaluate(path, &Session::loading()), RouteDecision::Loading, "{path}");
    }
}

#[test]
fn anonymous_visitor_gets_login_on_protected_and_unknown_paths() {
    let router = default_router();
    for path in ["/", "/dashboard", "/rewards", "/referrals/7", "/no/such/page"] {
        assert_eq!(router.evaluate(path, &Session::anonymous()), RouteDecision::Login, "{path}");
    }
}

#[test]
fn invite_link_renders_for_anonymous_visitor_without_layout() {
    let router = default_router();
    match router.evaluate("/complete-profile/inv-123", &Session::anonymous()) {
        RouteDecision::Render { page, params, layout } => {
            assert_eq!(page, "complete-profile");
            assert_eq!(params.get("token").map(String::as_str), Some("inv-123"));
            assert!(!layout);
        }
        other => panic!("unexpected decision {other:?}"),
    }
}

#[test]
fn role_pages_render_for_their_role() {
    let router = default_router();
    let cases = [
        (UserRole::Clinician, "/dashboard/clinician", "clinician-dashboard"),
        (UserRole::Clinician, "/rewards", "rewards"),
        (UserRole::Clinician, "/referrals/new", "submit-referral"),
        (UserRole::Recruiter, "/dashboard/recruiter", "recruiter-dashboard"),
        (UserRole::Recruiter, "/analytics", "analytics"),
        (UserRole::Leadership, "/dashboard/leadership", "leadership-dashboard"),
        (UserRole::Leadership, "/analytics", "analytics"),
    ];
    for (role, path, page) in cases {
        assert_eq!(rendered_page(router.evaluate(path, &signed_in(role))), page, "{role} at {path}");
    }
}

#[test]
fn shared_pages_render_for_every_role() {
    let router = default_router();
    for role in UserRole::ALL {
        let session = signed_in(role);
        assert_eq!(rendered_page(router.evaluate("/referrals", &session)), "referral-list");
        assert_eq!(rendered_page(router.evaluate("/jobs", &session)), "jobs");
        assert_eq!(rendered_page(router.evaluate("/referrals/r-9", &session)), "referral-detail");
    }
}

#[test]
fn static_segment_beats_parameter_for_referral_form() {
    let router = default_router();
    let decision = router.evaluate("/referrals/new", &signed_in(UserRole::Recruiter));
    assert_eq!(rendered_page(decision), "submit-referral");
}

#[test]
fn referral_detail_captures_id() {
    let router = default_router();
    match router.evaluate("/referrals/r-77?tab=notes", &signed_in(UserRole::Clinician)) {
        RouteDecision::Render { params, layout, .. } => {
            assert_eq!(params.get("id").map(String::as_str), Some("r-77"));
            assert!(layout);
        }
        other => panic!("unexpected decision {other:?}"),
    }
}

#[test]
fn signed_in_unknown_path_is_not_found() {
    let router = default_router();
    assert_eq!(
        router.evaluate("/settings/billing", &signed_in(UserRole::Leadership)),
        RouteDecision::NotFound {
            path: "/settings/billing".to_string()
        }
    );
}

#[test]
fn account_without_role_lands_on_generic_dashboard() {
    let router = default_router();
    let session = signed_in_without_role();
    assert_eq!(rendered_page(router.evaluate("/dashboard", &session)), "dashboard-home");
    assert_eq!(rendered_page(router.evaluate("/jobs", &session)), "jobs");
}

#[test]
fn signed_in_user_on_invite_link_still_sees_public_page() {
    let router = default_router();
    match router.evaluate("/complete-profile/x", &signed_in(UserRole::Clinician)) {
        RouteDecision::Render { page, layout, .. } => {
            assert_eq!(page, "complete-profile");
            assert!(!layout);
        }
        other => panic!("unexpected decision {other:?}"),
    }
}
