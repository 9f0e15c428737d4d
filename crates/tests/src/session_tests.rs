use navigation::RouteDecision;
use pretty_assertions::assert_eq;
use shared_types::{AuthUser, Session, UserRole};

use crate::common::default_router;

fn user_from_json(json: &str) -> AuthUser {
    serde_json::from_str(json).unwrap()
}

#[test]
fn session_payload_routes_by_role() {
    let user = user_from_json(
        r#"{"id":"u-1","email":"dana@example.com","display_name":"Dana","role":"Recruiter"}"#,
    );
    let session = Session::from_user(&user);
    assert_eq!(session.role, Some(UserRole::Recruiter));
    assert!(session.is_authenticated());

    assert_eq!(
        default_router().evaluate("/", &session),
        RouteDecision::Redirect("/dashboard/recruiter".to_string())
    );
}

#[test]
fn unknown_role_claim_is_treated_as_no_role() {
    let user = user_from_json(r#"{"id":"u-2","email":"sam@example.com","role":"superuser"}"#);
    let session = Session::from_user(&user);
    assert!(session.is_authenticated());
    assert_eq!(session.role, None);

    assert_eq!(
        default_router().evaluate("/", &session),
        RouteDecision::Redirect("/dashboard".to_string())
    );
}

#[test]
fn missing_role_claim_defaults_to_empty() {
    let user = user_from_json(r#"{"id":"u-3","email":"lee@example.com"}"#);
    assert_eq!(user.role, "");
    assert_eq!(user.role(), None);
}

#[test]
fn session_change_reevaluates_same_path() {
    let router = default_router();
    let path = "/rewards";

    assert_eq!(router.evaluate(path, &Session::loading()), RouteDecision::Loading);
    assert_eq!(router.evaluate(path, &Session::anonymous()), RouteDecision::Login);

    let user = user_from_json(r#"{"id":"u-4","email":"kim@example.com","role":"clinician"}"#);
    let decision = router.evaluate(path, &Session::from_user(&user));
    assert_eq!(decision.kind(), "render");
}
