use navigation::{RouteDecision, SessionRouter};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, PortalConfig, Session, UserRole};

use crate::common::{rendered_page, router_from, signed_in, Key};

const CUSTOM: &str = r#"
api_base_url = "https://api.example.org/v2/"

[features]
breadcrumbs = false

[routing]
entry_points = ["/home"]
public_paths = []

[[routes]]
pattern = "/dashboard"
page = "dashboard-home"

[[routes]]
pattern = "/dashboard/clinician"
page = "clinician-dashboard"
roles = ["clinician"]

[[routes]]
pattern = "/dashboard/recruiter"
page = "recruiter-dashboard"
roles = ["Recruiter"]

[[routes]]
pattern = "/dashboard/leadership"
page = "leadership-dashboard"
roles = ["leadership"]

[[routes]]
pattern = "/reports/*rest"
page = "reports"
roles = ["leadership"]

[[routes]]
pattern = "/complete-profile/:token"
page = "complete-profile"
"#;

fn build(contents: &str) -> Result<SessionRouter<Key>, shared_types::AppError> {
    let config = PortalConfig::from_toml_str(contents)?;
    SessionRouter::from_config(&config, |key| Some(key.to_string()))
}

#[test]
fn custom_config_drives_the_router() {
    let config = PortalConfig::from_toml_str(CUSTOM).unwrap();
    assert!(!config.features.breadcrumbs);
    assert!(config.features.history_controls);
    assert_eq!(config.api_url("/referrals"), "https://api.example.org/v2/referrals");

    let router = router_from(&config);
    assert!(router.is_entry_point("/home"));
    assert!(!router.is_entry_point("/"));

    let leadership = signed_in(UserRole::Leadership);
    assert_eq!(
        router.evaluate("/home", &leadership),
        RouteDecision::Redirect("/dashboard/leadership".to_string())
    );
    match router.evaluate("/reports/2026/q3", &leadership) {
        RouteDecision::Render { page, params, .. } => {
            assert_eq!(page, "reports");
            assert_eq!(params.get("rest").map(String::as_str), Some("2026/q3"));
        }
        other => panic!("unexpected decision {other:?}"),
    }
    assert_eq!(
        router.evaluate("/reports/2026", &signed_in(UserRole::Clinician)),
        RouteDecision::Redirect("/dashboard".to_string())
    );
}

#[test]
fn role_names_in_config_are_case_insensitive() {
    let router = build(CUSTOM).unwrap();
    let decision = router.evaluate("/dashboard/recruiter", &signed_in(UserRole::Recruiter));
    assert_eq!(rendered_page(decision), "recruiter-dashboard");
}

#[test]
fn empty_public_list_puts_invite_links_behind_login() {
    let router = build(CUSTOM).unwrap();
    assert_eq!(
        router.evaluate("/complete-profile/abc", &Session::anonymous()),
        RouteDecision::Login
    );
}

#[test]
fn broken_toml_falls_back_to_defaults() {
    let (config, err) = PortalConfig::from_toml_str_or_default("routes = [[[");
    assert_eq!(config, PortalConfig::default());
    let err = err.expect("parse error should be reported");
    assert_eq!(err.kind, AppErrorKind::ConfigError);
}

#[test]
fn blank_api_base_url_is_rejected() {
    let err = PortalConfig::from_toml_str("api_base_url = \"  \"").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ConfigError);
}

#[test]
fn unknown_role_in_route_is_a_config_error() {
    let reports = "page = \"reports\"\nroles = [\"leadership\"]";
    assert!(CUSTOM.contains(reports));
    let contents = CUSTOM.replace(reports, "page = \"reports\"\nroles = [\"admin\"]");
    let err = build(&contents).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ConfigError);
    assert!(err.message.contains("admin"), "{}", err.message);
}

#[test]
fn missing_role_dashboard_fails_validation() {
    let contents = r#"
[[routes]]
pattern = "/dashboard/clinician"
page = "clinician-dashboard"
roles = ["clinician"]

[[routes]]
pattern = "/dashboard/recruiter"
page = "recruiter-dashboard"
roles = ["recruiter"]
"#;
    let err = build(contents).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ConfigError);
    assert!(err.message.contains("/dashboard/leadership"), "{}", err.message);
}

#[test]
fn unresolvable_page_key_is_a_config_error() {
    let config = PortalConfig::default();
    let err = SessionRouter::from_config(&config, |key| (key != "rewards").then(|| key.to_string()))
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ConfigError);
    assert!(err.message.contains("rewards"));
}

#[test]
fn default_config_survives_a_trip_through_toml() {
    let written = toml::to_string(&PortalConfig::default()).unwrap();
    let parsed = PortalConfig::from_toml_str(&written).unwrap();
    assert_eq!(parsed, PortalConfig::default());
}

#[test]
fn empty_document_is_the_default_config() {
    assert_eq!(PortalConfig::from_toml_str("").unwrap(), PortalConfig::default());
}
