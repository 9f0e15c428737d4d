use serde::{Deserialize, Serialize};

use crate::{AppError, FeatureFlags};

/// One row of the route table as written in `portal.toml`.
///
/// `page` is a key the host application resolves to a page component;
/// `roles` lists the roles allowed in, and an empty list admits any
/// authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteConfig {
    pub pattern: String,
    pub page: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl RouteConfig {
    pub fn new(pattern: &str, page: &str, roles: &[&str]) -> Self {
        Self {
            pattern: pattern.to_string(),
            page: page.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// `[routing]` table: which paths skip the session check and which paths
/// are generic entry points that bounce to the role dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingConfig {
    #[serde(default = "default_entry_points")]
    pub entry_points: Vec<String>,
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            entry_points: default_entry_points(),
            public_paths: default_public_paths(),
        }
    }
}

fn default_entry_points() -> Vec<String> {
    vec!["/".to_string(), "/dashboard".to_string()]
}

fn default_public_paths() -> Vec<String> {
    vec!["/complete-profile/:token".to_string()]
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

/// The canonical route table. Order matters: first match wins, so literal
/// segments go before parameters at the same depth.
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/dashboard", "dashboard-home", &[]),
        RouteConfig::new("/dashboard/clinician", "clinician-dashboard", &["clinician"]),
        RouteConfig::new("/dashboard/recruiter", "recruiter-dashboard", &["recruiter"]),
        RouteConfig::new("/dashboard/leadership", "leadership-dashboard", &["leadership"]),
        RouteConfig::new("/referrals", "referral-list", &[]),
        RouteConfig::new("/referrals/new", "submit-referral", &["clinician", "recruiter"]),
        RouteConfig::new("/referrals/:id", "referral-detail", &[]),
        RouteConfig::new("/rewards", "rewards", &["clinician"]),
        RouteConfig::new("/analytics", "analytics", &["recruiter", "leadership"]),
        RouteConfig::new("/jobs", "jobs", &[]),
        RouteConfig::new("/complete-profile/:token", "complete-profile", &[]),
    ]
}

/// Top-level structure of `portal.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalConfig {
    /// Absolute prefix for every REST call, e.g. `https://api.example.com/v1`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default = "default_routes")]
    pub routes: Vec<RouteConfig>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            features: FeatureFlags::default(),
            routing: RoutingConfig::default(),
            routes: default_routes(),
        }
    }
}

impl PortalConfig {
    /// Parse `portal.toml` contents. An empty document yields the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config: PortalConfig = toml::from_str(contents)?;
        let base = config.api_base_url.trim();
        if base.is_empty() {
            return Err(AppError::config("api_base_url must not be empty"));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(AppError::config(format!(
                "api_base_url `{base}` must be an absolute http(s) URL"
            )));
        }
        Ok(config)
    }

    /// Parse `contents`, falling back to the defaults when the file is
    /// broken. The error is handed back so the caller can log it.
    pub fn from_toml_str_or_default(contents: &str) -> (Self, Option<AppError>) {
        match Self::from_toml_str(contents) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// `api_base_url` joined with `path`, without doubling the slash.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
