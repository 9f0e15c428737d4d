use shared_types::{AppError, PortalConfig, Session};

use crate::pattern::{normalize_path, RouteParams, RoutePattern};
use crate::table::RouteTable;

/// Where a denied or role-less session is sent.
pub const GENERIC_DASHBOARD: &str = "/dashboard";

/// Outcome of evaluating one location against the session.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteDecision<P> {
    /// Session provider still resolving; render a spinner, decide nothing.
    Loading,
    /// Not signed in. Render the login page in place; the URL stays.
    Login,
    /// Replace the current location with this path through the router.
    Redirect(String),
    /// Render `page`. `layout` is false for public pages, which skip the
    /// signed-in shell.
    Render {
        page: P,
        params: RouteParams,
        layout: bool,
    },
    /// Signed in, nothing registered at this path.
    NotFound { path: String },
}

impl<P> RouteDecision<P> {
    pub fn kind(&self) -> &'static str {
        match self {
            RouteDecision::Loading => "loading",
            RouteDecision::Login => "login",
            RouteDecision::Redirect(_) => "redirect",
            RouteDecision::Render { layout: true, .. } => "render",
            RouteDecision::Render { layout: false, .. } => "render_public",
            RouteDecision::NotFound { .. } => "not_found",
        }
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            RouteDecision::Redirect(target) => Some(target.as_str()),
            _ => None,
        }
    }
}

/// Guards every location behind the session and the route table.
///
/// Checks run in a fixed order: loading, public allow-list, sign-in,
/// generic entry redirect, role guard, not-found. An anonymous visitor on
/// an unknown path therefore sees the login page, never a 404.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRouter<P> {
    table: RouteTable<P>,
    public: Vec<RoutePattern>,
    entry_points: Vec<String>,
}

impl<P: Clone> SessionRouter<P> {
    /// Router with the default entry points (`/`, `/dashboard`) and an empty
    /// public allow-list.
    pub fn new(table: RouteTable<P>) -> Self {
        Self {
            table,
            public: Vec::new(),
            entry_points: vec!["/".to_string(), GENERIC_DASHBOARD.to_string()],
        }
    }

    pub fn with_public_paths<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self, AppError> {
        self.public = patterns
            .iter()
            .map(|p| RoutePattern::parse(p.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    pub fn with_entry_points<S: AsRef<str>>(mut self, paths: &[S]) -> Self {
        self.entry_points = paths.iter().map(|p| normalize_path(p.as_ref())).collect();
        self
    }

    /// Build the router described by `portal.toml`. The table is validated
    /// so that every role's dashboard redirect lands somewhere it may stay.
    pub fn from_config<F>(config: &PortalConfig, resolve: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<P>,
    {
        let table = RouteTable::from_config(&config.routes, resolve)?;
        table.validate()?;
        Self::new(table)
            .with_entry_points(&config.routing.entry_points)
            .with_public_paths(&config.routing.public_paths)
    }

    pub fn table(&self) -> &RouteTable<P> {
        &self.table
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public.iter().any(|p| p.matches(path).is_some())
    }

    pub fn is_entry_point(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.entry_points.iter().any(|e| *e == path)
    }

    pub fn evaluate(&self, path: &str, session: &Session) -> RouteDecision<P> {
        let path = normalize_path(path);
        let decision = self.decide(&path, session);
        tracing::debug!(
            path = %path,
            role = ?session.role,
            authenticated = session.is_authenticated(),
            decision = decision.kind(),
            redirect = decision.redirect_target().unwrap_or(""),
            "route evaluated"
        );
        decision
    }

    fn decide(&self, path: &str, session: &Session) -> RouteDecision<P> {
        if session.loading {
            return RouteDecision::Loading;
        }

        if self.is_public(path) {
            return match self.table.find(path) {
                Some(hit) => RouteDecision::Render {
                    page: hit.entry.page.clone(),
                    params: hit.params,
                    layout: false,
                },
                None => RouteDecision::NotFound {
                    path: path.to_string(),
                },
            };
        }

        if !session.is_authenticated() {
            return RouteDecision::Login;
        }

        if self.is_entry_point(path) {
            match session.role {
                Some(role) => return RouteDecision::Redirect(role.dashboard_path()),
                None if path != GENERIC_DASHBOARD => {
                    return RouteDecision::Redirect(GENERIC_DASHBOARD.to_string())
                }
                // No role: fall through and render whatever landing page is
                // registered at the generic dashboard.
                None => {}
            }
        }

        match self.table.find(path) {
            Some(hit) if !hit.entry.allowed.admits(session.role) => {
                if path == GENERIC_DASHBOARD {
                    // Redirecting here again would loop.
                    RouteDecision::NotFound {
                        path: path.to_string(),
                    }
                } else {
                    RouteDecision::Redirect(GENERIC_DASHBOARD.to_string())
                }
            }
            Some(hit) => RouteDecision::Render {
                page: hit.entry.page.clone(),
                params: hit.params,
                layout: true,
            },
            None => RouteDecision::NotFound {
                path: path.to_string(),
            },
        }
    }
}
