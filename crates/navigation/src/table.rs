use shared_types::{AppError, RouteConfig, UserRole};

use crate::pattern::{RouteParams, RoutePattern};

/// Roles allowed on a route. Empty means "any authenticated user".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleSet {
    clinician: bool,
    recruiter: bool,
    leadership: bool,
}

impl RoleSet {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn only(roles: &[UserRole]) -> Self {
        let mut set = Self::default();
        for role in roles {
            set.insert(*role);
        }
        set
    }

    pub fn insert(&mut self, role: UserRole) {
        match role {
            UserRole::Clinician => self.clinician = true,
            UserRole::Recruiter => self.recruiter = true,
            UserRole::Leadership => self.leadership = true,
        }
    }

    pub fn contains(&self, role: UserRole) -> bool {
        match role {
            UserRole::Clinician => self.clinician,
            UserRole::Recruiter => self.recruiter,
            UserRole::Leadership => self.leadership,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.clinician || self.recruiter || self.leadership)
    }

    /// Whether a session with `role` may enter. An unknown role only gets
    /// through an unrestricted set.
    pub fn admits(&self, role: Option<UserRole>) -> bool {
        if self.is_empty() {
            return true;
        }
        role.is_some_and(|r| self.contains(r))
    }
}

/// One `(pattern, guard, page)` row of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry<P> {
    pub pattern: RoutePattern,
    pub page: P,
    pub allowed: RoleSet,
}

/// A table hit: the entry plus whatever its pattern captured.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a, P> {
    pub entry: &'a RouteEntry<P>,
    pub params: RouteParams,
}

/// Ordered route table, first match wins.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable<P> {
    entries: Vec<RouteEntry<P>>,
}

impl<P> Default for RouteTable<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<P> RouteTable<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Fails only on a malformed pattern.
    pub fn route(mut self, pattern: &str, page: P, allowed: RoleSet) -> Result<Self, AppError> {
        self.entries.push(RouteEntry {
            pattern: RoutePattern::parse(pattern)?,
            page,
            allowed,
        });
        Ok(self)
    }

    /// Build a table from config rows. `resolve` maps each page key to the
    /// host's page type; unknown keys and unknown roles are config errors.
    pub fn from_config<F>(routes: &[RouteConfig], resolve: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<P>,
    {
        let mut table = Self::new();
        for route in routes {
            let page = resolve(&route.page).ok_or_else(|| {
                AppError::config(format!(
                    "route `{}` refers to unknown page `{}`",
                    route.pattern, route.page
                ))
            })?;
            let mut allowed = RoleSet::any();
            for name in &route.roles {
                let role = UserRole::parse(name).ok_or_else(|| {
                    AppError::config(format!(
                        "route `{}` lists unknown role `{}`",
                        route.pattern, name
                    ))
                })?;
                allowed.insert(role);
            }
            table = table.route(&route.pattern, page, allowed)?;
        }
        Ok(table)
    }

    pub fn entries(&self) -> &[RouteEntry<P>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose pattern matches `path`.
    pub fn find(&self, path: &str) -> Option<RouteMatch<'_, P>> {
        self.entries.iter().find_map(|entry| {
            entry
                .pattern
                .matches(path)
                .map(|params| RouteMatch { entry, params })
        })
    }

    /// Parameter-free routes `role` may open, in table order. Used to build
    /// role-filtered menus.
    pub fn accessible_to(&self, role: Option<UserRole>) -> impl Iterator<Item = &RouteEntry<P>> {
        self.entries
            .iter()
            .filter(move |e| e.pattern.is_literal() && e.allowed.admits(role))
    }

    /// Every role must land on a route it is allowed on when sent to its
    /// dashboard, otherwise the role redirect would bounce forever.
    pub fn validate(&self) -> Result<(), AppError> {
        for role in UserRole::ALL {
            let target = role.dashboard_path();
            match self.find(&target) {
                Some(hit) if hit.entry.allowed.admits(Some(role)) => {}
                Some(_) => {
                    return Err(AppError::config(format!(
                        "dashboard `{target}` does not admit role `{role}`"
                    )))
                }
                None => {
                    return Err(AppError::config(format!(
                        "no route for dashboard `{target}`"
                    )))
                }
            }
        }
        Ok(())
    }
}
