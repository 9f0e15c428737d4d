use dioxus::prelude::*;
use shared_types::{AuthUser, Session, UserRole};

/// Signed-in user plus whether the initial lookup is still running.
///
/// Pages read it through [`use_session`]; only the loader in `App`, the
/// login form and sign-out write to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    user: Signal<Option<AuthUser>>,
    loading: Signal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    /// Current value as the router sees it. Subscribes the caller.
    pub fn snapshot(&self) -> Session {
        if *self.loading.read() {
            return Session::loading();
        }
        match self.user.read().as_ref() {
            Some(user) => Session::from_user(user),
            None => Session::anonymous(),
        }
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.user.read().clone()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.read().as_ref().and_then(AuthUser::role)
    }

    pub fn set_user(&mut self, user: AuthUser) {
        tracing::info!(user = %user.id, role = %user.role, "session established");
        if user.role().is_none() {
            tracing::warn!(user = %user.id, role = %user.role, "user has no recognised role");
        }
        self.user.set(Some(user));
        self.loading.set(false);
    }

    pub fn clear(&mut self) {
        if self.user.peek().is_some() {
            tracing::info!("session cleared");
        }
        self.user.set(None);
        self.loading.set(false);
    }
}

/// Hook to access the session.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Display name for the header, falling back to the email address.
pub fn use_display_name() -> String {
    let session = use_session();
    session
        .user()
        .map(|u| {
            if u.display_name.trim().is_empty() {
                u.email
            } else {
                u.display_name
            }
        })
        .unwrap_or_default()
}
