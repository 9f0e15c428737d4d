use dioxus::prelude::*;
use dioxus::router::Navigator;
use navigation::{LocationPrimitive, NavigationHistory};
use shared_types::AppError;

use crate::routes::Route;

/// The Dioxus router as a bare "current URL" primitive.
pub struct RouterLocation {
    nav: Navigator,
}

impl RouterLocation {
    pub fn new() -> Self {
        Self { nav: navigator() }
    }
}

impl LocationPrimitive for RouterLocation {
    fn current_path(&self) -> String {
        router().full_route_string()
    }

    fn set_location(&mut self, path: &str) -> Result<(), AppError> {
        let route = path
            .parse::<Route>()
            .map_err(|_| AppError::bad_request(format!("`{path}` is not a portal route")))?;
        self.nav.push(route);
        Ok(())
    }
}

/// Shared handle on the session's [`NavigationHistory`].
#[derive(Clone, Copy, PartialEq)]
pub struct HistoryState {
    inner: Signal<NavigationHistory>,
}

impl HistoryState {
    pub fn new(initial: String) -> Self {
        Self {
            inner: Signal::new(NavigationHistory::new(initial)),
        }
    }

    /// False when nothing moved: already at `path`, or the router refused it.
    pub fn navigate(&mut self, path: &str) -> bool {
        let mut location = RouterLocation::new();
        self.inner.write().navigate(path, &mut location)
    }

    pub fn go_back(&mut self) -> bool {
        let mut location = RouterLocation::new();
        self.inner.write().go_back(&mut location)
    }

    pub fn go_forward(&mut self) -> bool {
        let mut location = RouterLocation::new();
        self.inner.write().go_forward(&mut location)
    }

    pub fn can_go_back(&self) -> bool {
        self.inner.read().can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.inner.read().can_go_forward()
    }

    pub fn breadcrumbs(&self) -> Vec<String> {
        self.inner.read().breadcrumbs().to_vec()
    }

    fn observe(&mut self, path: &str) {
        self.inner.write().observe(path);
    }
}

/// Hook to access the navigation history.
pub fn use_navigation_history() -> HistoryState {
    use_context::<HistoryState>()
}

/// Layout around every route. Owns the history for the lifetime of the
/// router and reports each settled location to it.
#[component]
pub fn HistoryScope() -> Element {
    let route: Route = use_route();
    let path = route.to_string();

    let initial = path.clone();
    let mut history = use_context_provider(move || HistoryState::new(initial));

    use_effect(use_reactive((&path,), move |(path,)| {
        history.observe(&path);
    }));

    rsx! { Outlet::<Route> {} }
}

/// Anchor that moves through the history tracker, so the hop is recorded
/// and can be undone with the back control.
#[component]
pub fn HistoryLink(
    to: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let mut history = use_navigation_history();
    let href = to.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                history.navigate(&to);
            },
            {children}
        }
    }
}
