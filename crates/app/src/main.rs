use std::rc::Rc;

use dioxus::prelude::*;
use navigation::{RouteTable, SessionRouter};
use shared_types::{FeatureFlags, PortalConfig};

mod api;
mod auth;
mod history;
mod routes;

use api::ApiClient;
use auth::SessionState;
use routes::{Page, Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Route table, feature switches and API location, embedded at build time.
const PORTAL_TOML: &str = include_str!("../portal.toml");

/// Everything built once from `portal.toml` and shared by every route.
#[derive(Clone)]
pub struct PortalContext {
    pub config: Rc<PortalConfig>,
    pub router: Rc<SessionRouter<Page>>,
    pub api: ApiClient,
}

impl PortalContext {
    /// Load the embedded config. A broken file or a route table that fails
    /// validation falls back to the built-in defaults.
    pub fn load() -> Self {
        let (config, err) = PortalConfig::from_toml_str_or_default(PORTAL_TOML);
        if let Some(err) = err {
            tracing::warn!(error = %err, "portal.toml rejected, using defaults");
        }

        let (config, router) = match SessionRouter::from_config(&config, Page::from_key) {
            Ok(router) => (config, router),
            Err(err) => {
                tracing::error!(error = %err, "route table rejected, using default routes");
                let config = PortalConfig::default();
                let router = SessionRouter::from_config(&config, Page::from_key)
                    .unwrap_or_else(|_| SessionRouter::new(RouteTable::new()));
                (config, router)
            }
        };

        tracing::info!(
            routes = router.table().len(),
            api = %config.api_base_url,
            "portal configured"
        );

        let config = Rc::new(config);
        Self {
            api: ApiClient::new(config.clone()),
            config,
            router: Rc::new(router),
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let portal = use_context_provider(PortalContext::load);
    let flags: FeatureFlags = portal.config.features;
    use_context_provider(|| flags);

    let mut session = use_context_provider(SessionState::new);

    // Resolve the session once on mount; routing shows a spinner until then.
    let api = portal.api.clone();
    use_future(move || {
        let api = api.clone();
        async move {
            match api.current_session().await {
                Ok(Some(user)) => session.set_user(user),
                Ok(None) => session.clear(),
                Err(err) => {
                    tracing::warn!(error = %err, "session lookup failed, treating as signed out");
                    session.clear();
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
