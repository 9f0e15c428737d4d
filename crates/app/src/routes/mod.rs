pub mod analytics;
pub mod complete_profile;
pub mod dashboard;
pub mod jobs;
pub mod login;
pub mod not_found;
pub mod page;
pub mod referrals;
pub mod rewards;

use dioxus::prelude::*;
use navigation::RouteDecision;
use shared_types::FeatureFlags;

use crate::api::ApiClient;
use crate::auth::{use_display_name, use_session};
use crate::history::{use_navigation_history, HistoryLink, HistoryScope};
use crate::PortalContext;

use login::Login;
use not_found::NotFound;
pub use page::Page;
use page::{sidebar_items, PageIcon, PageView};

/// Host routes. The Dioxus router only splits the URL into segments; which
/// page renders, and for whom, is decided by the portal's `SessionRouter`.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(HistoryScope)]
        #[route("/")]
        Root {},
        #[route("/:..segments")]
        Shell { segments: Vec<String> },
}

#[component]
fn Root() -> Element {
    rsx! { Gate { path: "/".to_string() } }
}

#[component]
fn Shell(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { Gate { path } }
}

/// Evaluates the session router for `path` and acts on the decision.
#[component]
fn Gate(path: String) -> Element {
    let portal = use_context::<PortalContext>();
    let session = use_session().snapshot();

    match portal.router.evaluate(&path, &session) {
        RouteDecision::Loading => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
        RouteDecision::Login => rsx! { Login {} },
        RouteDecision::Redirect(target) => {
            match target.parse::<Route>() {
                Ok(route) => {
                    navigator().replace(route);
                }
                Err(_) => tracing::error!(to = %target, "redirect target is not routable"),
            }
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        RouteDecision::Render {
            page,
            params,
            layout: true,
        } => rsx! {
            AppLayout { page,
                PageView { page, params }
            }
        },
        RouteDecision::Render {
            page,
            params,
            layout: false,
        } => rsx! { PageView { page, params } },
        RouteDecision::NotFound { path } => rsx! { NotFound { path } },
    }
}

/// Signed-in shell: role-filtered sidebar, top bar with history controls
/// and breadcrumbs, and the page body.
#[component]
fn AppLayout(page: Page, children: Element) -> Element {
    let portal = use_context::<PortalContext>();
    let flags: FeatureFlags = use_context();
    let api: ApiClient = portal.api.clone();
    let mut session = use_session();
    let mut history = use_navigation_history();
    let display_name = use_display_name();

    let role = session.role();
    let items = sidebar_items(portal.router.table(), role);
    let crumbs = history.breadcrumbs();
    let can_back = history.can_go_back();
    let can_forward = history.can_go_forward();

    let initials = display_name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();

    let sign_out = move |_: MouseEvent| {
        let api = api.clone();
        spawn(async move {
            if let Err(err) = api.logout().await {
                tracing::warn!(error = %err, "logout request failed");
            }
        });
        session.clear();
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "portal-shell",
            if flags.sidebar {
                nav { class: "portal-sidebar",
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "Referral Portal" }
                        if let Some(role) = role {
                            span { class: "sidebar-role-badge", "{role.label()}" }
                        }
                    }
                    ul { class: "sidebar-menu",
                        for (path, item) in items {
                            li { key: "{path}",
                                class: if item == page { "sidebar-item active" } else { "sidebar-item" },
                                HistoryLink { to: path.clone(), class: "sidebar-link".to_string(),
                                    PageIcon { page: item }
                                    span { "{item.title()}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "portal-main",
                header { class: "portal-topbar",
                    if flags.history_controls {
                        div { class: "history-controls",
                            button {
                                class: "history-button",
                                disabled: !can_back,
                                onclick: move |_| {
                                    history.go_back();
                                },
                                "Back"
                            }
                            button {
                                class: "history-button",
                                disabled: !can_forward,
                                onclick: move |_| {
                                    history.go_forward();
                                },
                                "Forward"
                            }
                        }
                    }
                    h1 { class: "topbar-title", "{page.title()}" }
                    div { class: "topbar-user",
                        span { class: "topbar-avatar", "{initials}" }
                        span { class: "topbar-name", "{display_name}" }
                        button { class: "button button-ghost", onclick: sign_out, "Sign Out" }
                    }
                }

                if flags.breadcrumbs && crumbs.len() > 1 {
                    ol { class: "breadcrumbs",
                        for (i, crumb) in crumbs.into_iter().enumerate() {
                            li { key: "{i}", class: "breadcrumb", "{crumb}" }
                        }
                    }
                }

                div { class: "page-content",
                    {children}
                }
            }
        }
    }
}
