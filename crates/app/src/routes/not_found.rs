use dioxus::prelude::*;
use navigation::GENERIC_DASHBOARD;

use crate::history::HistoryLink;

/// 404 for signed-in users. Anonymous visitors never get here; they see
/// the sign-in form instead.
#[component]
pub fn NotFound(path: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                HistoryLink { to: GENERIC_DASHBOARD.to_string(),
                    class: "not-found-link".to_string(),
                    "Back to Dashboard"
                }
            }
        }
    }
}
