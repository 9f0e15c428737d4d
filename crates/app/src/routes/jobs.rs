use dioxus::prelude::*;
use shared_types::{JobPosting, Paged};

use super::dashboard::{LoadError, StatSkeleton};
use crate::auth::use_session;
use crate::history::HistoryLink;
use crate::PortalContext;

const SUBMIT_PATH: &str = "/referrals/new";

/// Open positions. The refer button only shows for roles the route table
/// lets through to the referral form.
#[component]
pub fn Jobs() -> Element {
    let portal = use_context::<PortalContext>();
    let session = use_session();

    let can_refer = portal
        .router
        .table()
        .find(SUBMIT_PATH)
        .is_some_and(|hit| hit.entry.allowed.admits(session.role()));

    let api = portal.api.clone();
    let jobs = use_resource(move || {
        let api = api.clone();
        async move { api.get_json::<Paged<JobPosting>>("/jobs").await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard/dashboard.css") }
        div { class: "page-header",
            h2 { "Open Positions" }
        }

        match &*jobs.read() {
            Some(Ok(page)) if page.data.is_empty() => rsx! {
                p { class: "empty-state", "No open positions right now." }
            },
            Some(Ok(page)) => rsx! {
                div { class: "job-list",
                    for job in page.data.iter() {
                        div { key: "{job.id}", class: "job-card",
                            h3 { "{job.title}" }
                            p { class: "job-meta", "{job.facility} · {job.location}" }
                            if can_refer {
                                HistoryLink { to: SUBMIT_PATH.to_string(), class: "button".to_string(), "Refer a Candidate" }
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! { LoadError { message: err.friendly_message() } },
            None => rsx! { StatSkeleton { count: 2 } },
        }
    }
}
