use dioxus::prelude::*;
use shared_types::{Paged, Referral, ReferralSummary};

use super::{LoadError, ReferralSummaryTiles, StatSkeleton};
use crate::routes::referrals::list::ReferralRow;
use crate::PortalContext;

#[component]
pub fn RecruiterDashboard() -> Element {
    let portal = use_context::<PortalContext>();

    let api = portal.api.clone();
    let summary = use_resource(move || {
        let api = api.clone();
        async move { api.get_json::<ReferralSummary>("/referrals/summary?scope=all").await }
    });

    let api = portal.api.clone();
    let recent = use_resource(move || {
        let api = api.clone();
        async move { api.get_json::<Paged<Referral>>("/referrals?limit=5").await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "page-header",
            h2 { "Recruiting Pipeline" }
        }

        match &*summary.read() {
            Some(Ok(s)) => rsx! {
                div { class: "stats-grid",
                    ReferralSummaryTiles { summary: s.clone() }
                }
            },
            Some(Err(err)) => rsx! { LoadError { message: err.friendly_message() } },
            None => rsx! { StatSkeleton { count: 3 } },
        }

        h3 { class: "section-title", "Latest Referrals" }
        match &*recent.read() {
            Some(Ok(page)) if page.data.is_empty() => rsx! {
                p { class: "empty-state", "No referrals yet." }
            },
            Some(Ok(page)) => rsx! {
                table { class: "data-table",
                    tbody {
                        for referral in page.data.iter() {
                            ReferralRow { key: "{referral.id}", referral: referral.clone() }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! { LoadError { message: err.friendly_message() } },
            None => rsx! { StatSkeleton { count: 1 } },
        }
    }
}
