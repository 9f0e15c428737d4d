use dioxus::prelude::*;
use shared_types::{ReferralSummary, RewardBalance};

use super::{format_currency, LoadError, ReferralSummaryTiles, StatCard, StatSkeleton};
use crate::history::HistoryLink;
use crate::PortalContext;

/// Clinician home: own referral progress and reward earnings.
#[component]
pub fn ClinicianDashboard() -> Element {
    let portal = use_context::<PortalContext>();

    let api = portal.api.clone();
    let summary = use_resource(move || {
        let api = api.clone();
        async move { api.get_json::<ReferralSummary>("/referrals/summary").await }
    });

    let api = portal.api.clone();
    let rewards = use_resource(move || {
        let api = api.clone();
        async move { api.get_json::<RewardBalance>("/rewards/balance").await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "page-header",
            h2 { "My Referrals" }
            HistoryLink { to: "/referrals/new".to_string(), class: "button".to_string(), "Refer a Candidate" }
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

        h3 { class: "section-title", "Rewards" }
        match &*rewards.read() {
            Some(Ok(r)) => rsx! {
                div { class: "stats-grid",
                    StatCard { label: "Earned", value: format_currency(r.earned) }
                    StatCard { label: "Pending", value: format_currency(r.pending) }
                    StatCard { label: "Paid Out", value: format_currency(r.paid_out) }
                }
            },
            Some(Err(err)) => rsx! { LoadError { message: err.friendly_message() } },
            None => rsx! { StatSkeleton { count: 3 } },
        }
    }
}
