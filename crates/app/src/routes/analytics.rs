use dioxus::prelude::*;
use shared_types::{AnalyticsOverview, ReferralSummary};

use super::dashboard::{LoadError, StatCard, StatSkeleton};
use crate::PortalContext;

/// Placement rate in percent, `None` when nothing has been referred yet.
pub fn placement_rate(summary: &ReferralSummary) -> Option<f64> {
    (summary.total > 0).then(|| summary.placed as f64 * 100.0 / summary.total as f64)
}

#[component]
pub fn Analytics() -> Element {
    let portal = use_context::<PortalContext>();

    let api = portal.api.clone();
    let overview = use_resource(move || {
        let api = api.clone();
        async move { api.get_json::<AnalyticsOverview>("/analytics/overview").await }
    });

    let api = portal.api.clone();
    let summary = use_resource(move || {
        let api = api.clone();
        async move { api.get_json::<ReferralSummary>("/referrals/summary?scope=all").await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard/dashboard.css") }
        div { class: "page-header",
            h2 { "Analytics" }
        }

        h3 { class: "section-title", "This Month" }
        match &*overview.read() {
            Some(Ok(o)) => rsx! {
                div { class: "stats-grid",
                    StatCard { label: "Referrals", value: o.referrals_this_month.to_string() }
                    StatCard { label: "Placements", value: o.placements_this_month.to_string() }
                    StatCard { label: "Conversion", value: format!("{:.1}%", o.conversion_rate * 100.0) }
                    StatCard { label: "Active Referrers", value: o.active_referrers.to_string() }
                }
            },
            Some(Err(err)) => rsx! { LoadError { message: err.friendly_message() } },
            None => rsx! { StatSkeleton { count: 4 } },
        }

        h3 { class: "section-title", "All Time" }
        match &*summary.read() {
            Some(Ok(s)) => {
                let rate = placement_rate(s)
                    .map(|r| format!("{r:.1}%"))
                    .unwrap_or_else(|| "n/a".to_string());
                rsx! {
                    div { class: "stats-grid",
                        StatCard { label: "Referrals", value: s.total.to_string() }
                        StatCard { label: "In Progress", value: s.in_progress.to_string() }
                        StatCard { label: "Placed", value: s.placed.to_string() }
                        StatCard { label: "Placement Rate", value: rate }
                    }
                }
            }
            Some(Err(err)) => rsx! { LoadError { message: err.friendly_message() } },
            None => rsx! { StatSkeleton { count: 4 } },
        }
    }
}
