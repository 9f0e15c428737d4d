use dioxus::prelude::*;
use shared_types::AnalyticsOverview;

use super::{LoadError, StatCard, StatSkeleton};
use crate::history::HistoryLink;
use crate::PortalContext;

/// Organisation-wide referral health for leadership.
#[component]
pub fn LeadershipDashboard() -> Element {
    let portal = use_context::<PortalContext>();
    let api = portal.api.clone();
    let overview = use_resource(move || {
        let api = api.clone();
        async move { api.get_json::<AnalyticsOverview>("/analytics/overview").await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "page-header",
            h2 { "Program Overview" }
            HistoryLink { to: "/analytics".to_string(), class: "button button-ghost".to_string(), "Full Analytics" }
        }

        match &*overview.read() {
            Some(Ok(o)) => rsx! {
                div { class: "stats-grid",
                    StatCard { label: "Referrals This Month", value: o.referrals_this_month.to_string() }
                    StatCard { label: "Placements This Month", value: o.placements_this_month.to_string() }
                    StatCard { label: "Conversion", value: format!("{:.1}%", o.conversion_rate * 100.0) }
                    StatCard { label: "Active Referrers", value: o.active_referrers.to_string() }
                }
            },
            Some(Err(err)) => rsx! { LoadError { message: err.friendly_message() } },
            None => rsx! { StatSkeleton { count: 4 } },
        }
    }
}
