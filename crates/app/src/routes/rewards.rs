use dioxus::prelude::*;
use shared_types::RewardBalance;

use super::dashboard::{format_currency, LoadError, StatCard, StatSkeleton};
use crate::PortalContext;

#[component]
pub fn Rewards() -> Element {
    let portal = use_context::<PortalContext>();
    let api = portal.api.clone();
    let balance = use_resource(move || {
        let api = api.clone();
        async move { api.get_json::<RewardBalance>("/rewards/balance").await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard/dashboard.css") }
        div { class: "page-header",
            h2 { "Referral Rewards" }
        }
        p { class: "page-description",
            "Rewards are earned when a candidate you referred is placed. Pending amounts are paid after the placement's first 90 days."
        }

        match &*balance.read() {
            Some(Ok(b)) => rsx! {
                div { class: "stats-grid",
                    StatCard { label: "Earned", value: format_currency(b.earned) }
                    StatCard { label: "Pending", value: format_currency(b.pending) }
                    StatCard { label: "Paid Out", value: format_currency(b.paid_out) }
                }
            },
            Some(Err(err)) => rsx! { LoadError { message: err.friendly_message() } },
            None => rsx! { StatSkeleton { count: 3 } },
        }
    }
}
