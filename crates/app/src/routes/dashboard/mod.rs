pub mod clinician;
pub mod leadership;
pub mod recruiter;

use dioxus::prelude::*;
use shared_types::ReferralSummary;

use crate::history::HistoryLink;

/// Landing page for a signed-in account the portal has no role for yet.
/// Accounts with a role are redirected to their own dashboard before this
/// renders.
#[component]
pub fn DashboardHome() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-home",
            h2 { "Welcome to the Referral Portal" }
            p {
                "Your account does not have a portal role yet. You can browse open positions "
                "while an administrator finishes setting you up."
            }
            HistoryLink { to: "/jobs".to_string(), class: "button".to_string(), "Browse Open Positions" }
        }
    }
}

/// A single stat tile.
#[component]
pub fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

/// Placeholder tiles while a dashboard query is in flight.
#[component]
pub fn StatSkeleton(count: usize) -> Element {
    rsx! {
        div { class: "stats-grid",
            for i in 0..count {
                div { key: "{i}", class: "stat-card skeleton" }
            }
        }
    }
}

#[component]
pub fn LoadError(message: String) -> Element {
    rsx! {
        div { class: "load-error",
            p { "{message}" }
        }
    }
}

/// Referral counts shared by the clinician and recruiter dashboards.
#[component]
pub fn ReferralSummaryTiles(summary: ReferralSummary) -> Element {
    rsx! {
        StatCard { label: "Total Referrals", value: summary.total.to_string() }
        StatCard { label: "In Progress", value: summary.in_progress.to_string() }
        StatCard { label: "Placed", value: summary.placed.to_string() }
    }
}

/// `1234.5` → `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}
