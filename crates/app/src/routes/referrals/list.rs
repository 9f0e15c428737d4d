use dioxus::prelude::*;
use shared_types::{Paged, Referral};

use crate::history::use_navigation_history;
use crate::routes::dashboard::{LoadError, StatSkeleton};
use crate::PortalContext;

/// Referrals visible to the signed-in user. The API scopes the list by role.
#[component]
pub fn ReferralList() -> Element {
    let portal = use_context::<PortalContext>();
    let mut search = use_signal(String::new);

    let api = portal.api.clone();
    let referrals = use_resource(move || {
        let api = api.clone();
        async move { api.get_json::<Paged<Referral>>("/referrals").await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./referrals.css") }
        div { class: "page-header",
            h2 { "Referrals" }
            input {
                class: "input referral-search",
                r#type: "search",
                placeholder: "Filter by name or specialty",
                value: search(),
                oninput: move |e: FormEvent| search.set(e.value()),
            }
        }

        match &*referrals.read() {
            Some(Ok(page)) => {
                let needle = search().trim().to_lowercase();
                let rows: Vec<Referral> = page
                    .data
                    .iter()
                    .filter(|r| matches_filter(r, &needle))
                    .cloned()
                    .collect();
                rsx! {
                    p { class: "list-meta", "{rows.len()} of {page.total} referrals" }
                    if rows.is_empty() {
                        p { class: "empty-state", "No referrals match." }
                    } else {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Candidate" }
                                    th { "Specialty" }
                                    th { "Stage" }
                                    th { "Submitted" }
                                }
                            }
                            tbody {
                                for referral in rows.iter() {
                                    ReferralRow { key: "{referral.id}", referral: referral.clone() }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(err)) => rsx! { LoadError { message: err.friendly_message() } },
            None => rsx! { StatSkeleton { count: 1 } },
        }
    }
}

/// Table row that opens the referral's detail page.
#[component]
pub fn ReferralRow(referral: Referral) -> Element {
    let mut history = use_navigation_history();
    let target = format!("/referrals/{}", referral.id);

    rsx! {
        tr {
            class: "data-row clickable",
            onclick: move |_| {
                history.navigate(&target);
            },
            td { "{referral.candidate_name}" }
            td { "{referral.specialty}" }
            td {
                span { class: "stage-badge", "{referral.stage.label()}" }
            }
            td { "{referral.submitted_at}" }
        }
    }
}

fn matches_filter(referral: &Referral, needle: &str) -> bool {
    needle.is_empty()
        || referral.candidate_name.to_lowercase().contains(needle)
        || referral.specialty.to_lowercase().contains(needle)
}
