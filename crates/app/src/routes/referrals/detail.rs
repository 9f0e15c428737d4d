use dioxus::prelude::*;
use shared_types::Referral;

use crate::history::HistoryLink;
use crate::routes::dashboard::{LoadError, StatSkeleton};
use crate::PortalContext;

#[component]
pub fn ReferralDetail(id: String) -> Element {
    let portal = use_context::<PortalContext>();
    let api = portal.api.clone();

    let referral = use_resource(use_reactive((&id,), move |(id,)| {
        let api = api.clone();
        async move { api.get_json::<Referral>(&format!("/referrals/{id}")).await }
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./referrals.css") }
        div { class: "page-header",
            HistoryLink { to: "/referrals".to_string(), class: "button button-ghost".to_string(), "All Referrals" }
        }

        match &*referral.read() {
            Some(Ok(r)) => rsx! {
                div { class: "detail-card",
                    h2 { "{r.candidate_name}" }
                    span { class: "stage-badge", "{r.stage.label()}" }
                    dl { class: "detail-fields",
                        dt { "Email" }
                        dd { "{r.candidate_email}" }
                        dt { "Specialty" }
                        dd { "{r.specialty}" }
                        dt { "Referred by" }
                        dd { "{r.referred_by}" }
                        dt { "Submitted" }
                        dd { "{r.submitted_at}" }
                    }
                }
            },
            Some(Err(err)) => rsx! { LoadError { message: err.friendly_message() } },
            None => rsx! { StatSkeleton { count: 1 } },
        }
    }
}
