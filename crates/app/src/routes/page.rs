use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdFileText, LdLayoutDashboard, LdPackage, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use navigation::{RouteParams, RouteTable};
use shared_types::UserRole;

use super::analytics::Analytics;
use super::complete_profile::CompleteProfile;
use super::dashboard::{
    clinician::ClinicianDashboard, leadership::LeadershipDashboard, recruiter::RecruiterDashboard,
    DashboardHome,
};
use super::jobs::Jobs;
use super::referrals::{detail::ReferralDetail, list::ReferralList, submit::SubmitReferral};
use super::rewards::Rewards;

/// Every screen the route table can point at. `portal.toml` refers to these
/// by [`Page::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    DashboardHome,
    ClinicianDashboard,
    RecruiterDashboard,
    LeadershipDashboard,
    ReferralList,
    SubmitReferral,
    ReferralDetail,
    Rewards,
    Analytics,
    Jobs,
    CompleteProfile,
}

impl Page {
    pub const ALL: [Page; 11] = [
        Page::DashboardHome,
        Page::ClinicianDashboard,
        Page::RecruiterDashboard,
        Page::LeadershipDashboard,
        Page::ReferralList,
        Page::SubmitReferral,
        Page::ReferralDetail,
        Page::Rewards,
        Page::Analytics,
        Page::Jobs,
        Page::CompleteProfile,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Page::DashboardHome => "dashboard-home",
            Page::ClinicianDashboard => "clinician-dashboard",
            Page::RecruiterDashboard => "recruiter-dashboard",
            Page::LeadershipDashboard => "leadership-dashboard",
            Page::ReferralList => "referral-list",
            Page::SubmitReferral => "submit-referral",
            Page::ReferralDetail => "referral-detail",
            Page::Rewards => "rewards",
            Page::Analytics => "analytics",
            Page::Jobs => "jobs",
            Page::CompleteProfile => "complete-profile",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Heading shown in the top bar.
    pub fn title(&self) -> &'static str {
        match self {
            Page::DashboardHome
            | Page::ClinicianDashboard
            | Page::RecruiterDashboard
            | Page::LeadershipDashboard => "Dashboard",
            Page::ReferralList | Page::ReferralDetail => "Referrals",
            Page::SubmitReferral => "Refer a Candidate",
            Page::Rewards => "Rewards",
            Page::Analytics => "Analytics",
            Page::Jobs => "Open Positions",
            Page::CompleteProfile => "Complete Your Profile",
        }
    }
}

/// Sidebar entries for `role`: the literal routes it may open, in table
/// order. The generic landing is only listed when there is no role
/// dashboard to show instead.
pub fn sidebar_items(table: &RouteTable<Page>, role: Option<UserRole>) -> Vec<(String, Page)> {
    table
        .accessible_to(role)
        .filter(|e| match e.page {
            Page::DashboardHome => role.is_none(),
            Page::CompleteProfile => false,
            _ => true,
        })
        .map(|e| (e.pattern.as_str().to_string(), e.page))
        .collect()
}

#[component]
pub fn PageIcon(page: Page) -> Element {
    match page {
        Page::ReferralList | Page::ReferralDetail => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
        },
        Page::SubmitReferral | Page::CompleteProfile => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
        },
        Page::Rewards => rsx! {
            Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
        },
        Page::Analytics => rsx! {
            Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
        },
        Page::Jobs => rsx! {
            Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
        },
        Page::DashboardHome
        | Page::ClinicianDashboard
        | Page::RecruiterDashboard
        | Page::LeadershipDashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
    }
}

/// Renders the component for `page`, pulling its path parameters out of
/// `params`.
#[component]
pub fn PageView(page: Page, params: RouteParams) -> Element {
    let param = |name: &str| params.get(name).cloned().unwrap_or_default();

    match page {
        Page::DashboardHome => rsx! { DashboardHome {} },
        Page::ClinicianDashboard => rsx! { ClinicianDashboard {} },
        Page::RecruiterDashboard => rsx! { RecruiterDashboard {} },
        Page::LeadershipDashboard => rsx! { LeadershipDashboard {} },
        Page::ReferralList => rsx! { ReferralList {} },
        Page::SubmitReferral => rsx! { SubmitReferral {} },
        Page::ReferralDetail => rsx! { ReferralDetail { id: param("id") } },
        Page::Rewards => rsx! { Rewards {} },
        Page::Analytics => rsx! { Analytics {} },
        Page::Jobs => rsx! { Jobs {} },
        Page::CompleteProfile => rsx! { CompleteProfile { token: param("token") } },
    }
}
