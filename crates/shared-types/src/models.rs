use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal user role controlling which dashboards and pages are reachable.
///
/// - `Clinician`: refers candidates, tracks their own pipeline and rewards.
/// - `Recruiter`: works the referral queue and job postings.
/// - `Leadership`: read access to analytics across the program.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Clinician,
    Recruiter,
    Leadership,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Clinician, UserRole::Recruiter, UserRole::Leadership];

    /// Parse a role claim from the session service. Unknown or blank values
    /// yield `None` rather than a default role.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clinician" => Some(UserRole::Clinician),
            "recruiter" => Some(UserRole::Recruiter),
            "leadership" => Some(UserRole::Leadership),
            _ => None,
        }
    }

    /// Lowercase string used in URLs, config files and the wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Clinician => "clinician",
            UserRole::Recruiter => "recruiter",
            UserRole::Leadership => "leadership",
        }
    }

    /// Human-readable name for menus and headers.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Clinician => "Clinician",
            UserRole::Recruiter => "Recruiter",
            UserRole::Leadership => "Leadership",
        }
    }

    /// The role-specific landing page, `/dashboard/{role}`.
    pub fn dashboard_path(&self) -> String {
        format!("/dashboard/{}", self.as_str())
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque identity handed out by the session service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of the authentication state as seen by the router.
///
/// Owned by the session provider; routing code only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub identity: Option<UserId>,
    pub role: Option<UserRole>,
    pub loading: bool,
}

impl Session {
    /// Session provider has not answered yet.
    pub fn loading() -> Self {
        Self {
            identity: None,
            role: None,
            loading: true,
        }
    }

    /// Resolved, nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(identity: UserId, role: Option<UserRole>) -> Self {
        Self {
            identity: Some(identity),
            role,
            loading: false,
        }
    }

    /// Build a resolved session from the REST user payload. A role string
    /// the portal does not know becomes `None`.
    pub fn from_user(user: &AuthUser) -> Self {
        Self::authenticated(UserId::new(user.id.clone()), UserRole::parse(&user.role))
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Authenticated user as returned by the session endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    /// Raw role claim; parsed with [`UserRole::parse`] at the routing boundary.
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl AuthUser {
    pub fn role(&self) -> Option<UserRole> {
        UserRole::parse(&self.role)
    }
}

/// Login form payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Invite acceptance: a referred clinician finishing their account from the
/// emailed link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CompleteProfileRequest {
    pub token: String,
    pub display_name: String,
    pub password: String,
}

/// Stage of a referral as reported by the referrals API. Unknown stages
/// from newer servers deserialize as `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReferralStage {
    #[default]
    Submitted,
    Screening,
    Interviewing,
    Offered,
    Placed,
    Closed,
    #[serde(other)]
    Other,
}

impl ReferralStage {
    pub fn label(&self) -> &'static str {
        match self {
            ReferralStage::Submitted => "Submitted",
            ReferralStage::Screening => "Screening",
            ReferralStage::Interviewing => "Interviewing",
            ReferralStage::Offered => "Offered",
            ReferralStage::Placed => "Placed",
            ReferralStage::Closed => "Closed",
            ReferralStage::Other => "Other",
        }
    }
}

/// A candidate referral.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Referral {
    pub id: String,
    pub candidate_name: String,
    #[serde(default)]
    pub candidate_email: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub stage: ReferralStage,
    #[serde(default)]
    pub referred_by: String,
    #[serde(default)]
    pub submitted_at: String,
}

/// New referral submitted from the referral form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateReferralRequest {
    pub candidate_name: String,
    pub candidate_email: String,
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Pipeline counts shown on dashboards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReferralSummary {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub in_progress: i64,
    #[serde(default)]
    pub placed: i64,
}

/// Reward balance for the signed-in clinician.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RewardBalance {
    #[serde(default)]
    pub earned: f64,
    #[serde(default)]
    pub pending: f64,
    #[serde(default)]
    pub paid_out: f64,
}

/// Program-wide figures for the leadership view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AnalyticsOverview {
    #[serde(default)]
    pub referrals_this_month: i64,
    #[serde(default)]
    pub placements_this_month: i64,
    #[serde(default)]
    pub conversion_rate: f64,
    #[serde(default)]
    pub active_referrers: i64,
}

/// Open position candidates can be referred to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub facility: String,
    #[serde(default)]
    pub location: String,
}

/// Paged list wrapper used by the referrals and jobs endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paged<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: i64,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}
