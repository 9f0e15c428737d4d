use serde::{Deserialize, Serialize};

/// Feature flags controlling optional pieces of the portal shell.
///
/// Read from the `[features]` table of `portal.toml`. Missing fields fall
/// back to [`FeatureFlags::default`], which turns the navigation aids on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Trail of visited pages above the page body.
    #[serde(default = "default_true")]
    pub breadcrumbs: bool,
    /// Back/forward buttons in the top bar.
    #[serde(default = "default_true")]
    pub history_controls: bool,
    /// Role-filtered sidebar menu.
    #[serde(default = "default_true")]
    pub sidebar: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            breadcrumbs: true,
            history_controls: true,
            sidebar: true,
        }
    }
}

fn default_true() -> bool {
    true
}
