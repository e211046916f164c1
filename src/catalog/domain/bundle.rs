use serde::Serialize;

/// An app shown inside a bundle card. Bundles may list apps that are not
/// in the catalog, so only name and icon are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleApp {
    pub name: String,
    pub icon: String,
}

impl BundleApp {
    pub fn new(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// A named, fixed group of apps recommended together for a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppBundle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub setup_time: String,
    /// Number of team members already approved for the bundle
    pub approved: u32,
    pub recommended_for: Vec<String>,
    pub included_apps: Vec<BundleApp>,
}

impl AppBundle {
    pub fn apps_included(&self) -> usize {
        self.included_apps.len()
    }
}

/// Headline numbers shown under the bundle list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleStats {
    pub users_onboarded: String,
    pub success_rate: String,
    pub average_setup_time: String,
}
