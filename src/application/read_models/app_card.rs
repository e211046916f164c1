//! Compact app view used by every list on every screen

use crate::catalog::domain::{AccessStatus, AppId, AppListing, Category, Department};
use serde::Serialize;

/// View representation of an app in a list or grid
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCard {
    pub id: AppId,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub category: Category,
    pub department: Department,
    pub rating: f32,
    pub reviews: u32,
    pub status: AccessStatus,
    pub it_approved: bool,
}

impl From<&AppListing> for AppCard {
    fn from(app: &AppListing) -> Self {
        Self {
            id: app.id.clone(),
            name: app.name.clone(),
            icon: app.icon.clone(),
            description: app.description.clone(),
            category: app.category,
            department: app.department,
            rating: app.rating,
            reviews: app.reviews,
            status: app.status,
            it_approved: app.it_approved,
        }
    }
}

/// Converts a slice of listings into cards, keeping order
pub fn cards(apps: &[AppListing]) -> Vec<AppCard> {
    apps.iter().map(AppCard::from).collect()
}
