use crate::catalog::domain::{
    AnalyticsSnapshot, AppBundle, AppId, AppListing, BundleStats, Review,
};
use crate::shared::Result;

/// CatalogRepository port for reading catalog data
///
/// This port abstracts where listings, bundles, analytics figures and
/// reviews come from. The catalog is read-only: there is no write side.
pub trait CatalogRepository {
    /// Returns every listing in display order
    fn list_apps(&self) -> Result<Vec<AppListing>>;

    /// Looks up one listing by id
    ///
    /// # Returns
    /// `None` when no listing has the given id
    fn find_app(&self, id: &AppId) -> Result<Option<AppListing>> {
        Ok(self.list_apps()?.into_iter().find(|app| &app.id == id))
    }

    /// Returns the curated bundles in display order
    fn list_bundles(&self) -> Result<Vec<AppBundle>>;

    /// Returns the headline numbers shown under the bundles
    fn bundle_stats(&self) -> Result<BundleStats>;

    /// Returns the analytics dashboard figures
    fn analytics(&self) -> Result<AnalyticsSnapshot>;

    /// Returns the reviews shown on an app's details screen
    fn reviews_for(&self, id: &AppId) -> Result<Vec<Review>>;
}
