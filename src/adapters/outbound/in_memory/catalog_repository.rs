use crate::catalog::domain::{
    AnalyticsSnapshot, AppBundle, AppId, AppListing, BundleStats, Review,
};
use crate::catalog::seed;
use crate::ports::outbound::CatalogRepository;
use crate::shared::Result;

/// InMemoryCatalogRepository adapter serving the built-in catalog
///
/// All data is loaded once at construction; nothing is ever written back.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogRepository {
    apps: Vec<AppListing>,
    bundles: Vec<AppBundle>,
    bundle_stats: BundleStats,
    analytics: AnalyticsSnapshot,
    reviews: Vec<Review>,
}

impl InMemoryCatalogRepository {
    /// Creates a repository holding the seed catalog
    pub fn new() -> Self {
        Self::with_apps(seed::seed_apps())
    }

    /// Creates a repository with custom listings and the seed extras
    pub fn with_apps(apps: Vec<AppListing>) -> Self {
        Self {
            apps,
            bundles: seed::seed_bundles(),
            bundle_stats: seed::seed_bundle_stats(),
            analytics: seed::seed_analytics(),
            reviews: seed::seed_reviews(),
        }
    }
}

impl Default for InMemoryCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn list_apps(&self) -> Result<Vec<AppListing>> {
        Ok(self.apps.clone())
    }

    fn list_bundles(&self) -> Result<Vec<AppBundle>> {
        Ok(self.bundles.clone())
    }

    fn bundle_stats(&self) -> Result<BundleStats> {
        Ok(self.bundle_stats.clone())
    }

    fn analytics(&self) -> Result<AnalyticsSnapshot> {
        Ok(self.analytics.clone())
    }

    /// Every app shows the same fixed set of reviews
    fn reviews_for(&self, _id: &AppId) -> Result<Vec<Review>> {
        Ok(self.reviews.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serves_seed_catalog() {
        let repository = InMemoryCatalogRepository::new();
        assert_eq!(repository.list_apps().unwrap().len(), 10);
        assert_eq!(repository.list_bundles().unwrap().len(), 3);
        assert_eq!(repository.bundle_stats().unwrap().success_rate, "98%");
    }

    #[test]
    fn test_find_app_by_id() {
        let repository = InMemoryCatalogRepository::new();
        let github = repository
            .find_app(&AppId::new("4").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(github.name, "GitHub");
        assert!(repository
            .find_app(&AppId::new("missing").unwrap())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_reviews_are_shared() {
        let repository = InMemoryCatalogRepository::new();
        let slack = repository.reviews_for(&AppId::new("1").unwrap()).unwrap();
        let zoom = repository.reviews_for(&AppId::new("6").unwrap()).unwrap();
        assert_eq!(slack.len(), 4);
        assert_eq!(slack, zoom);
    }

    #[test]
    fn test_with_custom_apps() {
        let mut apps = seed::seed_apps();
        apps.truncate(2);
        let repository = InMemoryCatalogRepository::with_apps(apps);
        assert_eq!(repository.list_apps().unwrap().len(), 2);
    }
}
