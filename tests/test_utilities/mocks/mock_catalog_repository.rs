use app_catalog::catalog::domain::{AnalyticsSnapshot, AppBundle, BundleStats, Review};
use app_catalog::catalog::seed;
use app_catalog::prelude::*;

/// Builds a minimal listing for tests
pub fn listing(
    id: &str,
    name: &str,
    department: Department,
    category: Category,
    status: AccessStatus,
) -> AppListing {
    AppListing {
        id: AppId::new(id).unwrap(),
        name: name.to_string(),
        description: format!("{} for teams", name),
        full_description: format!("{} is used across the company.", name),
        icon: "📦".to_string(),
        category,
        department,
        rating: 4.0,
        reviews: 100,
        status,
        features: vec!["Sharing".to_string()],
        screenshots: vec![],
        popularity: 80,
        it_approved: true,
    }
}

/// Mock CatalogRepository with configurable listings.
///
/// Bundles, stats, analytics and reviews come from the seed set.
pub struct MockCatalogRepository {
    pub apps: Vec<AppListing>,
    pub should_fail: bool,
}

impl MockCatalogRepository {
    pub fn new() -> Self {
        Self {
            apps: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_app(mut self, app: AppListing) -> Self {
        self.apps.push(app);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            apps: Vec::new(),
            should_fail: true,
        }
    }
}

impl Default for MockCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for MockCatalogRepository {
    fn list_apps(&self) -> Result<Vec<AppListing>> {
        if self.should_fail {
            anyhow::bail!("Mock catalog repository failure");
        }
        Ok(self.apps.clone())
    }

    fn list_bundles(&self) -> Result<Vec<AppBundle>> {
        Ok(seed::seed_bundles())
    }

    fn bundle_stats(&self) -> Result<BundleStats> {
        Ok(seed::seed_bundle_stats())
    }

    fn analytics(&self) -> Result<AnalyticsSnapshot> {
        Ok(seed::seed_analytics())
    }

    fn reviews_for(&self, _id: &AppId) -> Result<Vec<Review>> {
        Ok(seed::seed_reviews())
    }
}
