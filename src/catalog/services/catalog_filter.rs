use crate::catalog::domain::filter_criteria::{MOST_POPULAR_THRESHOLD, TRENDING_THRESHOLD};
use crate::catalog::domain::{AccessStatus, AppListing, Department, FilterCriteria};

/// Number of cards in the "Recommended for You" strip
pub const RECOMMENDED_LIMIT: usize = 3;

/// Number of cards in the "Popular Apps" grid
pub const POPULAR_LIMIT: usize = 4;

/// Number of cards in the "Suggested for You" list on My Apps
pub const SUGGESTED_LIMIT: usize = 4;

/// CatalogFilter - Narrows the catalog by search text and filter criteria
///
/// Every predicate must hold for a listing to be kept. The result keeps
/// the input order; nothing is ranked or sorted.
#[derive(Debug, Clone)]
pub struct CatalogFilter<'a> {
    query: &'a str,
    criteria: &'a FilterCriteria,
}

impl<'a> CatalogFilter<'a> {
    pub fn new(query: &'a str, criteria: &'a FilterCriteria) -> Self {
        Self { query, criteria }
    }

    /// Checks a single listing against the query and every applied criterion
    pub fn matches(&self, app: &AppListing) -> bool {
        app.matches_text(self.query) && self.criteria.matches(app)
    }

    /// Filters apps, returning the matching listings in input order
    pub fn filter(&self, apps: &[AppListing]) -> Vec<AppListing> {
        apps.iter().filter(|app| self.matches(app)).cloned().collect()
    }
}

/// Convenience wrapper around [`CatalogFilter::filter`]
pub fn filter(apps: &[AppListing], query: &str, criteria: &FilterCriteria) -> Vec<AppListing> {
    CatalogFilter::new(query, criteria).filter(apps)
}

/// First matches from `apps`, stopping after `limit`
fn take_matching<F>(apps: &[AppListing], limit: usize, predicate: F) -> Vec<AppListing>
where
    F: Fn(&AppListing) -> bool,
{
    apps.iter()
        .filter(|app| predicate(app))
        .take(limit)
        .cloned()
        .collect()
}

/// Apps owned by the viewer's department, company-wide apps and very
/// popular apps, first [`RECOMMENDED_LIMIT`] only.
pub fn recommended(apps: &[AppListing], user_department: Department) -> Vec<AppListing> {
    take_matching(apps, RECOMMENDED_LIMIT, |app| {
        app.department.serves(user_department) || app.popularity > MOST_POPULAR_THRESHOLD
    })
}

/// Apps above the trending threshold, first [`POPULAR_LIMIT`] only
pub fn popular(apps: &[AppListing]) -> Vec<AppListing> {
    take_matching(apps, POPULAR_LIMIT, |app| app.popularity > TRENDING_THRESHOLD)
}

/// Available, popular apps that belong to the viewer's department,
/// first [`SUGGESTED_LIMIT`] only.
pub fn suggested(apps: &[AppListing], user_department: Department) -> Vec<AppListing> {
    take_matching(apps, SUGGESTED_LIMIT, |app| {
        app.status == AccessStatus::Available
            && app.department.serves(user_department)
            && app.popularity > TRENDING_THRESHOLD
    })
}

pub fn with_status(apps: &[AppListing], status: AccessStatus) -> Vec<AppListing> {
    apps.iter()
        .filter(|app| app.status == status)
        .cloned()
        .collect()
}
