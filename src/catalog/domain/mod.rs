mod label;

pub mod analytics;
pub mod app_listing;
pub mod bundle;
pub mod filter_criteria;
pub mod request_form;
pub mod review;
pub mod user_profile;

pub use analytics::{
    AnalyticsSnapshot, AppDownloads, DepartmentUsage, MonthlyDownloads, Trend, UsageMetric,
};
pub use app_listing::{AccessStatus, AppId, AppListing, Category, Department};
pub use bundle::{AppBundle, BundleApp, BundleStats};
pub use filter_criteria::{FilterCriteria, ItApprovalTag, PopularityTag, Role, StatusFilter};
pub use request_form::{ExpectedUsers, RequestForm, Urgency};
pub use review::Review;
pub use user_profile::UserProfile;
