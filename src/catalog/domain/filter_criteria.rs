use super::app_listing::{AccessStatus, AppListing, Category, Department};
use super::label::labelled_enum;
use serde::Serialize;

/// Listings above this popularity count as "Most Popular"
pub const MOST_POPULAR_THRESHOLD: u8 = 85;

/// Listings above this popularity count as "Trending"
pub const TRENDING_THRESHOLD: u8 = 80;

/// Listings with fewer reviews than this count as "New Apps"
pub const NEW_APP_REVIEW_LIMIT: u32 = 500;

labelled_enum! {
    /// Job role of the viewer. Listings carry no role data, so role
    /// selections are recorded but never narrow the result.
    pub enum Role("role") {
        Developer => "Developer",
        Manager => "Manager",
        Analyst => "Analyst",
        Designer => "Designer",
        Admin => "Admin",
    }
}

labelled_enum! {
    pub enum PopularityTag("popularity tag") {
        MostPopular => "Most Popular",
        Trending => "Trending",
        NewApps => "New Apps",
    }
}

impl PopularityTag {
    pub fn matches(self, app: &AppListing) -> bool {
        match self {
            PopularityTag::MostPopular => app.popularity > MOST_POPULAR_THRESHOLD,
            PopularityTag::Trending => app.popularity > TRENDING_THRESHOLD,
            PopularityTag::NewApps => app.reviews < NEW_APP_REVIEW_LIMIT,
        }
    }
}

labelled_enum! {
    pub enum ItApprovalTag("IT approval tag") {
        ItApproved => "IT Approved",
        PendingApproval => "Pending Approval",
        NotRequired => "Not Required",
    }
}

impl ItApprovalTag {
    /// `Not Required` covers apps the viewer already holds.
    pub fn matches(self, app: &AppListing) -> bool {
        match self {
            ItApprovalTag::ItApproved => app.it_approved,
            ItApprovalTag::PendingApproval => !app.it_approved,
            ItApprovalTag::NotRequired => app.status == AccessStatus::Granted,
        }
    }
}

labelled_enum! {
    /// Access-status selector; `All` disables the status predicate
    pub enum StatusFilter("status") {
        All => "All",
        Available => "Available",
        Pending => "Pending",
        Granted => "Granted",
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl StatusFilter {
    pub fn matches(self, status: AccessStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Available => status == AccessStatus::Available,
            StatusFilter::Pending => status == AccessStatus::Pending,
            StatusFilter::Granted => status == AccessStatus::Granted,
        }
    }
}

impl From<AccessStatus> for StatusFilter {
    fn from(status: AccessStatus) -> Self {
        match status {
            AccessStatus::Available => StatusFilter::Available,
            AccessStatus::Pending => StatusFilter::Pending,
            AccessStatus::Granted => StatusFilter::Granted,
        }
    }
}

/// Filter selections of the catalog screen.
///
/// Each list behaves as a set: an empty list places no restriction,
/// toggling a present value removes it and toggling an absent value
/// appends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub departments: Vec<Department>,
    pub roles: Vec<Role>,
    pub categories: Vec<Category>,
    pub status: StatusFilter,
    pub popularity: Vec<PopularityTag>,
    pub it_approval: Vec<ItApprovalTag>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_department(&mut self, department: Department) {
        toggle(&mut self.departments, department);
    }

    pub fn toggle_role(&mut self, role: Role) {
        toggle(&mut self.roles, role);
    }

    pub fn toggle_category(&mut self, category: Category) {
        toggle(&mut self.categories, category);
    }

    pub fn toggle_popularity(&mut self, tag: PopularityTag) {
        toggle(&mut self.popularity, tag);
    }

    pub fn toggle_it_approval(&mut self, tag: ItApprovalTag) {
        toggle(&mut self.it_approval, tag);
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
    }

    /// Resets every selection to its default
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn has_role_selection(&self) -> bool {
        !self.roles.is_empty()
    }

    pub fn matches_department(&self, app: &AppListing) -> bool {
        self.departments.is_empty()
            || app.department.is_company_wide()
            || self.departments.contains(&app.department)
    }

    pub fn matches_category(&self, app: &AppListing) -> bool {
        self.categories.is_empty() || self.categories.contains(&app.category)
    }

    pub fn matches_status(&self, app: &AppListing) -> bool {
        self.status.matches(app.status)
    }

    pub fn matches_popularity(&self, app: &AppListing) -> bool {
        self.popularity.is_empty() || self.popularity.iter().any(|tag| tag.matches(app))
    }

    pub fn matches_it_approval(&self, app: &AppListing) -> bool {
        self.it_approval.is_empty() || self.it_approval.iter().any(|tag| tag.matches(app))
    }

    /// Conjunction of every applied predicate
    pub fn matches(&self, app: &AppListing) -> bool {
        self.matches_department(app)
            && self.matches_category(app)
            && self.matches_status(app)
            && self.matches_popularity(app)
            && self.matches_it_approval(app)
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(position) = values.iter().position(|v| *v == value) {
        values.remove(position);
    } else {
        values.push(value);
    }
}
