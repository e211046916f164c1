use super::label::labelled_enum;
use crate::shared::{CatalogError, Result};
use serde::Serialize;

/// Maximum length for app identifiers
const MAX_APP_ID_LENGTH: usize = 64;

labelled_enum! {
    /// Whether the viewer can use, is waiting for, or may request an app
    pub enum AccessStatus("access status") {
        Available => "Available",
        Pending => "Pending",
        Granted => "Granted",
    }
}

labelled_enum! {
    /// Catalog category
    pub enum Category("category") {
        Communication => "Communication",
        Productivity => "Productivity",
        Design => "Design",
        Development => "Development",
        ProjectManagement => "Project Management",
        Sales => "Sales",
    }
}

labelled_enum! {
    /// Owning department. `All` marks company-wide apps and matches
    /// every department selection.
    pub enum Department("department") {
        All => "All",
        Engineering => "Engineering",
        Product => "Product",
        Design => "Design",
        Marketing => "Marketing",
        Sales => "Sales",
        Hr => "HR",
        Finance => "Finance",
        Operations => "Operations",
    }
}

impl Department {
    /// True for the company-wide wildcard
    pub fn is_company_wide(self) -> bool {
        self == Department::All
    }

    /// Departments a requester can file an access request for
    pub const REQUESTING: [Department; 7] = [
        Department::Engineering,
        Department::Product,
        Department::Design,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
    ];

    pub fn can_request(self) -> bool {
        Department::REQUESTING.contains(&self)
    }

    /// True when an app owned by `self` belongs to a viewer in `department`
    pub fn serves(self, department: Department) -> bool {
        self.is_company_wide() || self == department
    }
}

/// NewType wrapper for app identifiers with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let trimmed = id.trim();

        if trimmed.is_empty() {
            return Err(CatalogError::Validation {
                message: "App id cannot be empty".to_string(),
            }
            .into());
        }

        if trimmed.len() > MAX_APP_ID_LENGTH {
            return Err(CatalogError::Validation {
                message: format!(
                    "App id is too long ({} bytes). Maximum allowed: {} bytes",
                    trimmed.len(),
                    MAX_APP_ID_LENGTH
                ),
            }
            .into());
        }

        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CatalogError::Validation {
                message: format!(
                    "App id '{}' contains invalid characters. Only ASCII letters, digits, hyphens and underscores are allowed.",
                    trimmed
                ),
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    /// For identifiers from the built-in seed set, which are known to be valid
    pub(crate) fn from_seed(id: &'static str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AppId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AppId::new(s).map_err(|e| e.to_string())
    }
}

/// A catalog entry representing one integrable application.
///
/// Listings are created once from the seed set and never mutated;
/// requesting access is navigation only and leaves `status` untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppListing {
    pub id: AppId,
    pub name: String,
    pub description: String,
    pub full_description: String,
    pub icon: String,
    pub category: Category,
    pub department: Department,
    /// 0.0 - 5.0
    pub rating: f32,
    pub reviews: u32,
    pub status: AccessStatus,
    pub features: Vec<String>,
    pub screenshots: Vec<String>,
    /// 0 - 100
    pub popularity: u8,
    pub it_approved: bool,
}

impl AppListing {
    /// Case-insensitive substring match against name or short description.
    /// An empty query always matches.
    pub fn matches_text(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    pub fn is_requestable(&self) -> bool {
        self.status == AccessStatus::Available
    }

    /// Label of the primary action on the details screen
    pub fn primary_action(&self) -> &'static str {
        match self.status {
            AccessStatus::Available => "Request Access",
            AccessStatus::Pending => "Access Pending",
            AccessStatus::Granted => "Open App",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str, description: &str, status: AccessStatus) -> AppListing {
        AppListing {
            id: AppId::new("1").unwrap(),
            name: name.to_string(),
            description: description.to_string(),
            full_description: String::new(),
            icon: "💬".to_string(),
            category: Category::Communication,
            department: Department::All,
            rating: 4.5,
            reviews: 10,
            status,
            features: vec![],
            screenshots: vec![],
            popularity: 50,
            it_approved: true,
        }
    }

    #[test]
    fn test_app_id_new_valid() {
        let id = AppId::new(" 10 ").unwrap();
        assert_eq!(id.as_str(), "10");
        assert_eq!(format!("{}", id), "10");
    }

    #[test]
    fn test_app_id_new_empty() {
        assert!(AppId::new("   ").is_err());
    }

    #[test]
    fn test_app_id_new_invalid_characters() {
        let err = AppId::new("../etc").unwrap_err();
        assert!(err.to_string().contains("invalid characters"));
    }

    #[test]
    fn test_app_id_new_too_long() {
        assert!(AppId::new("a".repeat(MAX_APP_ID_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_app_id_from_str() {
        assert_eq!("slack-1".parse::<AppId>().unwrap().as_str(), "slack-1");
        let err = "a b".parse::<AppId>().unwrap_err();
        assert!(err.contains("invalid characters"));
    }

    #[test]
    fn test_category_parse_multi_word() {
        assert_eq!(
            "project management".parse::<Category>().unwrap(),
            Category::ProjectManagement
        );
        assert_eq!(Category::ProjectManagement.to_string(), "Project Management");
    }

    #[test]
    fn test_department_serves() {
        assert!(Department::All.serves(Department::Finance));
        assert!(Department::Engineering.serves(Department::Engineering));
        assert!(!Department::Marketing.serves(Department::Engineering));
    }

    #[test]
    fn test_only_concrete_departments_can_request() {
        assert!(Department::Hr.can_request());
        assert!(!Department::All.can_request());
        assert!(!Department::Operations.can_request());
    }

    #[test]
    fn test_matches_text_case_insensitive() {
        let app = listing("Slack", "Team communication and collaboration", AccessStatus::Granted);
        assert!(app.matches_text("SLACK"));
        assert!(app.matches_text("collab"));
        assert!(app.matches_text(""));
        assert!(!app.matches_text("zoom"));
    }

    #[test]
    fn test_primary_action_by_status() {
        assert_eq!(
            listing("a", "", AccessStatus::Available).primary_action(),
            "Request Access"
        );
        assert_eq!(
            listing("a", "", AccessStatus::Pending).primary_action(),
            "Access Pending"
        );
        assert_eq!(
            listing("a", "", AccessStatus::Granted).primary_action(),
            "Open App"
        );
    }

    #[test]
    fn test_is_requestable_only_when_available() {
        assert!(listing("a", "", AccessStatus::Available).is_requestable());
        assert!(!listing("a", "", AccessStatus::Pending).is_requestable());
        assert!(!listing("a", "", AccessStatus::Granted).is_requestable());
    }

    #[test]
    fn test_listing_serializes_camel_case() {
        let app = listing("Slack", "chat", AccessStatus::Granted);
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["itApproved"], true);
        assert_eq!(json["status"], "Granted");
        assert_eq!(json["department"], "All");
    }
}
