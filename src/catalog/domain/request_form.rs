use super::app_listing::Department;
use super::label::labelled_enum;
use crate::shared::{CatalogError, Result};
use serde::Serialize;

labelled_enum! {
    pub enum Urgency("urgency") {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

impl Default for Urgency {
    fn default() -> Self {
        Urgency::Medium
    }
}

labelled_enum! {
    /// Bucketed number of people who will use the app
    pub enum ExpectedUsers("expected users") {
        UpToFive => "1-5",
        UpToTen => "6-10",
        UpToTwentyFive => "11-25",
        MoreThanTwentyFive => "25+",
    }
}

impl Default for ExpectedUsers {
    fn default() -> Self {
        ExpectedUsers::UpToFive
    }
}

/// Fields collected by the request-access form.
///
/// Created fresh for every request and dropped with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestForm {
    pub business_justification: String,
    pub urgency: Urgency,
    pub project_name: String,
    pub expected_users: ExpectedUsers,
    pub department: Department,
    pub additional_notes: String,
}

impl Default for RequestForm {
    fn default() -> Self {
        Self {
            business_justification: String::new(),
            urgency: Urgency::default(),
            project_name: String::new(),
            expected_users: ExpectedUsers::default(),
            department: Department::Engineering,
            additional_notes: String::new(),
        }
    }
}

impl RequestForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submission is enabled only with a non-blank justification
    pub fn can_submit(&self) -> bool {
        !self.business_justification.trim().is_empty() && self.department.can_request()
    }

    pub fn validate(&self) -> Result<()> {
        if self.business_justification.trim().is_empty() {
            return Err(CatalogError::Validation {
                message: "Business justification is required".to_string(),
            }
            .into());
        }
        if !self.department.can_request() {
            let allowed: Vec<&str> = Department::REQUESTING.iter().map(|d| d.label()).collect();
            return Err(CatalogError::Validation {
                message: format!(
                    "Department '{}' cannot request access. Choose one of: {}",
                    self.department,
                    allowed.join(", ")
                ),
            }
            .into());
        }
        Ok(())
    }
}
