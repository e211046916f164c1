use super::app_listing::Department;
use serde::Serialize;

/// The person browsing the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub department: Department,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, department: Department) -> Self {
        Self {
            name: name.into(),
            department,
        }
    }

    /// First letter of the name, used as the avatar
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new("Ritika Bhadani", Department::Engineering)
    }
}
