use serde::Serialize;

/// A colleague's review shown on the details screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub id: String,
    pub user: String,
    pub department: String,
    /// Whole stars, 1 - 5
    pub rating: u8,
    pub comment: String,
    /// Relative date as displayed, e.g. "2 days ago"
    pub date: String,
}
