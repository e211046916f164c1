use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// One headline metric card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetric {
    pub title: String,
    pub value: u32,
    pub subtitle: String,
    pub trend: Trend,
    /// Signed percentage, e.g. "+12%"
    pub trend_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyDownloads {
    pub month: String,
    pub downloads: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppDownloads {
    pub name: String,
    pub downloads: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentUsage {
    pub department: String,
    pub apps: u32,
    /// Adoption percentage, 0 - 100
    pub usage: u8,
}

/// Fixed analytics figures. Nothing here is computed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub metrics: Vec<UsageMetric>,
    pub monthly_downloads: Vec<MonthlyDownloads>,
    pub downloads_this_month: u32,
    pub total_downloads: u32,
    pub top_apps: Vec<AppDownloads>,
    pub department_usage: Vec<DepartmentUsage>,
    pub insights: Vec<String>,
}

impl AnalyticsSnapshot {
    /// Scale used for the top-app bars
    pub const TOP_APP_SCALE: u32 = 250;
}

impl AppDownloads {
    /// Bar width as a share of [`AnalyticsSnapshot::TOP_APP_SCALE`], capped at 100
    pub fn share_percent(&self) -> u32 {
        (self.downloads * 100 / AnalyticsSnapshot::TOP_APP_SCALE).min(100)
    }
}
