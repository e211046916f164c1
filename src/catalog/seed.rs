//! Fixed data the catalog starts from.
//!
//! Nothing here changes at runtime; repositories hand out clones.

use crate::catalog::domain::{
    AccessStatus, AnalyticsSnapshot, AppBundle, AppDownloads, AppId, AppListing, BundleApp,
    BundleStats, Category, Department, DepartmentUsage, MonthlyDownloads, Review, Trend,
    UsageMetric,
};

const SCREENSHOTS: [&str; 2] = ["screenshot1.jpg", "screenshot2.jpg"];

/// Notes shown under the request form
pub const IT_REVIEW_NOTES: [&str; 3] = [
    "This app requires admin approval due to data access permissions",
    "IT security review typically takes 2-3 business days",
    "You'll receive email notifications about your request status",
];

/// Shown on the success step
pub const EXPECTED_APPROVAL_TIME: &str = "2-3 business days";

struct ListingSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    full_description: &'static str,
    icon: &'static str,
    category: Category,
    department: Department,
    rating: f32,
    reviews: u32,
    status: AccessStatus,
    features: [&'static str; 4],
    popularity: u8,
    it_approved: bool,
}

impl From<ListingSeed> for AppListing {
    fn from(seed: ListingSeed) -> Self {
        AppListing {
            id: AppId::from_seed(seed.id),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            full_description: seed.full_description.to_string(),
            icon: seed.icon.to_string(),
            category: seed.category,
            department: seed.department,
            rating: seed.rating,
            reviews: seed.reviews,
            status: seed.status,
            features: seed.features.iter().map(|f| f.to_string()).collect(),
            screenshots: SCREENSHOTS.iter().map(|s| s.to_string()).collect(),
            popularity: seed.popularity,
            it_approved: seed.it_approved,
        }
    }
}

/// The ten catalog listings, in display order
pub fn seed_apps() -> Vec<AppListing> {
    vec![
        ListingSeed {
            id: "1",
            name: "Slack",
            description: "Team communication and collaboration",
            full_description: "Slack is a business communication platform offering many IRC-style features, including persistent chat rooms organized by topic, private groups, and direct messaging.",
            icon: "💬",
            category: Category::Communication,
            department: Department::All,
            rating: 4.5,
            reviews: 1250,
            status: AccessStatus::Granted,
            features: ["Real-time messaging", "File sharing", "Video calls", "Integrations"],
            popularity: 95,
            it_approved: true,
        },
        ListingSeed {
            id: "2",
            name: "Figma",
            description: "Collaborative design and prototyping tool",
            full_description: "Figma is a vector graphics editor and primarily web-based prototyping tool, with additional offline features enabled by desktop applications.",
            icon: "🎨",
            category: Category::Design,
            department: Department::Engineering,
            rating: 4.7,
            reviews: 890,
            status: AccessStatus::Available,
            features: ["Real-time collaboration", "Vector editing", "Prototyping", "Design systems"],
            popularity: 82,
            it_approved: true,
        },
        ListingSeed {
            id: "3",
            name: "Jira",
            description: "Issue tracking and project management tool",
            full_description: "Jira is a proprietary issue tracking product developed by Atlassian that allows bug tracking and agile project management.",
            icon: "📊",
            category: Category::ProjectManagement,
            department: Department::Engineering,
            rating: 4.2,
            reviews: 654,
            status: AccessStatus::Available,
            features: ["Issue tracking", "Agile boards", "Reporting", "Workflow automation"],
            popularity: 79,
            it_approved: true,
        },
        ListingSeed {
            id: "4",
            name: "GitHub",
            description: "Code hosting and version control platform",
            full_description: "GitHub is a provider of Internet hosting for software development and version control using Git. It offers distributed version control and source code management functionality.",
            icon: "💻",
            category: Category::Development,
            department: Department::Engineering,
            rating: 4.6,
            reviews: 743,
            status: AccessStatus::Granted,
            features: ["Version control", "Code collaboration", "Issue tracking", "CI/CD"],
            popularity: 92,
            it_approved: true,
        },
        ListingSeed {
            id: "5",
            name: "Linear",
            description: "Modern issue tracking and project management",
            full_description: "Linear is a purpose-built tool for modern software development, offering fast issue tracking and project management.",
            icon: "📈",
            category: Category::ProjectManagement,
            department: Department::Engineering,
            rating: 4.8,
            reviews: 234,
            status: AccessStatus::Available,
            features: ["Fast issue tracking", "Sprint planning", "Roadmaps", "Integrations"],
            popularity: 85,
            it_approved: true,
        },
        ListingSeed {
            id: "6",
            name: "Zoom",
            description: "Video conferencing solution",
            full_description: "Zoom is a communications technology company that provides video telephony and online chat services through a cloud-based peer-to-peer software platform.",
            icon: "📹",
            category: Category::Communication,
            department: Department::All,
            rating: 4.3,
            reviews: 1120,
            status: AccessStatus::Available,
            features: ["HD video meetings", "Screen sharing", "Recording", "Breakout rooms"],
            popularity: 88,
            it_approved: true,
        },
        ListingSeed {
            id: "7",
            name: "Notion",
            description: "All-in-one workspace",
            full_description: "Notion is a note-taking software and collaboration platform with markdown support that also integrates tasks, wikis, and databases.",
            icon: "📝",
            category: Category::Productivity,
            department: Department::All,
            rating: 4.4,
            reviews: 987,
            status: AccessStatus::Available,
            features: ["Note-taking", "Database management", "Task tracking", "Wiki creation"],
            popularity: 76,
            it_approved: true,
        },
        ListingSeed {
            id: "8",
            name: "Asana",
            description: "Team project management",
            full_description: "Asana is a web and mobile application designed to help teams organize, track, and manage their work.",
            icon: "✅",
            category: Category::ProjectManagement,
            department: Department::All,
            rating: 4.3,
            reviews: 567,
            status: AccessStatus::Available,
            features: ["Task management", "Team collaboration", "Timeline view", "Custom fields"],
            popularity: 73,
            it_approved: true,
        },
        ListingSeed {
            id: "9",
            name: "Adobe Creative Cloud",
            description: "Creative software suite",
            full_description: "Adobe Creative Cloud is a set of applications and services from Adobe Inc. that gives subscribers access to a collection of software.",
            icon: "🎭",
            category: Category::Design,
            department: Department::Marketing,
            rating: 4.5,
            reviews: 432,
            status: AccessStatus::Pending,
            features: ["Photoshop", "Illustrator", "InDesign", "After Effects"],
            popularity: 68,
            it_approved: false,
        },
        ListingSeed {
            id: "10",
            name: "Salesforce",
            description: "CRM and sales platform",
            full_description: "Salesforce is a cloud-based software company that provides customer-relationship management service.",
            icon: "☁️",
            category: Category::Sales,
            department: Department::Sales,
            rating: 4.2,
            reviews: 890,
            status: AccessStatus::Available,
            features: ["Lead management", "Sales tracking", "Analytics", "Automation"],
            popularity: 81,
            it_approved: true,
        },
    ]
    .into_iter()
    .map(AppListing::from)
    .collect()
}

fn bundle(
    id: &str,
    name: &str,
    description: &str,
    setup_time: &str,
    approved: u32,
    recommended_for: [&str; 4],
    included_apps: &[(&str, &str)],
) -> AppBundle {
    AppBundle {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        setup_time: setup_time.to_string(),
        approved,
        recommended_for: recommended_for.iter().map(|r| r.to_string()).collect(),
        included_apps: included_apps
            .iter()
            .map(|(name, icon)| BundleApp::new(name, icon))
            .collect(),
    }
}

pub fn seed_bundles() -> Vec<AppBundle> {
    vec![
        bundle(
            "engineering",
            "Engineering Essentials",
            "Core development tools and collaboration apps for engineering teams.",
            "15 minutes",
            4,
            ["Software Engineer", "DevOps Engineer", "QA Engineer", "Tech Lead"],
            &[
                ("GitHub", "💻"),
                ("Jira", "📊"),
                ("Slack", "💬"),
                ("Zoom", "📹"),
                ("Linear", "📈"),
                ("VS Code", "⚡"),
                ("Docker", "🐳"),
            ],
        ),
        bundle(
            "design",
            "Design & Creative",
            "Design tools and creative software for UI/UX designers and creative teams.",
            "10 minutes",
            11,
            ["UI/UX Designer", "Graphic Designer", "Product Designer", "Creative Director"],
            &[
                ("Figma", "🎨"),
                ("Adobe CC", "🎭"),
                ("Sketch", "✏️"),
                ("Notion", "📝"),
                ("Miro", "🔗"),
            ],
        ),
        bundle(
            "business",
            "Business & Operations",
            "Essential business tools for project management, communication, and productivity.",
            "12 minutes",
            4,
            ["Project Manager", "Business Analyst", "Operations Manager", "Team Lead"],
            &[
                ("Asana", "✅"),
                ("Slack", "💬"),
                ("Google Workspace", "📧"),
                ("Zoom", "📹"),
                ("Salesforce", "☁️"),
                ("Tableau", "📊"),
            ],
        ),
    ]
}

pub fn seed_bundle_stats() -> BundleStats {
    BundleStats {
        users_onboarded: "250+".to_string(),
        success_rate: "98%".to_string(),
        average_setup_time: "12min".to_string(),
    }
}

fn metric(title: &str, value: u32, subtitle: &str, trend_value: &str) -> UsageMetric {
    UsageMetric {
        title: title.to_string(),
        value,
        subtitle: subtitle.to_string(),
        trend: Trend::Up,
        trend_value: trend_value.to_string(),
    }
}

pub fn seed_analytics() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        metrics: vec![
            metric("Daily Active Users", 1250, "Average daily usage", "+12%"),
            metric("Weekly Active", 1400, "Users this week", "+8%"),
            metric("Monthly Active", 1500, "Total monthly users", "+15%"),
        ],
        monthly_downloads: [
            ("Jul", 28),
            ("Aug", 32),
            ("Sep", 28),
            ("Oct", 35),
            ("Nov", 39),
            ("Dec", 45),
        ]
        .iter()
        .map(|(month, downloads)| MonthlyDownloads {
            month: month.to_string(),
            downloads: *downloads,
        })
        .collect(),
        downloads_this_month: 45,
        total_downloads: 1580,
        top_apps: [
            ("Slack", 245),
            ("GitHub", 198),
            ("Figma", 167),
            ("Zoom", 142),
            ("Notion", 128),
        ]
        .iter()
        .map(|(name, downloads)| AppDownloads {
            name: name.to_string(),
            downloads: *downloads,
        })
        .collect(),
        department_usage: [
            ("Engineering", 12, 85),
            ("Design", 8, 72),
            ("Marketing", 6, 68),
            ("Sales", 5, 45),
            ("HR", 4, 38),
        ]
        .iter()
        .map(|(department, apps, usage)| DepartmentUsage {
            department: department.to_string(),
            apps: *apps,
            usage: *usage,
        })
        .collect(),
        insights: vec![
            "Engineering team has the highest app adoption rate at 85%".to_string(),
            "Slack remains the most popular app with 245 downloads".to_string(),
            "Overall app usage increased by 15% this month".to_string(),
            "3 new apps were approved for company-wide use".to_string(),
        ],
    }
}

pub fn seed_reviews() -> Vec<Review> {
    [
        ("1", "Priya Sharma", "Engineering", 5, "Excellent tool for team collaboration. Makes our daily standups much more efficient.", "2 days ago"),
        ("2", "Rahul Gupta", "Product", 4, "Great features and intuitive interface. Sometimes slow during peak hours.", "1 week ago"),
        ("3", "Ananya Patel", "Design", 5, "Perfect for our design team. The integration with other tools is seamless.", "2 weeks ago"),
        ("4", "Vikram Singh", "Marketing", 4, "Helpful for project management but has a learning curve for new users.", "3 weeks ago"),
    ]
    .iter()
    .map(|(id, user, department, rating, comment, date)| Review {
        id: id.to_string(),
        user: user.to_string(),
        department: department.to_string(),
        rating: *rating,
        comment: comment.to_string(),
        date: date.to_string(),
    })
    .collect()
}
