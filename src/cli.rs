use app_catalog::application::dto::OutputFormat;
use app_catalog::application::request_workflow::WorkflowExit;
use app_catalog::application::store::Action;
use app_catalog::catalog::domain::{
    AppId, Category, Department, ExpectedUsers, ItApprovalTag, PopularityTag, RequestForm, Role,
    StatusFilter, Urgency,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse the company app catalog and request access from the terminal
#[derive(Parser, Debug)]
#[command(name = "app-catalog")]
#[command(version)]
#[command(
    about = "Browse the company app catalog and request access from the terminal",
    long_about = None
)]
pub struct Args {
    /// Output format: json or markdown (default: markdown)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Path to a config file (default: ./app-catalog.config.yml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse and filter the catalog
    Catalog(CatalogArgs),
    /// Show one app
    Details {
        /// App id, as listed by the catalog command
        app_id: AppId,
    },
    /// Show granted, pending and suggested apps
    MyApps,
    /// Show usage analytics
    Analytics,
    /// Show curated app bundles
    Bundles,
    /// Run the request-access workflow for one app
    Request(RequestArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct CatalogArgs {
    /// Case-insensitive text matched against name and description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Owning department; company-wide apps always match.
    /// Can be specified multiple times
    #[arg(long = "department", value_name = "DEPARTMENT")]
    pub departments: Vec<Department>,

    /// Viewer role (recorded only; listings carry no role data)
    #[arg(long = "role", value_name = "ROLE")]
    pub roles: Vec<Role>,

    /// Category, e.g. "Project Management" or project-management
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<Category>,

    /// Popularity tag: most-popular, trending or new-apps
    #[arg(long = "popularity", value_name = "TAG")]
    pub popularity: Vec<PopularityTag>,

    /// IT approval tag: it-approved, pending-approval or not-required
    #[arg(long = "it-approval", value_name = "TAG")]
    pub it_approval: Vec<ItApprovalTag>,

    /// Access status: all, available, pending or granted
    #[arg(long)]
    pub status: Option<StatusFilter>,
}

impl CatalogArgs {
    /// Converts the flags into store actions.
    ///
    /// Repeated values are passed once, since toggling twice would
    /// cancel the selection out.
    pub fn into_actions(self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(query) = self.search.filter(|q| !q.is_empty()) {
            actions.push(Action::Search(query));
        }
        push_toggles(&mut actions, self.departments, Action::ToggleDepartment);
        push_toggles(&mut actions, self.roles, Action::ToggleRole);
        push_toggles(&mut actions, self.categories, Action::ToggleCategory);
        push_toggles(&mut actions, self.popularity, Action::TogglePopularity);
        push_toggles(&mut actions, self.it_approval, Action::ToggleItApproval);
        if let Some(status) = self.status {
            actions.push(Action::SetStatus(status));
        }
        actions
    }
}

fn push_toggles<T: PartialEq>(actions: &mut Vec<Action>, values: Vec<T>, action: fn(T) -> Action) {
    let mut seen: Vec<T> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    actions.extend(seen.into_iter().map(action));
}

#[derive(clap::Args, Debug)]
pub struct RequestArgs {
    /// App id, as listed by the catalog command
    pub app_id: AppId,

    /// Why you need the app (required)
    #[arg(short, long, default_value = "")]
    pub justification: String,

    /// Urgency: low, medium, high or critical
    #[arg(short, long, default_value_t = Urgency::Medium)]
    pub urgency: Urgency,

    /// Project the app is needed for
    #[arg(short, long, default_value = "")]
    pub project: String,

    /// Expected number of users: 1-5, 6-10, 11-25 or 25+
    #[arg(long, default_value_t = ExpectedUsers::UpToFive)]
    pub expected_users: ExpectedUsers,

    /// Requesting department: Engineering, Product, Design, Marketing,
    /// Sales, HR or Finance (default: Engineering)
    #[arg(long)]
    pub department: Option<Department>,

    /// Anything else IT should know
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Screen to open after submission: my-apps or catalog
    #[arg(long = "go-to", default_value = "my-apps", value_name = "SCREEN")]
    pub go_to: WorkflowExit,
}

impl RequestArgs {
    pub fn form(&self) -> RequestForm {
        let mut form = RequestForm {
            business_justification: self.justification.clone(),
            urgency: self.urgency,
            project_name: self.project.clone(),
            expected_users: self.expected_users,
            additional_notes: self.notes.clone(),
            ..RequestForm::default()
        };
        if let Some(department) = self.department {
            form.department = department;
        }
        form
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
