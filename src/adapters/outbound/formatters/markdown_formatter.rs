use crate::application::read_models::{
    AnalyticsView, AppCard, AppDetailsView, BundleCard, BundlesView, CatalogView, HeaderView,
    MyAppsView, RequestFlowView, ScreenBody, ScreenView, TabView,
};
use crate::catalog::domain::{FilterCriteria, StatusFilter, Trend};
use crate::ports::outbound::ScreenFormatter;
use crate::shared::Result;
use std::fmt::Display;

/// Markdown table header for app lists
const APP_TABLE_HEADER: &str = "| App | ID | Category | Department | Rating | Status |\n";

/// Markdown table separator line for app lists
const APP_TABLE_SEPARATOR: &str = "|-----|----|----------|------------|--------|--------|\n";

/// Widest star rating shown for a review
const MAX_STARS: usize = 5;

/// MarkdownFormatter adapter for rendering a screen as Markdown
///
/// This adapter implements the ScreenFormatter port. Every screen starts
/// with its title as a level-one heading and ends with the tab bar.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Formats a count with thousands separators, e.g. 1580 -> "1,580"
    fn group_thousands(value: u32) -> String {
        let digits = value.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        grouped
    }

    fn stars(rating: u8) -> String {
        let filled = usize::from(rating).min(MAX_STARS);
        format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_STARS - filled))
    }

    fn join<T: Display>(values: &[T]) -> String {
        values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, header: &HeaderView) {
        output.push_str(&format!("# {}\n\n", header.title));
        if let Some(tagline) = &header.tagline {
            output.push_str(&format!("_{}_\n\n", tagline));
        }
        if header.show_back {
            output.push_str("← Back to catalog\n\n");
        }
        output.push_str(&format!(
            "👤 **{}** ({})\n\n",
            header.user_name, header.user_initial
        ));
    }

    fn render_tabs(&self, output: &mut String, tabs: &[TabView]) {
        let labels: Vec<String> = tabs
            .iter()
            .map(|tab| {
                if tab.active {
                    format!("**[{}]**", tab.label)
                } else {
                    tab.label.clone()
                }
            })
            .collect();
        output.push_str("---\n\n");
        output.push_str(&labels.join(" · "));
        output.push('\n');
    }

    /// Renders an app table, or `empty` when there is nothing to list
    fn render_app_table(&self, output: &mut String, apps: &[AppCard], empty: &str) {
        if apps.is_empty() {
            output.push_str(&format!("{}\n\n", empty));
            return;
        }
        output.push_str(APP_TABLE_HEADER);
        output.push_str(APP_TABLE_SEPARATOR);
        for app in apps {
            output.push_str(&format!(
                "| {} {} | {} | {} | {} | {:.1} ({}) | {} |\n",
                app.icon,
                Self::escape_markdown_table_cell(&app.name),
                app.id,
                app.category,
                app.department,
                app.rating,
                Self::group_thousands(app.reviews),
                app.status
            ));
        }
        output.push('\n');
    }

    fn render_active_filters(&self, output: &mut String, criteria: &FilterCriteria) {
        let mut parts = Vec::new();
        if !criteria.departments.is_empty() {
            parts.push(format!("Department: {}", Self::join(&criteria.departments)));
        }
        if !criteria.roles.is_empty() {
            parts.push(format!("Role: {}", Self::join(&criteria.roles)));
        }
        if !criteria.categories.is_empty() {
            parts.push(format!("Category: {}", Self::join(&criteria.categories)));
        }
        if criteria.status != StatusFilter::All {
            parts.push(format!("Status: {}", criteria.status));
        }
        if !criteria.popularity.is_empty() {
            parts.push(format!("Popularity: {}", Self::join(&criteria.popularity)));
        }
        if !criteria.it_approval.is_empty() {
            parts.push(format!("IT Approval: {}", Self::join(&criteria.it_approval)));
        }
        output.push_str(&format!("**Filters:** {}\n\n", parts.join("; ")));
    }

    fn render_catalog(&self, output: &mut String, view: &CatalogView) {
        if !view.query.is_empty() {
            output.push_str(&format!("🔍 Search: `{}`\n\n", view.query));
        }
        if view.active_filters > 0 {
            self.render_active_filters(output, &view.criteria);
        }
        if !view.ignored_roles.is_empty() {
            output.push_str("> Role filters are recorded but do not narrow the list.\n\n");
        }
        if let Some(recommended) = &view.recommended {
            output.push_str("## Recommended for You\n\n");
            self.render_app_table(output, recommended, "No recommendations right now.");
        }
        if let Some(popular) = &view.popular {
            output.push_str("## Popular Apps\n\n");
            self.render_app_table(output, popular, "No popular apps match the filters.");
        }
        output.push_str(&format!("## {}\n\n", view.results_heading));
        self.render_app_table(
            output,
            &view.results,
            "No apps found. Try adjusting your search or filters.",
        );
    }

    fn render_app_details(&self, output: &mut String, view: &AppDetailsView) {
        let app = &view.app;
        output.push_str(&format!("## {} {}\n\n", app.icon, app.name));
        output.push_str(&format!(
            "{} · {} · ⭐ {:.1} ({} reviews)\n\n",
            app.category,
            app.department,
            app.rating,
            Self::group_thousands(app.reviews)
        ));
        let approval = if app.it_approved {
            "✅ IT Approved"
        } else {
            "⏳ Pending IT Approval"
        };
        output.push_str(&format!("**Status:** {} · {}\n\n", app.status, approval));
        output.push_str(&format!("**Action:** {}\n\n", view.primary_action));
        output.push_str(&format!("{}\n\n", app.full_description));

        output.push_str("### Features\n\n");
        for feature in &app.features {
            output.push_str(&format!("- {}\n", feature));
        }
        output.push('\n');

        output.push_str("### Adoption\n\n");
        output.push_str(&format!(
            "{}% of colleagues use {}\n\n",
            view.adoption_percent, app.name
        ));

        output.push_str("### Reviews\n\n");
        for review in &view.reviews {
            output.push_str(&format!(
                "**{}** ({}) {} · {}\n\n> {}\n\n",
                review.user,
                review.department,
                Self::stars(review.rating),
                review.date,
                review.comment
            ));
        }
    }

    fn render_my_apps(&self, output: &mut String, view: &MyAppsView) {
        output.push_str(&format!(
            "**Granted:** {} · **Pending:** {}\n\n",
            view.granted_count, view.pending_count
        ));
        output.push_str("## Your Apps\n\n");
        self.render_app_table(output, &view.granted, "You don't have access to any apps yet.");
        output.push_str("## Pending Requests\n\n");
        self.render_app_table(output, &view.pending, "No pending requests.");
        output.push_str("## Suggested for You\n\n");
        self.render_app_table(output, &view.suggested, "No suggestions right now.");
    }

    fn render_request_flow(&self, output: &mut String, view: &RequestFlowView) {
        match view {
            RequestFlowView::Form {
                app,
                form,
                can_submit,
                it_review_notes,
            } => {
                output.push_str(&format!("## Request access to {} {}\n\n", app.icon, app.name));
                let justification = if form.business_justification.trim().is_empty() {
                    "_(required)_".to_string()
                } else {
                    Self::escape_markdown_table_cell(&form.business_justification)
                };
                output.push_str("| Field | Value |\n|-------|-------|\n");
                output.push_str(&format!("| Business justification | {} |\n", justification));
                output.push_str(&format!("| Urgency | {} |\n", form.urgency));
                output.push_str(&format!(
                    "| Project | {} |\n",
                    Self::escape_markdown_table_cell(&form.project_name)
                ));
                output.push_str(&format!("| Expected users | {} |\n", form.expected_users));
                output.push_str(&format!("| Department | {} |\n", form.department));
                output.push_str(&format!(
                    "| Additional notes | {} |\n\n",
                    Self::escape_markdown_table_cell(&form.additional_notes)
                ));
                if *can_submit {
                    output.push_str("**Submit Request** is ready.\n\n");
                } else {
                    output.push_str(
                        "**Submit Request** is disabled until a business justification is entered.\n\n",
                    );
                }
                output.push_str("### IT Review Process\n\n");
                for note in it_review_notes {
                    output.push_str(&format!("- {}\n", note));
                }
                output.push('\n');
            }
            RequestFlowView::Confirmation { app, progress } => {
                output.push_str(&format!("## Submitting your request for {}\n\n", app.name));
                for line in progress {
                    output.push_str(&format!("⏳ {}\n", line));
                }
                output.push('\n');
            }
            RequestFlowView::Success { app, receipt } => {
                output.push_str("## ✅ Request Submitted\n\n");
                output.push_str(&format!("**Request ID:** {}\n\n", receipt.request_id));
                output.push_str(&format!("**App:** {} {}\n\n", app.icon, app.name));
                output.push_str(&format!(
                    "**Submitted:** {}\n\n",
                    receipt.submitted_at.format("%Y-%m-%d %H:%M UTC")
                ));
                output.push_str(&format!(
                    "**Expected approval:** {}\n\n",
                    receipt.expected_approval
                ));
            }
        }
    }

    fn render_bundle(&self, output: &mut String, bundle: &BundleCard, heading: &str) {
        output.push_str(&format!("{} {}\n\n", heading, bundle.name));
        output.push_str(&format!("{}\n\n", bundle.description));
        output.push_str(&format!(
            "⏱ {} · 📦 {} apps · 👥 {} approved\n\n",
            bundle.setup_time, bundle.apps_included, bundle.approved
        ));
        output.push_str(&format!(
            "Recommended for: {}\n\n",
            bundle.recommended_for.join(", ")
        ));
        let mut apps: Vec<String> = bundle
            .shown_apps
            .iter()
            .map(|app| format!("{} {}", app.icon, app.name))
            .collect();
        if bundle.more_apps > 0 {
            apps.push(format!("+{} more", bundle.more_apps));
        }
        output.push_str(&format!("Includes: {}\n\n", apps.join(", ")));
    }

    fn render_bundles(&self, output: &mut String, view: &BundlesView) {
        if let Some(recommended) = &view.recommended {
            output.push_str("## ⭐ Recommended for You\n\n");
            self.render_bundle(output, recommended, "###");
        }
        output.push_str("## All Bundles\n\n");
        for bundle in &view.bundles {
            self.render_bundle(output, bundle, "###");
        }
        output.push_str("## Onboarding Stats\n\n");
        output.push_str("| Users onboarded | Success rate | Avg. setup time |\n");
        output.push_str("|-----------------|--------------|-----------------|\n");
        output.push_str(&format!(
            "| {} | {} | {} |\n\n",
            view.stats.users_onboarded, view.stats.success_rate, view.stats.average_setup_time
        ));
    }

    fn render_analytics(&self, output: &mut String, view: &AnalyticsView) {
        output.push_str("## Usage\n\n");
        output.push_str("| Metric | Value | Trend | Note |\n");
        output.push_str("|--------|-------|-------|------|\n");
        for metric in &view.metrics {
            let arrow = match metric.trend {
                Trend::Up => "↑",
                Trend::Down => "↓",
            };
            output.push_str(&format!(
                "| {} | {} | {} {} | {} |\n",
                metric.title,
                Self::group_thousands(metric.value),
                arrow,
                metric.trend_value,
                metric.subtitle
            ));
        }
        output.push('\n');

        output.push_str("## Monthly Downloads\n\n");
        output.push_str("| Month | Downloads |\n|-------|-----------|\n");
        for month in &view.monthly_downloads {
            output.push_str(&format!("| {} | {} |\n", month.month, month.downloads));
        }
        output.push('\n');
        output.push_str(&format!(
            "Downloads this month: **{}** · Total downloads: **{}**\n\n",
            view.downloads_this_month,
            Self::group_thousands(view.total_downloads)
        ));

        output.push_str("## Top Apps\n\n");
        output.push_str("| App | Downloads | Share |\n|-----|-----------|-------|\n");
        for app in &view.top_apps {
            output.push_str(&format!(
                "| {} | {} | {}% |\n",
                app.name, app.downloads, app.share_percent
            ));
        }
        output.push('\n');

        output.push_str("## Department Usage\n\n");
        output.push_str("| Department | Apps | Usage |\n|------------|------|-------|\n");
        for usage in &view.department_usage {
            output.push_str(&format!(
                "| {} | {} | {}% |\n",
                usage.department, usage.apps, usage.usage
            ));
        }
        output.push('\n');

        output.push_str("## Insights\n\n");
        for insight in &view.insights {
            output.push_str(&format!("- {}\n", insight));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenFormatter for MarkdownFormatter {
    fn format(&self, view: &ScreenView) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &view.header);

        match &view.body {
            ScreenBody::Catalog(catalog) => self.render_catalog(&mut output, catalog),
            ScreenBody::AppDetails(details) => self.render_app_details(&mut output, details),
            ScreenBody::MyApps(my_apps) => self.render_my_apps(&mut output, my_apps),
            ScreenBody::RequestFlow(flow) => self.render_request_flow(&mut output, flow),
            ScreenBody::Analytics(analytics) => self.render_analytics(&mut output, analytics),
            ScreenBody::Bundles(bundles) => self.render_bundles(&mut output, bundles),
        }

        self.render_tabs(&mut output, &view.tabs);
        Ok(output)
    }
}
