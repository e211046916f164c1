use crate::application::read_models::ScreenView;
use crate::ports::outbound::ScreenFormatter;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

/// Name of the tool recorded in every JSON document
const TOOL_NAME: &str = "app-catalog";

#[derive(Debug, Serialize)]
struct ScreenDocument<'a> {
    tool: Tool,
    #[serde(flatten)]
    view: &'a ScreenView,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

/// JsonFormatter adapter for rendering a screen as pretty-printed JSON
///
/// This adapter implements the ScreenFormatter port. The document is the
/// screen read model with a `tool` block added at the top.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenFormatter for JsonFormatter {
    fn format(&self, view: &ScreenView) -> Result<String> {
        let document = ScreenDocument {
            tool: Tool {
                name: TOOL_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            view,
        };
        let mut json =
            serde_json::to_string_pretty(&document).context("Failed to serialize screen to JSON")?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::navigation::{Screen, Tab};
    use crate::application::read_models::{ScreenBody, ScreenViewBuilder};
    use crate::catalog::domain::{FilterCriteria, UserProfile};
    use crate::catalog::seed::seed_apps;
    use serde_json::Value;

    fn catalog_json(query: &str) -> Value {
        let user = UserProfile::default();
        let view = ScreenViewBuilder::assemble(
            Screen::Catalog,
            Some(Tab::Catalog),
            &user,
            ScreenBody::Catalog(ScreenViewBuilder::catalog(
                &seed_apps(),
                query,
                &FilterCriteria::new(),
                &user,
            )),
        );
        let output = JsonFormatter::new().format(&view).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_document_shape() {
        let json = catalog_json("");
        assert_eq!(json["tool"]["name"], "app-catalog");
        assert_eq!(json["screen"], "catalog");
        assert_eq!(json["header"]["title"], "App Catalog");
        assert_eq!(json["body"]["kind"], "catalog");
        assert_eq!(json["body"]["resultsHeading"], "All Apps");
        assert_eq!(json["body"]["results"].as_array().unwrap().len(), 10);
        assert_eq!(json["tabs"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_search_hides_sections_as_null() {
        let json = catalog_json("figma");
        assert!(json["body"]["recommended"].is_null());
        assert_eq!(json["body"]["results"][0]["name"], "Figma");
        assert_eq!(json["body"]["results"][0]["status"], "Available");
        assert_eq!(json["body"]["results"][0]["id"], "2");
    }
}
