use crate::catalog::domain::AppListing;
use serde::Serialize;

/// Every screen the catalog can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    Catalog,
    AppDetails,
    MyApps,
    RequestFlow,
    Analytics,
    Bundles,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Catalog => "App Catalog",
            Screen::AppDetails => "App Details",
            Screen::MyApps => "My Apps",
            Screen::RequestFlow => "Request Access",
            Screen::Analytics => "Analytics",
            Screen::Bundles => "App Bundles",
        }
    }

    /// Subtitle shown under the title on tab-level screens
    pub fn tagline(self) -> Option<&'static str> {
        match self {
            Screen::Catalog => Some("Discover and manage your apps"),
            Screen::Analytics => Some("Track usage and app performance"),
            Screen::Bundles => Some("Pre-configured app collections"),
            _ => None,
        }
    }

    /// Only the screens stacked on top of the catalog have a back control
    pub fn has_back(self) -> bool {
        matches!(self, Screen::AppDetails | Screen::RequestFlow)
    }

    /// Screens that render the selected app
    pub fn needs_selection(self) -> bool {
        self.has_back()
    }
}

/// Bottom tab bar destinations. Only these four screens can be reached
/// directly; details and the request flow need a selected app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    Catalog,
    Bundles,
    Analytics,
    MyApps,
}

impl Tab {
    /// Tab bar order
    pub const ALL: [Tab; 4] = [Tab::Catalog, Tab::Bundles, Tab::Analytics, Tab::MyApps];

    pub fn screen(self) -> Screen {
        match self {
            Tab::Catalog => Screen::Catalog,
            Tab::Bundles => Screen::Bundles,
            Tab::Analytics => Screen::Analytics,
            Tab::MyApps => Screen::MyApps,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Catalog => "Catalog",
            Tab::Bundles => "Bundles",
            Tab::Analytics => "Analytics",
            Tab::MyApps => "My Apps",
        }
    }
}

/// Screen router state: the current screen and the selected app.
///
/// Fields are private so the selection invariant holds: the details and
/// request screens can only be entered together with an app.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    current: Screen,
    selected: Option<AppListing>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: Screen::Catalog,
            selected: None,
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn selected(&self) -> Option<&AppListing> {
        self.selected.as_ref()
    }

    pub fn select_app(&mut self, app: AppListing) {
        self.selected = Some(app);
        self.current = Screen::AppDetails;
    }

    pub fn request_access(&mut self, app: AppListing) {
        self.selected = Some(app);
        self.current = Screen::RequestFlow;
    }

    /// Returns to the catalog from a stacked screen; a no-op on tab
    /// screens. The selection is kept.
    pub fn go_back(&mut self) -> bool {
        if self.current.has_back() {
            self.current = Screen::Catalog;
            true
        } else {
            false
        }
    }

    pub fn navigate(&mut self, tab: Tab) {
        self.current = tab.screen();
    }

    pub fn active_tab(&self) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.screen() == self.current)
    }
}
