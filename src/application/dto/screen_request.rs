use crate::application::store::Action;

/// ScreenRequest - Request DTO for the show-screen use case
///
/// Holds the actions to replay on the store before the current screen
/// is rendered, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenRequest {
    pub actions: Vec<Action>,
}

impl ScreenRequest {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}
