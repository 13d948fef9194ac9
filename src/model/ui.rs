//! UI state - errors and persistence status surfaced to the host

/// Transient status the host may show (or ignore)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Last error absorbed by the update layer
    pub last_error: Option<String>,
    /// Last failed layout write, cleared by the next successful one
    pub last_persist_error: Option<String>,
    /// Set once `AppMsg::Teardown` has run
    pub torn_down: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an absorbed error
    pub fn record_error(&mut self, error: impl ToString) {
        self.last_error = Some(error.to_string());
    }
}
