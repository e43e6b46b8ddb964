// Application state management
// Contains the idea being edited and UI preferences

use product_scout_backend::research::RequestState;

/// Main application state
/// Request state lives in the orchestrator; this holds what the user is editing
#[derive(Debug, Clone)]
pub struct AppState {
    /// Product idea text in the input box
    pub idea: String,
    /// UI state preferences
    pub ui_state: UiState,
}

/// UI-specific state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether the dark theme is active
    pub dark_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            idea: String::new(),
            ui_state: UiState::default(),
        }
    }
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the Research button should be enabled
    /// Disabled while a request is in flight or when the idea is blank
    pub fn can_submit(&self, request: &RequestState) -> bool {
        !request.is_loading() && !self.idea.trim().is_empty()
    }

    /// Whether the input box accepts edits
    pub fn input_enabled(&self, request: &RequestState) -> bool {
        !request.is_loading()
    }
}

/// Which main view to show for a request state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainView {
    /// Nothing submitted yet
    Welcome,
    /// Skeleton cards while loading
    Skeleton,
    /// Error banner only
    Error,
    /// Six result cards
    Report,
}

impl MainView {
    /// Pick the view for the current request state
    pub fn for_state(request: &RequestState) -> Self {
        match request {
            RequestState::Idle => MainView::Welcome,
            RequestState::Loading => MainView::Skeleton,
            RequestState::Failure { .. } => MainView::Error,
            RequestState::Success(_) => MainView::Report,
        }
    }
}
