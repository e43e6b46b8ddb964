// State management module
// Handles the edited idea and UI state

pub mod app_state;

pub use app_state::{AppState, MainView};
