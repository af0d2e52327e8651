//! Persistent store for dashboard UI state

pub mod ui_state;

pub use ui_state::{JobTimer, Theme, UiState, UiStateStore};
