//! Application State — zentrale Datenhaltung.

mod app_state;
mod editor;
mod layout;
mod ui;

pub use app_state::AppState;
pub use editor::{DrawMode, EditorPhase, EditorState};
pub use layout::LayoutState;
pub use ui::{TransientWarning, UiState};
