//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod playback;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Layout, Editor, Wiedergabe).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, EditorKey};
pub use playback::{PlaybackScene, PlaybackState};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, DrawMode, EditorPhase, EditorState, LayoutState, UiState};
