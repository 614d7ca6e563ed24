//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::Path;

/// Übernimmt neue Optionen für die laufende Sitzung.
pub fn apply(state: &mut AppState, options: EditorOptions) {
    state.options = options;
    log::info!("Optionen übernommen");
}

/// Speichert die aktuellen Optionen als TOML.
pub fn save(state: &AppState, path: &Path) -> anyhow::Result<()> {
    state.options.save_to_file(path)
}
