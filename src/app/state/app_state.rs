use crate::app::playback::PlaybackState;
use crate::app::CommandLog;
use crate::shared::EditorOptions;

use super::{DrawMode, EditorState, LayoutState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Gezeichnete Pfade und Kamera-Ziele
    pub layout: LayoutState,
    /// Modus, Phase, Auswahl, Hover
    pub editor: EditorState,
    /// Wiedergabe (Fahrzeuge, Güter, Kamera)
    pub playback: PlaybackState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen der Sitzung
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            layout: LayoutState::new(),
            editor: EditorState::new(),
            playback: PlaybackState::default(),
            ui: UiState::new(),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Aktiver Zeichenmodus
    pub fn mode(&self) -> DrawMode {
        self.editor.mode
    }

    /// `true`, wenn der Pfad im aktiven Modus Punkte hat
    pub fn has_active_draft(&self) -> bool {
        self.layout
            .draft(self.editor.mode)
            .is_some_and(|p| !p.is_empty())
    }

    /// Anzahl fertiger Förderbänder (für Status-Anzeige)
    pub fn conveyor_count(&self) -> usize {
        self.layout.conveyors.len()
    }

    /// Anzahl fertiger Fahrzeug-Pfade (für Status-Anzeige)
    pub fn vehicle_count(&self) -> usize {
        self.layout.vehicles.len()
    }
}
