use crate::app::state::DrawMode;
use crate::core::SnapResult;
use crate::shared::EditorOptions;
use glam::Vec3;
use std::path::PathBuf;

/// Mutierende Commands, die zentral vom Controller ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Zeichnen ===
    /// Gesnappte Hover-Position übernehmen
    UpdateHover { snap: SnapResult },
    /// Wegpunkt an den aktiven Pfad anhängen (mit Kollisionsprüfung)
    AddWaypoint { position: Vec3 },
    /// Aktiven Pfad einfrieren und neuen beginnen
    FinishPath,
    /// Zeichenmodus setzen
    SetDrawMode { mode: DrawMode },
    /// Layout komplett leeren
    ClearAll,

    // === Kamera-Ziele ===
    /// Neues Kamera-Ziel anlegen
    AddCameraTarget { position: Vec3 },
    /// Kamera-Ziel auswählen (None = Auswahl aufheben)
    SelectCameraTarget { target_id: Option<u64> },
    /// Ziehen eines Kamera-Ziels beginnen
    BeginTargetDrag { target_id: u64 },
    /// Kamera-Ziel verschieben
    MoveCameraTarget { target_id: u64, position: Vec3 },
    /// Ziehen beenden
    EndTargetDrag,
    /// Kamera-Ziel löschen
    DeleteCameraTarget { target_id: u64 },

    // === Eingabe-Modifikatoren ===
    /// Ctrl-Zustand für Achsen-Lock
    SetAxisLockModifier { held: bool },

    // === Wiedergabe ===
    /// Wiedergabe umschalten
    TogglePlayback,
    /// Frame weiterrechnen
    AdvanceFrame { dt: f32 },

    // === Optionen ===
    /// Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen speichern
    SaveOptions { path: PathBuf },
}

impl AppCommand {
    /// `true` für Commands, die Layout, Auswahl oder Optionen verändern.
    ///
    /// Hover, Frame-Ticks, Wiedergabe, Modifikatoren und Speichern zählen nicht
    /// dazu. Die übrigen Commands tragen bereits gesnappte Positionen und lassen
    /// sich deshalb ohne Eingabe-Kontext erneut ausführen.
    pub fn is_layout_edit(&self) -> bool {
        !matches!(
            self,
            AppCommand::UpdateHover { .. }
                | AppCommand::SetAxisLockModifier { .. }
                | AppCommand::TogglePlayback
                | AppCommand::AdvanceFrame { .. }
                | AppCommand::SaveOptions { .. }
        )
    }
}
