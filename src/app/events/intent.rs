use crate::app::state::DrawMode;
use crate::shared::EditorOptions;
use glam::Vec3;
use std::path::PathBuf;

/// Tasten, die der Editor auswertet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Enter,
    Escape,
    Delete,
    Control,
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger über der Bodenebene bewegt
    PointerMoved { world_pos: Vec3 },
    /// Klick auf die Bodenebene
    PointerClicked { world_pos: Vec3 },
    /// Zeiger auf einem Kamera-Ziel gedrückt
    CameraTargetPressed { target_id: u64 },
    /// Zeiger bei gedrückter Taste bewegt
    PointerDragged { world_pos: Vec3 },
    /// Zeiger losgelassen
    PointerReleased,
    /// Taste gedrückt
    KeyPressed { key: EditorKey },
    /// Taste losgelassen
    KeyReleased { key: EditorKey },
    /// Zeichenmodus wechseln
    SetDrawModeRequested { mode: DrawMode },
    /// Aktiven Pfad abschließen
    FinishPathRequested,
    /// Ausgewähltes Kamera-Ziel löschen
    DeleteSelectedTargetRequested,
    /// Alle Pfade und Kamera-Ziele entfernen
    ClearAllRequested,
    /// Wiedergabe starten/anhalten
    TogglePlaybackRequested,
    /// Ein Frame ist vergangen
    FrameAdvanced { dt: f32 },
    /// Optionen wurden geändert
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen in Datei speichern
    SaveOptionsRequested { path: PathBuf },
}
