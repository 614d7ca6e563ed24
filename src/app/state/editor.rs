//! Editor-Zustand: Zeichenmodus, Phasen-Automat, Auswahl und Hover.

use crate::core::SnapResult;
use glam::Vec3;

/// Was ein Klick auf die Bodenebene erzeugt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Förderband-Wegpunkte
    #[default]
    Conveyor,
    /// Fahrzeug-Wegpunkte
    Vehicle,
    /// Kamera-Ziele
    CameraTarget,
}

/// Phase der Editier-Geste.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorPhase {
    /// Kein Pfad in Bearbeitung
    #[default]
    Idle,
    /// Mindestens ein Wegpunkt im aktiven Pfad
    Drawing,
    /// Kamera-Ziel wird gezogen
    DraggingTarget { target_id: u64, origin: Vec3 },
}

impl EditorPhase {
    /// Nach dem Anhängen eines Wegpunkts.
    pub fn on_waypoint_added(self) -> Self {
        match self {
            EditorPhase::Idle | EditorPhase::Drawing => EditorPhase::Drawing,
            drag @ EditorPhase::DraggingTarget { .. } => drag,
        }
    }

    /// Nach Enter/Escape oder Finish-Button.
    pub fn on_path_finished(self) -> Self {
        match self {
            EditorPhase::Drawing => EditorPhase::Idle,
            other => other,
        }
    }

    /// Ziehen eines Kamera-Ziels beginnt.
    pub fn on_drag_started(self, target_id: u64, origin: Vec3) -> Self {
        EditorPhase::DraggingTarget { target_id, origin }
    }

    /// Ziehen endet; zurück in die Phase des aktiven Pfads.
    pub fn on_drag_ended(self, draft_active: bool) -> Self {
        match self {
            EditorPhase::DraggingTarget { .. } if draft_active => EditorPhase::Drawing,
            EditorPhase::DraggingTarget { .. } => EditorPhase::Idle,
            other => other,
        }
    }

    /// Phase nach Moduswechsel oder Clear All.
    pub fn on_reset(self, draft_active: bool) -> Self {
        if draft_active {
            EditorPhase::Drawing
        } else {
            EditorPhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, EditorPhase::DraggingTarget { .. })
    }

    /// ID und Startposition des gezogenen Ziels.
    pub fn dragged_target(&self) -> Option<(u64, Vec3)> {
        match *self {
            EditorPhase::DraggingTarget { target_id, origin } => Some((target_id, origin)),
            _ => None,
        }
    }
}

/// Zustand der Editier-Interaktion.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub mode: DrawMode,
    pub phase: EditorPhase,
    /// Ausgewähltes Kamera-Ziel (bleibt nach dem Loslassen erhalten)
    pub selected_target: Option<u64>,
    /// Ctrl gedrückt: Achsen-Lock beim Ziehen
    pub ctrl_held: bool,
    /// Letzte gesnappte Hover-Position
    pub hover: Option<SnapResult>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }
}
