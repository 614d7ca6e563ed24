//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{MotionSample, SmoothCurve, SnapResult};
use glam::Vec3;

/// Ein Förderband (fertig oder in Bearbeitung) mit Gütern.
#[derive(Debug, Clone)]
pub struct ConveyorScene {
    /// Geglättete Mittellinie; liefert auch die Krümmung je Belt-Vertex
    pub curve: SmoothCurve,
    /// Posen der Transportgüter (bereits auf Belt-Höhe)
    pub materials: Vec<MotionSample>,
    /// `true` für den Pfad in Bearbeitung
    pub is_draft: bool,
}

/// Fahrzeug mit aktueller, geglätteter Pose.
#[derive(Debug, Clone)]
pub struct VehicleScene {
    pub curve: SmoothCurve,
    pub pose: MotionSample,
}

/// Kamera-Ziel-Marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTargetMarker {
    pub id: u64,
    pub position: Vec3,
    pub selected: bool,
}

/// Vorschau: aktiver Pfad plus gesnappter Hover-Punkt.
#[derive(Debug, Clone, Default)]
pub struct PreviewScene {
    pub points: Vec<Vec3>,
    pub hover: Option<SnapResult>,
}

/// Kamera-Pose des Flythroughs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    pub conveyors: Vec<ConveyorScene>,
    pub vehicles: Vec<VehicleScene>,
    pub camera_targets: Vec<CameraTargetMarker>,
    pub preview: PreviewScene,
    /// Nur während der Wiedergabe gesetzt
    pub camera: Option<CameraPose>,
    /// Transiente Warnung (z. B. überlappende Bänder)
    pub warning: Option<String>,
    /// Laufzeit der Wiedergabe in Sekunden
    pub time: f32,
    /// Laufzeit-Optionen für Farben, Breiten, Abtastung
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob die Szene überhaupt Geometrie enthält.
    pub fn has_geometry(&self) -> bool {
        !self.conveyors.is_empty()
            || !self.vehicles.is_empty()
            || !self.camera_targets.is_empty()
            || self.preview.points.len() >= 2
    }
}
