//! Zentrale Konfiguration für den Site-Layout-Editor.
//!
//! `EditorOptions` enthält alle pro Sitzung einstellbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::SnapThresholds;
use serde::{Deserialize, Serialize};

// ── Snapping ────────────────────────────────────────────────────────

/// Radius für Punkt-Snap (Welteinheiten).
pub const SNAP_POINT_THRESHOLD: f32 = 0.5;
/// Abstand für Segment-Snap (Welteinheiten).
pub const SNAP_LINE_THRESHOLD: f32 = 0.3;
/// Toleranz für den Achsen-Lock gegen den letzten Pfadpunkt.
pub const SNAP_AXIS_OFFSET: f32 = 0.5;

// ── Förderband ──────────────────────────────────────────────────────

/// Gesamtbreite eines Förderbands (auch Kollisionsbreite).
pub const CONVEYOR_WIDTH: f32 = 1.0;
/// Belt-Halbbreite als Anteil der Bandbreite.
pub const BELT_WIDTH_FACTOR: f32 = 0.45;
/// Schienen-Abstand zur Mittellinie als Anteil der Bandbreite.
pub const RAIL_OFFSET_FACTOR: f32 = 0.45;
/// Rundungsradius der Band-Mittellinie.
pub const CONVEYOR_BEND_RADIUS: f32 = 0.8;
/// Rundungsradius der Schienen relativ zum Band-Radius.
pub const RAIL_RADIUS_FACTOR: f32 = 0.8;
/// Höhe der Belt-Oberfläche.
pub const BELT_HEIGHT: f32 = -0.1;
/// Abtastschritte entlang der Band-Kurve.
pub const BELT_DIVISIONS: usize = 500;
/// Stützen-Abstand (Kurvenparameter, nicht Bogenlänge).
pub const SUPPORT_SPACING: f32 = 1.0;
/// Band-Geschwindigkeit (Welteinheiten / s).
pub const BELT_SPEED: f32 = 1.2;
/// Breite eines Streifens entlang des Bands.
pub const STRIPE_WIDTH: f32 = 0.15;
/// Lücke zwischen zwei Streifen.
pub const GAP_WIDTH: f32 = 0.15;
/// Stärke der Krümmungskompensation (0 = aus, 1 = volle Radius-Korrektur).
pub const CURVATURE_COMPENSATION: f32 = 1.0;
/// Grundfarbe des Bands (RGBA, #454545).
pub const BELT_COLOR: [f32; 4] = [0.271, 0.271, 0.271, 1.0];
/// Streifenfarbe (RGBA, #ccc).
pub const STRIPE_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
/// Abstand der Transportgüter auf dem Band.
pub const MATERIAL_GAP: f32 = 1.5;

// ── Fahrzeuge ───────────────────────────────────────────────────────

/// Rundungsradius der Fahrzeug-Pfade.
pub const VEHICLE_BEND_RADIUS: f32 = 5.0;
/// Fahrzeug-Geschwindigkeit (Welteinheiten / s).
pub const VEHICLE_SPEED: f32 = 5.0;
/// Slerp-Faktor der Fahrzeug-Ausrichtung pro Tick.
pub const VEHICLE_TURN_SMOOTHING: f32 = 0.2;

// ── Kamera-Flug ─────────────────────────────────────────────────────

/// Isometrischer Versatz der Kamera zum Pfadpunkt.
pub const CAMERA_ISO_OFFSET: [f32; 3] = [10.0, 10.0, 10.0];
/// Kamera-Geschwindigkeit entlang des Pfads (Welteinheiten / s).
pub const CAMERA_SPEED: f32 = 2.0;
/// Abstand, ab dem ein Kamera-Ziel als erreicht gilt.
pub const CAMERA_TARGET_REACH_RADIUS: f32 = 1.0;
/// Lerp-Faktor des Blickpunkts pro Tick.
pub const CAMERA_LOOK_SMOOTHING: f32 = 0.1;

// ── UI ──────────────────────────────────────────────────────────────

/// Anzeigedauer transienter Warnungen in Sekunden.
pub const WARNING_DURATION_SECS: f32 = 3.0;
/// Linienbreite der Zeichen-Vorschau.
pub const PREVIEW_LINE_WIDTH: f32 = 0.05;
/// Farbe der Zeichen-Vorschau (RGBA: Orange).
pub const PREVIEW_COLOR: [f32; 4] = [1.0, 0.6, 0.0, 1.0];

/// Alle pro Sitzung einstellbaren Editor-Optionen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Snapping ─────────────────────────────────────────────────
    /// Radius für Punkt-Snap
    pub snap_point_threshold: f32,
    /// Abstand für Segment-Snap
    pub snap_line_threshold: f32,
    /// Toleranz für Achsen-Lock
    pub snap_axis_offset: f32,

    // ── Förderband ───────────────────────────────────────────────
    pub conveyor_width: f32,
    pub belt_width_factor: f32,
    pub rail_offset_factor: f32,
    pub conveyor_bend_radius: f32,
    pub rail_radius_factor: f32,
    pub belt_height: f32,
    pub belt_divisions: usize,
    pub support_spacing: f32,
    /// Neue Band-Segmente bei Überschneidung verwerfen
    pub reject_conveyor_overlap: bool,
    pub belt_speed: f32,
    pub stripe_width: f32,
    pub gap_width: f32,
    /// 0 = keine Kompensation, 1 = volle Radius-Korrektur
    pub curvature_compensation: f32,
    pub belt_color: [f32; 4],
    pub stripe_color: [f32; 4],
    pub material_gap: f32,

    // ── Fahrzeuge ────────────────────────────────────────────────
    pub vehicle_bend_radius: f32,
    pub vehicle_speed: f32,
    pub vehicle_turn_smoothing: f32,

    // ── Kamera-Flug ──────────────────────────────────────────────
    pub camera_iso_offset: [f32; 3],
    pub camera_speed: f32,
    pub camera_target_reach_radius: f32,
    pub camera_look_smoothing: f32,

    // ── UI ───────────────────────────────────────────────────────
    pub warning_duration_secs: f32,
    pub preview_line_width: f32,
    pub preview_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            snap_point_threshold: SNAP_POINT_THRESHOLD,
            snap_line_threshold: SNAP_LINE_THRESHOLD,
            snap_axis_offset: SNAP_AXIS_OFFSET,

            conveyor_width: CONVEYOR_WIDTH,
            belt_width_factor: BELT_WIDTH_FACTOR,
            rail_offset_factor: RAIL_OFFSET_FACTOR,
            conveyor_bend_radius: CONVEYOR_BEND_RADIUS,
            rail_radius_factor: RAIL_RADIUS_FACTOR,
            belt_height: BELT_HEIGHT,
            belt_divisions: BELT_DIVISIONS,
            support_spacing: SUPPORT_SPACING,
            reject_conveyor_overlap: true,
            belt_speed: BELT_SPEED,
            stripe_width: STRIPE_WIDTH,
            gap_width: GAP_WIDTH,
            curvature_compensation: CURVATURE_COMPENSATION,
            belt_color: BELT_COLOR,
            stripe_color: STRIPE_COLOR,
            material_gap: MATERIAL_GAP,

            vehicle_bend_radius: VEHICLE_BEND_RADIUS,
            vehicle_speed: VEHICLE_SPEED,
            vehicle_turn_smoothing: VEHICLE_TURN_SMOOTHING,

            camera_iso_offset: CAMERA_ISO_OFFSET,
            camera_speed: CAMERA_SPEED,
            camera_target_reach_radius: CAMERA_TARGET_REACH_RADIUS,
            camera_look_smoothing: CAMERA_LOOK_SMOOTHING,

            warning_duration_secs: WARNING_DURATION_SECS,
            preview_line_width: PREVIEW_LINE_WIDTH,
            preview_color: PREVIEW_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler → Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("site-layout-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("site-layout-editor.toml")
    }

    /// Snap-Schwellwerte dieser Sitzung.
    pub fn snap_thresholds(&self) -> SnapThresholds {
        SnapThresholds {
            point: self.snap_point_threshold,
            segment: self.snap_line_threshold,
            axis_offset: self.snap_axis_offset,
        }
    }

    /// Belt-Halbbreite: `conveyor_width * belt_width_factor`
    pub fn belt_half_width(&self) -> f32 {
        self.conveyor_width * self.belt_width_factor
    }

    /// Schienen-Abstand zur Mittellinie: `conveyor_width * rail_offset_factor`
    pub fn rail_offset(&self) -> f32 {
        self.conveyor_width * self.rail_offset_factor
    }

    /// Rundungsradius der Schienen.
    pub fn rail_radius(&self) -> f32 {
        self.conveyor_bend_radius * self.rail_radius_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let opts = EditorOptions::default();
        let thresholds = opts.snap_thresholds();
        assert_eq!(thresholds.point, SNAP_POINT_THRESHOLD);
        assert_eq!(thresholds.segment, SNAP_LINE_THRESHOLD);
        assert_eq!(thresholds.axis_offset, SNAP_AXIS_OFFSET);
        assert!((opts.belt_half_width() - 0.45).abs() < 1e-6);
        assert!((opts.rail_radius() - 0.64).abs() < 1e-6);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let opts: EditorOptions =
            toml::from_str("belt_speed = 2.5\nreject_conveyor_overlap = false\n")
                .expect("Teil-TOML muss parsebar sein");
        assert_eq!(opts.belt_speed, 2.5);
        assert!(!opts.reject_conveyor_overlap);
        assert_eq!(opts.material_gap, MATERIAL_GAP);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = EditorOptions::default();
        opts.vehicle_speed = 7.0;
        let text = toml::to_string_pretty(&opts).expect("Serialisierung");
        let back: EditorOptions = toml::from_str(&text).expect("Deserialisierung");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("site-layout-editor-gibt-es-nicht.toml");
        let opts = EditorOptions::load_from_file(&path);
        assert_eq!(opts, EditorOptions::default());
    }
}
