//! Snapping für Zeichen- und Drag-Gesten.
//!
//! Priorität (erster Treffer gewinnt): Punkt → Segment → Achsen-Lock → unverändert.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Snap-Schwellwerte einer Editier-Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapThresholds {
    /// Radius für Punkt-Snap
    pub point: f32,
    /// Abstand für Segment-Snap
    pub segment: f32,
    /// Toleranz für Achsen-Lock gegen den letzten Pfadpunkt
    pub axis_offset: f32,
}

/// Welche Regel den Snap ausgelöst hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapKind {
    /// Exakte Kopie eines vorhandenen Punkts
    Point,
    /// Nächster Punkt auf einem Pfad-Segment
    Segment,
    /// x an den Anker angeglichen
    AxisX,
    /// z an den Anker angeglichen
    AxisZ,
    /// Position unverändert
    None,
}

/// Gesnappte Position plus ausgelöste Regel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    pub position: Vec3,
    pub kind: SnapKind,
}

/// Alles, worauf gesnappt werden kann.
#[derive(Debug, Clone, Default)]
pub struct SnapTargets<'a> {
    /// Punktfolgen (Pfade), ihre Punkte und Segmente sind Snap-Ziele
    pub paths: Vec<&'a [Vec3]>,
    /// Einzelpunkte ohne Segmente (z. B. Kamera-Ziele)
    pub loose_points: Vec<Vec3>,
    /// Letzter Punkt des aktiven Pfads für den Achsen-Lock
    pub anchor: Option<Vec3>,
}

impl SnapTargets<'_> {
    fn all_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.paths
            .iter()
            .flat_map(|path| path.iter().copied())
            .chain(self.loose_points.iter().copied())
    }

    fn all_segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.paths
            .iter()
            .flat_map(|path| path.windows(2).map(|w| (w[0], w[1])))
    }
}

/// Nächster Punkt auf dem Segment `a → b`. Entartete Segmente liefern `a`.
pub fn closest_point_on_segment(point: Vec3, a: Vec3, b: Vec3) -> Vec3 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= 0.0 {
        return a;
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Obergrenze der Snap-Durchläufe bis zum Fixpunkt.
const MAX_SNAP_PASSES: usize = 8;
/// Abstand, unter dem ein Punkt als auf dem Segment liegend gilt.
const ON_SEGMENT_EPSILON: f32 = 1e-5;

/// Snappt eine Hover-Position gegen die Ziele.
///
/// Die Prioritätskette wird auf ihr eigenes Ergebnis erneut angewendet, bis
/// sich die Position nicht mehr ändert. Ein Segment- oder Achsen-Ergebnis,
/// das in den Punkt-Radius fällt, wird so noch zum Punkt-Snap. Damit gilt
/// `snap(snap(p)) == snap(p)`.
pub fn snap_point(hover: Vec3, targets: &SnapTargets<'_>, thresholds: &SnapThresholds) -> SnapResult {
    let mut result = snap_once(hover, targets, thresholds);
    for _ in 1..MAX_SNAP_PASSES {
        let next = snap_once(result.position, targets, thresholds);
        if next.position == result.position {
            return next;
        }
        result = next;
    }
    result
}

/// Ein Durchlauf der Kette Punkt → Segment → Achse X → Achse Z.
fn snap_once(hover: Vec3, targets: &SnapTargets<'_>, thresholds: &SnapThresholds) -> SnapResult {
    // 1. Punkt-Snap: nächster Punkt im Radius, Gleichstand → erster
    let mut best: Option<(Vec3, f32)> = None;
    for candidate in targets.all_points() {
        let distance = candidate.distance(hover);
        if distance < thresholds.point && best.is_none_or(|(_, d)| distance < d) {
            best = Some((candidate, distance));
        }
    }
    if let Some((position, _)) = best {
        return SnapResult {
            position,
            kind: SnapKind::Point,
        };
    }

    // 2. Segment-Snap: erstes Segment im Abstand
    for (a, b) in targets.all_segments() {
        let closest = closest_point_on_segment(hover, a, b);
        let distance = closest.distance(hover);
        if distance < thresholds.segment {
            // Liegt bereits auf dem Segment: Position unverändert lassen
            let position = if distance <= ON_SEGMENT_EPSILON {
                hover
            } else {
                closest
            };
            return SnapResult {
                position,
                kind: SnapKind::Segment,
            };
        }
    }

    // 3. Achsen-Lock gegen den letzten Punkt (höchstens eine Achse)
    if let Some(anchor) = targets.anchor {
        if (hover.x - anchor.x).abs() < thresholds.axis_offset {
            return SnapResult {
                position: Vec3::new(anchor.x, hover.y, hover.z),
                kind: SnapKind::AxisX,
            };
        }
        if (hover.z - anchor.z).abs() < thresholds.axis_offset {
            return SnapResult {
                position: Vec3::new(hover.x, hover.y, anchor.z),
                kind: SnapKind::AxisZ,
            };
        }
    }

    SnapResult {
        position: hover,
        kind: SnapKind::None,
    }
}
