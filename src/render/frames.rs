//! Gleichmäßige Abtastung einer Kurve mit Boden-Normalen.

use crate::core::SmoothCurve;
use glam::Vec3;

/// Abtastpunkt der Kurve bei `t = i / N`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFrame {
    pub t: f32,
    pub point: Vec3,
    pub tangent: Vec3,
    /// Normalisiert `up × tangent`, zeigt nach rechts
    pub normal: Vec3,
    pub curvature: f32,
}

/// Normale auf der Bodenebene. Senkrechte Tangenten fallen auf +X zurück.
pub fn ground_normal(tangent: Vec3) -> Vec3 {
    let normal = Vec3::Y.cross(tangent).normalize_or_zero();
    if normal == Vec3::ZERO {
        Vec3::X
    } else {
        normal
    }
}

/// `divisions + 1` Frames bei `t = i / divisions`.
pub fn sample_frames(curve: &SmoothCurve, divisions: usize) -> Vec<CurveFrame> {
    let divisions = divisions.max(1);
    (0..=divisions)
        .map(|i| {
            let t = i as f32 / divisions as f32;
            let tangent = curve.tangent_at(t);
            CurveFrame {
                t,
                point: curve.point_at(t),
                tangent,
                normal: ground_normal(tangent),
                curvature: curve.curvature_at(t),
            }
        })
        .collect()
}

/// Kumulierte Sehnenlänge zwischen aufeinanderfolgenden Punkten (Start 0).
pub fn cumulative_lengths(points: impl IntoIterator<Item = Vec3>) -> Vec<f32> {
    let mut lengths = Vec::new();
    let mut previous: Option<Vec3> = None;
    let mut total = 0.0;
    for p in points {
        if let Some(prev) = previous {
            total += prev.distance(p);
        }
        lengths.push(total);
        previous = Some(p);
    }
    lengths
}
