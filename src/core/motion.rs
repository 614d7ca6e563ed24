//! Zustandslose Bewegungs-Abtastung entlang einer `SmoothCurve`.

use super::curve::SmoothCurve;
use glam::{Mat3, Quat, Vec3};

/// Fahrtrichtung auf der Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelDirection {
    #[default]
    Forward,
    Reverse,
}

/// Pose an einer Kurvenstelle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    pub position: Vec3,
    /// Normalisierte Blickrichtung (bei Rückwärtsfahrt negierte Tangente)
    pub forward: Vec3,
    /// Lokales +Z zeigt in `forward`, Welt-Y als Hoch-Referenz
    pub orientation: Quat,
}

/// Rotation, die lokales +Z auf `forward` abbildet.
///
/// Ist `forward` parallel zu `up`, wird +X als Rechts-Achse verwendet.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let f = forward.normalize_or_zero();
    if f == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut right = up.cross(f).normalize_or_zero();
    if right == Vec3::ZERO {
        right = Vec3::X;
    }
    let true_up = f.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, true_up, f)).normalize()
}

/// Tastet die Kurve bei `t ∈ [0, 1]` ab.
pub fn sample_motion(curve: &SmoothCurve, t: f32, direction: TravelDirection) -> MotionSample {
    let position = curve.point_at(t);
    let tangent = curve.tangent_at(t);
    let forward = match direction {
        TravelDirection::Forward => tangent,
        TravelDirection::Reverse => -tangent,
    };
    MotionSample {
        position,
        forward,
        orientation: look_rotation(forward, Vec3::Y),
    }
}
