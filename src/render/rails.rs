//! Seitliche Schienen und Stützen eines Förderbands.

use super::frames::sample_frames;
use crate::core::{build_rounded_curve, PathError, SmoothCurve};
use glam::Vec3;

/// Linke und rechte Schiene als eigene, neu geglättete Kurven.
#[derive(Debug, Clone, PartialEq)]
pub struct RailSet {
    pub left: SmoothCurve,
    pub right: SmoothCurve,
}

/// Stützen-Station mit Anker links und rechts der Mittellinie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportAnchor {
    /// Kurvenparameter der Station
    pub t: f32,
    pub left: Vec3,
    pub right: Vec3,
}

/// Stützen eines Bands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupportLayout {
    /// `floor(Länge / Abstand)`
    pub interval_count: usize,
    pub anchors: Vec<SupportAnchor>,
}

/// Versetzt die Kurve um `±offset` entlang der Boden-Normalen und glättet
/// beide Seiten mit `radius` neu.
pub fn build_rails(
    curve: &SmoothCurve,
    offset: f32,
    height: f32,
    divisions: usize,
    radius: f32,
) -> Result<RailSet, PathError> {
    let frames = sample_frames(curve, divisions);

    let side = |sign: f32| -> Vec<Vec3> {
        frames
            .iter()
            .map(|f| {
                let mut p = f.point + f.normal * (sign * offset);
                p.y = height;
                p
            })
            .collect()
    };

    Ok(RailSet {
        left: build_rounded_curve(&side(-1.0), radius)?.curve,
        right: build_rounded_curve(&side(1.0), radius)?.curve,
    })
}

/// Verteilt Stützen bei `t = i / count` für `i in 0..=count`.
///
/// Der Abstand wird über den Kurvenparameter verteilt, nicht über die echte
/// Bogenlänge. Bei `count == 0` entsteht eine einzelne Station bei `t = 0`.
pub fn build_supports(curve: &SmoothCurve, offset: f32, spacing: f32) -> SupportLayout {
    let interval_count = if spacing > 0.0 {
        (curve.length() / spacing).floor() as usize
    } else {
        0
    };

    let station = |t: f32| {
        let point = curve.point_at(t);
        let normal = super::frames::ground_normal(curve.tangent_at(t));
        SupportAnchor {
            t,
            left: point - normal * offset,
            right: point + normal * offset,
        }
    };

    let anchors = if interval_count == 0 {
        vec![station(0.0)]
    } else {
        (0..=interval_count)
            .map(|i| station(i as f32 / interval_count as f32))
            .collect()
    };

    SupportLayout {
        interval_count,
        anchors,
    }
}
