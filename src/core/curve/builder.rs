//! Glättung einer Wegpunkt-Polyline: gerade Stücke + quadratische Eck-Blends.

use super::segment::{CornerBlend, CurveSegment};
use super::SmoothCurve;
use crate::core::path::{PathError, Waypoint};
use glam::Vec3;

/// Unterhalb dieses Knickwinkels (Radiant) wird die Ecke nicht gerundet.
const MIN_CORNER_ANGLE: f32 = 0.01;
/// Unterhalb dieser Blend-Distanz wird die Ecke nicht gerundet.
const MIN_BLEND_DISTANCE: f32 = 0.001;
/// Maximaler Anteil einer angrenzenden Kante, den ein Blend verbrauchen darf.
const BLEND_EDGE_FRACTION: f32 = 0.45;

/// Ergebnis der Glättung: Kurve plus eine Krümmung je Eingabe-Wegpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedCurve {
    pub curve: SmoothCurve,
    /// 0 für gerade/ungerundete Ecken, sonst 1 / Blend-Distanz; erster und letzter Wert sind 0
    pub curvatures: Vec<f32>,
}

/// Hängt eine Linie an, sofern sie eine Ausdehnung hat.
fn push_line(segments: &mut Vec<CurveSegment>, start: Vec3, end: Vec3) {
    if start != end {
        segments.push(CurveSegment::Line { start, end });
    }
}

/// Wandelt eine Polyline in eine geglättete Kurve um.
///
/// Jede Innenecke `P[i]` wird mit einem quadratischen Blend der Distanz
/// `min(radius, 0.45·|P[i]-P[i-1]|, 0.45·|P[i+1]-P[i]|)` gerundet, außer der
/// Knick ist kleiner als 0.01 rad oder die Distanz kleiner als 0.001.
///
/// Fehler: weniger als 2 Wegpunkte.
pub fn build_rounded_curve(points: &[Waypoint], radius: f32) -> Result<RoundedCurve, PathError> {
    if points.len() < 2 {
        return Err(PathError::TooFewPoints {
            count: points.len(),
        });
    }

    let mut segments = Vec::with_capacity(points.len() * 2);
    let mut curvatures = Vec::with_capacity(points.len());
    curvatures.push(0.0);
    let mut last = points[0];

    for window in points.windows(3) {
        let (prev, curr, next) = (window[0], window[1], window[2]);
        let len_in = curr.distance(prev);
        let len_out = next.distance(curr);
        let blend_distance = radius
            .min(len_in * BLEND_EDGE_FRACTION)
            .min(len_out * BLEND_EDGE_FRACTION);

        let v1 = (curr - prev).normalize_or_zero();
        let v2 = (next - curr).normalize_or_zero();
        let straight = blend_distance < MIN_BLEND_DISTANCE
            || !blend_distance.is_finite()
            || v1.angle_between(v2) < MIN_CORNER_ANGLE;

        if straight {
            push_line(&mut segments, last, curr);
            curvatures.push(0.0);
            last = curr;
            continue;
        }

        let p1 = curr - v1 * blend_distance;
        let p2 = curr + v2 * blend_distance;
        push_line(&mut segments, last, p1);
        let curvature = 1.0 / blend_distance;
        segments.push(CurveSegment::Corner(CornerBlend::new(
            p1, curr, p2, curvature,
        )));
        curvatures.push(curvature);
        last = p2;
    }

    let end = points[points.len() - 1];
    push_line(&mut segments, last, end);
    if segments.is_empty() {
        // Alle Punkte identisch: einziges Segment ohne Ausdehnung
        segments.push(CurveSegment::Line {
            start: points[0],
            end,
        });
    }
    curvatures.push(0.0);

    log::debug!(
        "Kurve geglättet: {} Wegpunkte → {} Segmente (Radius {:.2})",
        points.len(),
        segments.len(),
        radius
    );

    Ok(RoundedCurve {
        curve: SmoothCurve::from_segments(segments),
        curvatures,
    })
}
