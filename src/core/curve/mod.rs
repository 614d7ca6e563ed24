//! Arc-Length-parametrisierte Kurve aus Linien und Eck-Blends.

mod builder;
mod segment;


pub use builder::{build_rounded_curve, RoundedCurve};
pub use segment::{quadratic_bezier, quadratic_bezier_derivative, CornerBlend, CurveSegment};

use glam::Vec3;

/// Fallback-Tangente für Kurven ohne Ausdehnung.
const FALLBACK_TANGENT: Vec3 = Vec3::X;

/// Unveränderliche, C0-stetige Kurve. Parameter `t ∈ [0, 1]` läuft über die Bogenlänge.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothCurve {
    segments: Vec<CurveSegment>,
    /// Kumulierte Bogenlänge am Ende jedes Segments
    segment_ends: Vec<f32>,
    total_length: f32,
}

impl SmoothCurve {
    /// Baut die Kurve aus nicht-leeren, lückenlos aneinanderhängenden Segmenten.
    pub(crate) fn from_segments(segments: Vec<CurveSegment>) -> Self {
        debug_assert!(!segments.is_empty(), "SmoothCurve ohne Segmente");
        let mut segment_ends = Vec::with_capacity(segments.len());
        let mut cumulative = 0.0f32;
        for segment in &segments {
            cumulative += segment.length();
            segment_ends.push(cumulative);
        }
        Self {
            segments,
            segment_ends,
            total_length: cumulative,
        }
    }

    /// Alle Primitive in Fahrtrichtung.
    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    /// Gesamte Bogenlänge.
    pub fn length(&self) -> f32 {
        self.total_length
    }

    pub fn start(&self) -> Vec3 {
        self.segments.first().map_or(Vec3::ZERO, CurveSegment::start)
    }

    pub fn end(&self) -> Vec3 {
        self.segments.last().map_or(Vec3::ZERO, CurveSegment::end)
    }

    /// Findet das Segment zur Bogenlänge `t · L` und den lokalen Anteil darin.
    fn locate(&self, t: f32) -> Option<(&CurveSegment, f32)> {
        let first = self.segments.first()?;
        if self.total_length <= f32::EPSILON {
            return Some((first, 0.0));
        }

        let distance = t.clamp(0.0, 1.0) * self.total_length;
        let idx = self
            .segment_ends
            .partition_point(|&end| end < distance)
            .min(self.segments.len() - 1);
        let segment = &self.segments[idx];
        let seg_start = if idx == 0 {
            0.0
        } else {
            self.segment_ends[idx - 1]
        };
        let seg_len = segment.length();
        let u = if seg_len > f32::EPSILON {
            (distance - seg_start) / seg_len
        } else {
            0.0
        };
        Some((segment, u))
    }

    /// Punkt bei normalisierter Bogenlänge `t`. Kurven der Länge 0 liefern ihren einzigen Punkt.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.locate(t)
            .map_or(Vec3::ZERO, |(segment, u)| segment.point_at(u))
    }

    /// Normalisierte Tangente bei normalisierter Bogenlänge `t`.
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        let tangent = self
            .locate(t)
            .map_or(Vec3::ZERO, |(segment, u)| segment.tangent_at(u));
        if tangent == Vec3::ZERO {
            FALLBACK_TANGENT
        } else {
            tangent
        }
    }

    /// Krümmung des Primitivs, das `t` enthält (Eck-Blend: 1 / Blend-Distanz, Linie: 0).
    pub fn curvature_at(&self, t: f32) -> f32 {
        self.locate(t)
            .map_or(0.0, |(segment, _)| segment.curvature())
    }

    /// `divisions + 1` Punkte bei `t = i / divisions`.
    pub fn sample_points(&self, divisions: usize) -> Vec<Vec3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.point_at(i as f32 / divisions as f32))
            .collect()
    }
}
