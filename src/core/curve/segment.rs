//! Kurven-Primitive: gerade Linie und quadratischer Eck-Blend (Bézier Grad 2).

use glam::Vec3;

/// Stützstellen der Arc-Length-Tabelle eines Eck-Blends.
const ARC_LENGTH_DIVISIONS: usize = 200;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B'(t) = 2(1-t)·(P1-P0) + 2t·(P2-P1)
pub fn quadratic_bezier_derivative(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    2.0 * (1.0 - t) * (p1 - p0) + 2.0 * t * (p2 - p1)
}

/// Einzelnes Primitiv einer `SmoothCurve`.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveSegment {
    /// Gerades Stück zwischen zwei Punkten
    Line { start: Vec3, end: Vec3 },
    /// Quadratischer Blend um eine Polyline-Ecke
    Corner(CornerBlend),
}

/// Quadratischer Eck-Blend `start → corner → end` mit Arc-Length-Tabelle.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerBlend {
    pub start: Vec3,
    /// Original-Wegpunkt, dient als Bézier-Kontrollpunkt
    pub corner: Vec3,
    pub end: Vec3,
    /// 1 / Blend-Distanz
    pub curvature: f32,
    /// Kumulierte Sehnenlängen bei t = i / ARC_LENGTH_DIVISIONS
    arc_lengths: Vec<f32>,
}

impl CornerBlend {
    /// Erstellt einen Blend und tabelliert seine Bogenlänge.
    pub fn new(start: Vec3, corner: Vec3, end: Vec3, curvature: f32) -> Self {
        let mut arc_lengths = Vec::with_capacity(ARC_LENGTH_DIVISIONS + 1);
        let mut prev = start;
        let mut cumulative = 0.0f32;
        arc_lengths.push(0.0);
        for i in 1..=ARC_LENGTH_DIVISIONS {
            let t = i as f32 / ARC_LENGTH_DIVISIONS as f32;
            let p = quadratic_bezier(start, corner, end, t);
            cumulative += prev.distance(p);
            arc_lengths.push(cumulative);
            prev = p;
        }
        Self {
            start,
            corner,
            end,
            curvature,
            arc_lengths,
        }
    }

    pub fn length(&self) -> f32 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Bézier-Parameter für einen Bogenlängen-Anteil `u ∈ [0, 1]`.
    fn param_for_fraction(&self, u: f32) -> f32 {
        let total = self.length();
        if total <= f32::EPSILON {
            return u.clamp(0.0, 1.0);
        }
        let target = u.clamp(0.0, 1.0) * total;
        let last = self.arc_lengths.len() - 1;
        let idx = self
            .arc_lengths
            .partition_point(|&len| len < target)
            .clamp(1, last);

        let len_before = self.arc_lengths[idx - 1];
        let len_after = self.arc_lengths[idx];
        let frac = if (len_after - len_before).abs() > f32::EPSILON {
            (target - len_before) / (len_after - len_before)
        } else {
            0.0
        };
        ((idx - 1) as f32 + frac) / last as f32
    }
}

impl CurveSegment {
    pub fn start(&self) -> Vec3 {
        match self {
            CurveSegment::Line { start, .. } => *start,
            CurveSegment::Corner(blend) => blend.start,
        }
    }

    pub fn end(&self) -> Vec3 {
        match self {
            CurveSegment::Line { end, .. } => *end,
            CurveSegment::Corner(blend) => blend.end,
        }
    }

    pub fn length(&self) -> f32 {
        match self {
            CurveSegment::Line { start, end } => start.distance(*end),
            CurveSegment::Corner(blend) => blend.length(),
        }
    }

    /// Krümmung des Primitivs (Linie: 0).
    pub fn curvature(&self) -> f32 {
        match self {
            CurveSegment::Line { .. } => 0.0,
            CurveSegment::Corner(blend) => blend.curvature,
        }
    }

    /// Punkt bei Bogenlängen-Anteil `u ∈ [0, 1]`.
    pub fn point_at(&self, u: f32) -> Vec3 {
        match self {
            CurveSegment::Line { start, end } => start.lerp(*end, u.clamp(0.0, 1.0)),
            CurveSegment::Corner(blend) => {
                let t = blend.param_for_fraction(u);
                quadratic_bezier(blend.start, blend.corner, blend.end, t)
            }
        }
    }

    /// Normalisierte Tangente bei Bogenlängen-Anteil `u`; Null bei entarteten Primitiven.
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        match self {
            CurveSegment::Line { start, end } => (*end - *start).normalize_or_zero(),
            CurveSegment::Corner(blend) => {
                let t = blend.param_for_fraction(u);
                quadratic_bezier_derivative(blend.start, blend.corner, blend.end, t)
                    .normalize_or_zero()
            }
        }
    }
}
