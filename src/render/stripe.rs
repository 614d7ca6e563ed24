//! Streifen-Muster des Bands: Uniforms und CPU-Referenz der Shader-Regel.

use super::types::StripeUniforms;
use crate::shared::EditorOptions;

/// Ersatz-Radius für (nahezu) gerade Stellen.
const STRAIGHT_RADIUS: f32 = 10_000.0;
/// Unterhalb dieser Krümmung gilt die Stelle als gerade.
const MIN_CURVATURE: f32 = 0.001;
/// Untergrenze des Radius an der Band-Kante.
const MIN_EDGE_RADIUS: f32 = 1e-3;

impl StripeUniforms {
    /// Baut die Uniforms eines Bands aus den Optionen.
    pub fn from_options(options: &EditorOptions, conveyor_length: f32, time: f32) -> Self {
        Self {
            belt_color: options.belt_color,
            stripe_color: options.stripe_color,
            time,
            speed: options.belt_speed,
            stripe_width: options.stripe_width,
            gap_width: options.gap_width,
            conveyor_length,
            curvature_factor: options.curvature_compensation,
            belt_half_width: options.belt_half_width(),
            _padding: 0.0,
        }
    }

    /// Bogenlängen-Koordinate mit Radius-Kompensation.
    ///
    /// `R = 1 / curvature` (gerade: 10000), Kante: `R + lateral · halfWidth`,
    /// angepasst: `base · R / R_kante`, gewichtet mit `curvature_factor`.
    pub fn compensated_position(&self, base: f32, curvature: f32, lateral: f32) -> f32 {
        let radius = if curvature > MIN_CURVATURE {
            1.0 / curvature
        } else {
            STRAIGHT_RADIUS
        };
        let radius_at = (radius + lateral * self.belt_half_width).max(MIN_EDGE_RADIUS);
        let full = base * radius / radius_at;
        base + (full - base) * self.curvature_factor
    }

    /// `true`, wenn der Belt-Punkt im Streifen (nicht in der Lücke) liegt.
    pub fn is_stripe(&self, path_position: f32, curvature: f32, lateral: f32) -> bool {
        let period = self.stripe_width + self.gap_width;
        if period <= 0.0 {
            return false;
        }
        let adjusted = self.compensated_position(path_position, curvature, lateral);
        let phase = (adjusted * self.conveyor_length - self.time * self.speed).rem_euclid(period);
        phase < self.stripe_width
    }

    /// Farbe eines Belt-Punkts.
    pub fn color_at(&self, path_position: f32, curvature: f32, lateral: f32) -> [f32; 4] {
        if self.is_stripe(path_position, curvature, lateral) {
            self.stripe_color
        } else {
            self.belt_color
        }
    }

    /// Uniforms als Byte-Slice für den GPU-Upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
