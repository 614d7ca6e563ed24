//! Ribbon-Mesh der Belt-Oberfläche mit Bogenlängen-, Krümmungs- und Seiten-Attributen.

use super::frames::{cumulative_lengths, sample_frames};
use super::types::BeltVertex;
use crate::core::SmoothCurve;

/// Parameter der Belt-Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeltParams {
    /// Abstand der Kanten zur Mittellinie
    pub half_width: f32,
    /// y-Koordinate aller Vertices
    pub height: f32,
    /// Abtastschritte entlang der Kurve (mindestens 1)
    pub divisions: usize,
}

/// Dreiecksliste der Belt-Oberfläche (6 Vertices pro Abtast-Intervall).
#[derive(Debug, Clone, Default)]
pub struct BeltMesh {
    pub vertices: Vec<BeltVertex>,
    /// Summe der Sehnenlängen zwischen den Abtastpunkten
    pub total_length: f32,
    /// Normalisierte Bogenlänge je Abtastpunkt
    pub arc_lengths: Vec<f32>,
}

impl BeltMesh {
    /// Anzahl der Dreiecke.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex-Daten als Byte-Slice für den GPU-Upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Erzeugt das Belt-Mesh entlang der Kurve.
///
/// Pro Quad `(L_i, R_i, L_i+1, R_i+1)` entstehen die Dreiecke
/// `(L_i, L_i+1, R_i)` und `(L_i+1, R_i+1, R_i)`.
pub fn build_belt_mesh(curve: &SmoothCurve, params: &BeltParams) -> BeltMesh {
    let frames = sample_frames(curve, params.divisions);

    let raw_lengths = cumulative_lengths(frames.iter().map(|f| f.point));
    let total_length = raw_lengths.last().copied().unwrap_or(0.0);
    let arc_lengths: Vec<f32> = if total_length > f32::EPSILON {
        raw_lengths.iter().map(|l| l / total_length).collect()
    } else {
        vec![0.0; raw_lengths.len()]
    };

    let edge = |i: usize, lateral: f32| {
        let frame = &frames[i];
        let mut position = frame.point + frame.normal * (lateral * params.half_width);
        position.y = params.height;
        BeltVertex::new(position, arc_lengths[i], frame.curvature, lateral)
    };

    let mut vertices = Vec::with_capacity((frames.len() - 1) * 6);
    for i in 0..frames.len() - 1 {
        let (l0, r0) = (edge(i, -1.0), edge(i, 1.0));
        let (l1, r1) = (edge(i + 1, -1.0), edge(i + 1, 1.0));

        vertices.extend_from_slice(&[l0, l1, r0]);
        vertices.extend_from_slice(&[l1, r1, r0]);
    }

    log::debug!(
        "Belt-Mesh: {} Dreiecke, Länge {:.2}",
        vertices.len() / 3,
        total_length
    );

    BeltMesh {
        vertices,
        total_length,
        arc_lengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::build_rounded_curve;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn params(divisions: usize) -> BeltParams {
        BeltParams {
            half_width: 0.45,
            height: -0.1,
            divisions,
        }
    }

    #[test]
    fn test_straight_belt_layout() {
        let points = vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)];
        let curve = build_rounded_curve(&points, 0.8).expect("gültiger Pfad").curve;
        let mesh = build_belt_mesh(&curve, &params(10));

        assert_eq!(mesh.vertices.len(), 60);
        assert_eq!(mesh.triangle_count(), 20);
        assert_relative_eq!(mesh.total_length, 10.0, epsilon = 1e-4);

        // Normale bei +X ist -Z: links liegt bei +z
        let first = mesh.vertices[0];
        assert_eq!(first.lateral, -1.0);
        assert_relative_eq!(first.position[2], 0.45, epsilon = 1e-6);
        assert_eq!(first.position[1], -0.1);
        let right = mesh.vertices[2];
        assert_eq!(right.lateral, 1.0);
        assert_relative_eq!(right.position[2], -0.45, epsilon = 1e-6);
    }

    #[test]
    fn test_triangle_laterals() {
        let points = vec![Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)];
        let curve = build_rounded_curve(&points, 0.8).expect("gültiger Pfad").curve;
        let mesh = build_belt_mesh(&curve, &params(4));

        let laterals: Vec<f32> = mesh.vertices[..6].iter().map(|v| v.lateral).collect();
        assert_eq!(laterals, vec![-1.0, -1.0, 1.0, -1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_arc_length_is_monotonic_and_normalized() {
        let points = vec![
            Vec3::ZERO,
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 5.0),
        ];
        let curve = build_rounded_curve(&points, 1.0).expect("gültiger Pfad").curve;
        let mesh = build_belt_mesh(&curve, &params(200));

        assert_eq!(mesh.arc_lengths.first().copied(), Some(0.0));
        assert_relative_eq!(*mesh.arc_lengths.last().unwrap(), 1.0, epsilon = 1e-6);
        for pair in mesh.arc_lengths.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_curvature_comes_from_primitive() {
        let points = vec![
            Vec3::ZERO,
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 5.0),
        ];
        let curve = build_rounded_curve(&points, 1.0).expect("gültiger Pfad").curve;
        let mesh = build_belt_mesh(&curve, &params(100));

        let max = mesh
            .vertices
            .iter()
            .map(|v| v.curvature)
            .fold(0.0f32, f32::max);
        assert_eq!(max, 1.0);
        assert_eq!(mesh.vertices[0].curvature, 0.0);
        assert!(mesh.vertices.iter().all(|v| v.curvature == 0.0 || v.curvature == 1.0));
    }

    #[test]
    fn test_zero_length_curve_has_zero_arc_lengths() {
        let p = Vec3::new(2.0, 0.0, 2.0);
        let curve = build_rounded_curve(&[p, p], 0.8).expect("gültiger Pfad").curve;
        let mesh = build_belt_mesh(&curve, &params(5));

        assert_eq!(mesh.total_length, 0.0);
        assert!(mesh.vertices.iter().all(|v| v.path_position == 0.0));
        assert!(mesh.as_bytes().len() == mesh.vertices.len() * 32);
    }
}
