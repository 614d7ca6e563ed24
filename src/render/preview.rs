//! Linien-Geometrie der Zeichen-Vorschau.

use super::types::LineVertex;
use crate::shared::PreviewScene;
use glam::Vec3;

/// Erzeugt ein Quad (2 Dreiecke) auf der Bodenebene für ein Liniensegment.
pub(super) fn push_line_quad(
    vertices: &mut Vec<LineVertex>,
    start: Vec3,
    end: Vec3,
    thickness: f32,
    color: [f32; 4],
) {
    let dir = (end - start).normalize_or_zero();
    if dir == Vec3::ZERO {
        return;
    }
    let perp = Vec3::Y.cross(dir).normalize_or_zero() * (thickness * 0.5);

    let v0 = start + perp;
    let v1 = start - perp;
    let v2 = end + perp;
    let v3 = end - perp;

    vertices.extend_from_slice(&[
        LineVertex::new(v0, color),
        LineVertex::new(v1, color),
        LineVertex::new(v2, color),
        LineVertex::new(v2, color),
        LineVertex::new(v1, color),
        LineVertex::new(v3, color),
    ]);
}

/// Vorschau-Linien: aktiver Pfad plus Gummiband zum Hover-Punkt.
pub fn build_preview_lines(preview: &PreviewScene, thickness: f32, color: [f32; 4]) -> Vec<LineVertex> {
    let mut vertices = Vec::new();
    for pair in preview.points.windows(2) {
        push_line_quad(&mut vertices, pair[0], pair[1], thickness, color);
    }
    if let (Some(last), Some(hover)) = (preview.points.last(), preview.hover) {
        push_line_quad(&mut vertices, *last, hover.position, thickness, color);
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SnapKind, SnapResult};

    #[test]
    fn test_preview_includes_rubber_band() {
        let preview = PreviewScene {
            points: vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)],
            hover: Some(SnapResult {
                position: Vec3::new(2.0, 0.0, 3.0),
                kind: SnapKind::None,
            }),
        };
        let vertices = build_preview_lines(&preview, 0.1, [1.0; 4]);
        assert_eq!(vertices.len(), 12);
    }

    #[test]
    fn test_degenerate_segment_is_skipped() {
        let preview = PreviewScene {
            points: vec![Vec3::ONE, Vec3::ONE],
            hover: None,
        };
        assert!(build_preview_lines(&preview, 0.1, [1.0; 4]).is_empty());
    }
}
