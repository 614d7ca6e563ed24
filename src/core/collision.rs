//! Kollisionstest zwischen verbreiterten Pfaden auf der Bodenebene.
//!
//! Jede Pfad-Kante wird zu einem Quad der Breite `width` aufgezogen. Zwei
//! Quads kollidieren, wenn ihre AABBs sich berühren und sich die (x,z)-Polygone
//! schneiden oder eines im anderen liegt.

use glam::{Vec2, Vec3};

/// Verbreiterte Pfad-Kante (vier Ecken, Welt-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionSegment {
    pub left_start: Vec3,
    pub right_start: Vec3,
    pub left_end: Vec3,
    pub right_end: Vec3,
}

impl CollisionSegment {
    /// Zieht die Kante `start → end` auf `width` auf (Normale = up × Richtung).
    pub fn from_edge(start: Vec3, end: Vec3, width: f32) -> Self {
        let dir = (end - start).normalize_or_zero();
        let offset = Vec3::Y.cross(dir).normalize_or_zero() * (width * 0.5);
        Self {
            left_start: start - offset,
            right_start: start + offset,
            left_end: end - offset,
            right_end: end + offset,
        }
    }

    /// Ecken in Umlaufreihenfolge.
    pub fn corners(&self) -> [Vec3; 4] {
        [
            self.left_start,
            self.right_start,
            self.right_end,
            self.left_end,
        ]
    }

    /// Achsenparallele Bounding-Box (min, max).
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let corners = self.corners();
        corners[1..]
            .iter()
            .fold((corners[0], corners[0]), |(min, max), &c| {
                (min.min(c), max.max(c))
            })
    }

    /// Grundriss auf der (x,z)-Ebene.
    pub fn footprint(&self) -> [Vec2; 4] {
        self.corners().map(|c| Vec2::new(c.x, c.z))
    }

    /// `true`, wenn sich beide Quads überlappen oder berühren.
    pub fn overlaps(&self, other: &CollisionSegment) -> bool {
        if !bounds_overlap(self.bounds(), other.bounds()) {
            return false;
        }
        polygons_intersect(&self.footprint(), &other.footprint())
    }
}

/// Verbreiterte Quads aller Kanten eines Pfads. Weniger als 2 Punkte → leer.
pub fn collision_segments(points: &[Vec3], width: f32) -> Vec<CollisionSegment> {
    points
        .windows(2)
        .map(|w| CollisionSegment::from_edge(w[0], w[1], width))
        .collect()
}

/// Prüft, ob sich zwei Pfade bei gegebener Breite überschneiden. Symmetrisch.
pub fn paths_collide(a: &[Vec3], b: &[Vec3], width: f32) -> bool {
    let segments_a = collision_segments(a, width);
    let segments_b = collision_segments(b, width);

    segments_a
        .iter()
        .any(|sa| segments_b.iter().any(|sb| sa.overlaps(sb)))
}

// ── 2D-Hilfsfunktionen ──────────────────────────────────────────

fn bounds_overlap((min_a, max_a): (Vec3, Vec3), (min_b, max_b): (Vec3, Vec3)) -> bool {
    min_a.cmple(max_b).all() && min_b.cmple(max_a).all()
}

/// Strikter Orientierungstest (gegen den Uhrzeigersinn).
fn ccw(a: Vec2, b: Vec2, c: Vec2) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

fn segments_cross(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    if ab.perp_dot(ap).abs() > 1e-4 {
        return false;
    }
    let dot = ap.dot(ab);
    dot >= 0.0 && dot <= ab.length_squared()
}

/// Ray-Casting (even-odd), Rand zählt als innen.
fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };

    let mut inside = false;
    let mut previous = last;
    for &current in polygon {
        if point_on_segment(point, previous, current) {
            return true;
        }

        let intersect = ((current.y > point.y) != (previous.y > point.y))
            && (point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x);
        if intersect {
            inside = !inside;
        }
        previous = current;
    }
    inside
}

fn polygons_intersect(a: &[Vec2; 4], b: &[Vec2; 4]) -> bool {
    for i in 0..a.len() {
        let (a1, a2) = (a[i], a[(i + 1) % a.len()]);
        for j in 0..b.len() {
            let (b1, b2) = (b[j], b[(j + 1) % b.len()]);
            if segments_cross(a1, a2, b1, b2) {
                return true;
            }
        }
    }

    point_in_polygon(a[0], b) || point_in_polygon(b[0], a)
}
