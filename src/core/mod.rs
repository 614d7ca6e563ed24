//! Core-Domänentypen: Wegpunkte, Pfade, geglättete Kurven, Snapping, Kollision, Bewegung.

pub mod collision;
/// Geglättete Kurven aus Wegpunkt-Polylinien
///
/// - `SmoothCurve`: Arc-Length-parametrisierte Kurve aus Linien und Eck-Blends
/// - `CurveSegment`: einzelnes Kurven-Primitiv (Linie oder quadratischer Blend)
/// - `build_rounded_curve`: Polyline + Rundungsradius → Kurve + Krümmungen
pub mod curve;
pub mod motion;
pub mod path;
pub mod snapping;

pub use collision::{collision_segments, paths_collide, CollisionSegment};
pub use curve::{build_rounded_curve, CurveSegment, RoundedCurve, SmoothCurve};
pub use motion::{look_rotation, sample_motion, MotionSample, TravelDirection};
pub use path::{Path, PathError, Waypoint};
pub use snapping::{closest_point_on_segment, snap_point, SnapKind, SnapResult, SnapTargets, SnapThresholds};
