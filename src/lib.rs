//! Site Layout Editor Library.
//! Pfad-Geometrie (Kurven, Belts, Snapping, Kollision) und Editier-Sitzung
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DrawMode, EditorKey, EditorPhase,
    LayoutState, PlaybackState, UiState,
};
pub use core::{
    build_rounded_curve, paths_collide, sample_motion, snap_point, CollisionSegment,
    CurveSegment, MotionSample, Path, PathError, RoundedCurve, SmoothCurve, SnapKind,
    SnapResult, SnapTargets, SnapThresholds, TravelDirection, Waypoint,
};
pub use shared::{EditorOptions, RenderScene};
