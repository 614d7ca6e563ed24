//! Use-Case: Snap-Ziele aus dem State aufbauen und Zeiger-Positionen snappen.

use crate::app::state::DrawMode;
use crate::app::AppState;
use crate::core::{snap_point, SnapKind, SnapResult, SnapTargets};
use glam::Vec3;

/// Baut die Snap-Ziele: alle Pfade aller Modi und alle Kamera-Ziele.
///
/// `exclude_target` blendet ein gezogenes Kamera-Ziel aus, damit es nicht
/// an sich selbst hängen bleibt.
pub fn build_targets(state: &AppState, exclude_target: Option<u64>) -> SnapTargets<'_> {
    let paths = state
        .layout
        .all_paths()
        .filter(|p| !p.is_empty())
        .map(|p| p.points())
        .collect();

    let loose_points: Vec<Vec3> = state
        .layout
        .camera_targets
        .iter()
        .filter(|(id, _)| Some(**id) != exclude_target)
        .map(|(_, pos)| *pos)
        .collect();

    let anchor = match state.editor.mode {
        DrawMode::CameraTarget => loose_points.last().copied(),
        mode => state.layout.draft(mode).and_then(|p| p.last()),
    };

    SnapTargets {
        paths,
        loose_points,
        anchor,
    }
}

/// Snappt eine Zeiger-Position für Hover und Klick.
pub fn snap_pointer(state: &AppState, world_pos: Vec3) -> SnapResult {
    let targets = build_targets(state, None);
    snap_point(world_pos, &targets, &state.options.snap_thresholds())
}

/// Snappt die Zielposition eines gezogenen Kamera-Ziels.
///
/// Mit Ctrl wird nur entlang der dominanten Achse relativ zum Startpunkt bewegt.
pub fn snap_drag(state: &AppState, target_id: u64, origin: Vec3, world_pos: Vec3) -> SnapResult {
    if state.editor.ctrl_held {
        let delta = world_pos - origin;
        return if delta.x.abs() >= delta.z.abs() {
            SnapResult {
                position: Vec3::new(world_pos.x, world_pos.y, origin.z),
                kind: SnapKind::AxisZ,
            }
        } else {
            SnapResult {
                position: Vec3::new(origin.x, world_pos.y, world_pos.z),
                kind: SnapKind::AxisX,
            }
        };
    }

    let mut targets = build_targets(state, Some(target_id));
    targets.anchor = None;
    snap_point(world_pos, &targets, &state.options.snap_thresholds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Path;

    #[test]
    fn test_snap_pointer_hits_existing_waypoint() {
        let mut state = AppState::new();
        state
            .layout
            .conveyors
            .push(Path::from_points(vec![Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)]));

        let result = snap_pointer(&state, Vec3::new(0.2, 0.0, 0.1));
        assert_eq!(result.position, Vec3::ZERO);
        assert_eq!(result.kind, SnapKind::Point);
    }

    #[test]
    fn test_camera_mode_anchors_on_last_target() {
        let mut state = AppState::new();
        state.editor.mode = DrawMode::CameraTarget;
        state.layout.add_camera_target(Vec3::new(3.0, 0.0, 3.0));

        let result = snap_pointer(&state, Vec3::new(3.3, 0.0, 8.0));
        assert_eq!(result.kind, SnapKind::AxisX);
        assert_eq!(result.position, Vec3::new(3.0, 0.0, 8.0));
    }

    #[test]
    fn test_drag_ignores_dragged_target() {
        let mut state = AppState::new();
        let id = state.layout.add_camera_target(Vec3::new(3.0, 0.0, 3.0));

        let result = snap_drag(&state, id, Vec3::new(3.0, 0.0, 3.0), Vec3::new(3.2, 0.0, 3.1));
        assert_eq!(result.kind, SnapKind::None);
    }

    #[test]
    fn test_ctrl_drag_locks_dominant_axis() {
        let mut state = AppState::new();
        state.editor.ctrl_held = true;
        let origin = Vec3::new(1.0, 0.0, 1.0);

        let result = snap_drag(&state, 1, origin, Vec3::new(5.0, 0.0, 2.0));
        assert_eq!(result.position, Vec3::new(5.0, 0.0, 1.0));

        let result = snap_drag(&state, 1, origin, Vec3::new(1.5, 0.0, -4.0));
        assert_eq!(result.position, Vec3::new(1.0, 0.0, -4.0));
    }
}
