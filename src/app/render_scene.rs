//! Baut die Render-Szene aus dem AppState.

use super::playback;
use super::AppState;
use crate::core::{build_rounded_curve, Path, SmoothCurve};
use crate::shared::{
    CameraPose, CameraTargetMarker, ConveyorScene, PreviewScene, RenderScene, VehicleScene,
};

fn conveyor_scene(path: &Path, state: &AppState, is_draft: bool) -> Option<ConveyorScene> {
    let rounded = build_rounded_curve(path.points(), state.options.conveyor_bend_radius).ok()?;
    let materials = if state.playback.playing && !is_draft {
        playback::material_poses(&rounded.curve, &state.options, state.playback.elapsed)
    } else {
        Vec::new()
    };
    Some(ConveyorScene {
        curve: rounded.curve,
        materials,
        is_draft,
    })
}

fn vehicle_curve(path: &Path, state: &AppState) -> Option<SmoothCurve> {
    build_rounded_curve(path.points(), state.options.vehicle_bend_radius)
        .ok()
        .map(|rounded| rounded.curve)
}

/// Erstellt eine Render-Szene aus dem aktuellen State.
///
/// Pfade mit weniger als zwei Punkten erzeugen keine Geometrie.
/// Pfade in Bearbeitung werden wie fertige Pfade gerendert.
pub fn build(state: &AppState) -> RenderScene {
    let layout = &state.layout;

    let conveyors = layout
        .conveyors
        .iter()
        .filter_map(|p| conveyor_scene(p, state, false))
        .chain(conveyor_scene(&layout.conveyor_draft, state, true))
        .collect();

    let vehicles = layout
        .vehicles
        .iter()
        .filter_map(|p| vehicle_curve(p, state))
        .enumerate()
        .map(|(index, curve)| {
            let pose = playback::vehicle_pose(&curve, index, &state.playback, &state.options);
            VehicleScene { curve, pose }
        })
        .collect();

    let camera_targets = layout
        .camera_targets
        .iter()
        .map(|(&id, &position)| CameraTargetMarker {
            id,
            position,
            selected: state.editor.selected_target == Some(id),
        })
        .collect();

    let preview = PreviewScene {
        points: layout
            .draft(state.editor.mode)
            .map(|p| p.points().to_vec())
            .unwrap_or_default(),
        hover: state.editor.hover,
    };

    let camera = state.playback.playing.then(|| CameraPose {
        position: state.playback.camera.position,
        look_at: state.playback.camera.look_at,
    });

    RenderScene {
        conveyors,
        vehicles,
        camera_targets,
        preview,
        camera,
        warning: state.ui.warning_text().map(str::to_owned),
        time: state.playback.elapsed,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_short_paths_render_nothing() {
        let mut state = AppState::new();
        state.layout.conveyors.push(Path::from_points(vec![Vec3::ZERO]));
        state.layout.conveyor_draft = Path::from_points(vec![Vec3::ONE]);

        let scene = build(&state);
        assert!(scene.conveyors.is_empty());
        assert!(!scene.has_geometry());
    }

    #[test]
    fn test_draft_is_rendered_and_marked() {
        let mut state = AppState::new();
        state.layout.conveyors.push(Path::from_points(vec![
            Vec3::ZERO,
            Vec3::new(5.0, 0.0, 0.0),
        ]));
        state.layout.conveyor_draft =
            Path::from_points(vec![Vec3::new(0.0, 0.0, 5.0), Vec3::new(5.0, 0.0, 5.0)]);

        let scene = build(&state);
        assert_eq!(scene.conveyors.len(), 2);
        assert!(!scene.conveyors[0].is_draft);
        assert!(scene.conveyors[1].is_draft);
        assert_eq!(scene.preview.points.len(), 2);
        assert!(scene.camera.is_none());
    }

    #[test]
    fn test_selected_target_is_flagged() {
        let mut state = AppState::new();
        let a = state.layout.add_camera_target(Vec3::X);
        state.layout.add_camera_target(Vec3::Z);
        state.editor.selected_target = Some(a);

        let scene = build(&state);
        assert!(scene.camera_targets[0].selected);
        assert!(!scene.camera_targets[1].selected);
    }
}
