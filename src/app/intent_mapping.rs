//! Mapping von Eingabe-Intents auf mutierende App-Commands.
//!
//! Snapping wird hier berechnet, damit Commands fertige Positionen tragen.

use super::events::EditorKey;
use super::state::DrawMode;
use super::use_cases::snapping;
use super::{AppCommand, AppIntent, AppState};


/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerMoved { world_pos } => {
            if state.editor.phase.is_dragging() {
                return Vec::new();
            }
            vec![AppCommand::UpdateHover {
                snap: snapping::snap_pointer(state, world_pos),
            }]
        }
        AppIntent::PointerClicked { world_pos } => {
            if state.editor.phase.is_dragging() {
                return Vec::new();
            }
            let snap = snapping::snap_pointer(state, world_pos);
            let commit = match state.editor.mode {
                DrawMode::Conveyor | DrawMode::Vehicle => AppCommand::AddWaypoint {
                    position: snap.position,
                },
                DrawMode::CameraTarget => AppCommand::AddCameraTarget {
                    position: snap.position,
                },
            };
            vec![AppCommand::UpdateHover { snap }, commit]
        }
        AppIntent::CameraTargetPressed { target_id } => {
            if !state.layout.camera_targets.contains_key(&target_id) {
                return Vec::new();
            }
            vec![
                AppCommand::SelectCameraTarget {
                    target_id: Some(target_id),
                },
                AppCommand::BeginTargetDrag { target_id },
            ]
        }
        AppIntent::PointerDragged { world_pos } => {
            let Some((target_id, origin)) = state.editor.phase.dragged_target() else {
                return Vec::new();
            };
            let snap = snapping::snap_drag(state, target_id, origin, world_pos);
            vec![AppCommand::MoveCameraTarget {
                target_id,
                position: snap.position,
            }]
        }
        AppIntent::PointerReleased => {
            if state.editor.phase.is_dragging() {
                vec![AppCommand::EndTargetDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::KeyPressed { key } => match key {
            EditorKey::Enter | EditorKey::Escape => vec![AppCommand::FinishPath],
            EditorKey::Delete => delete_selected(state),
            EditorKey::Control => vec![AppCommand::SetAxisLockModifier { held: true }],
        },
        AppIntent::KeyReleased { key } => match key {
            EditorKey::Control => vec![AppCommand::SetAxisLockModifier { held: false }],
            _ => Vec::new(),
        },
        AppIntent::SetDrawModeRequested { mode } => vec![AppCommand::SetDrawMode { mode }],
        AppIntent::FinishPathRequested => vec![AppCommand::FinishPath],
        AppIntent::DeleteSelectedTargetRequested => delete_selected(state),
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],
        AppIntent::TogglePlaybackRequested => vec![AppCommand::TogglePlayback],
        AppIntent::FrameAdvanced { dt } => vec![AppCommand::AdvanceFrame { dt }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested { path } => vec![AppCommand::SaveOptions { path }],
    }
}

fn delete_selected(state: &AppState) -> Vec<AppCommand> {
    state
        .editor
        .selected_target
        .map(|target_id| vec![AppCommand::DeleteCameraTarget { target_id }])
        .unwrap_or_default()
}
